//! Classes become class types, field initializers a constructor.

use std::borrow::Cow;

use indexmap::IndexMap;
use tracing::debug;
use ts2delphi_ast::{ClassDeclaration, Expression, SourceFile, Statement};

use super::Lexer;
use crate::{
    Result, TranslationContext,
    unit::{ClassMember, ImplKind, TypeEntry, UnitModel},
};

/// Registers classes with their fields.
///
/// Every initialized field adds one `this.<field> = <initializer>`
/// assignment to a single synthesized constructor, in field order.
pub struct ClassStage;

impl Lexer for ClassStage {
    fn name(&self) -> &'static str {
        "classes"
    }

    fn description(&self) -> &'static str {
        "Register classes and synthesize constructors from field initializers"
    }

    fn lex<'a>(
        &self,
        file: &'a SourceFile,
        unit: &mut UnitModel<'a>,
        _ctx: &mut TranslationContext<'_>,
    ) -> Result<()> {
        for class in &file.classes {
            debug!(class = %class.name, "parsing class");
            let members = collect_members(class, unit);
            unit.register_type(TypeEntry::class(&class.name, class.extends.clone(), members));
        }
        Ok(())
    }
}

fn collect_members(
    class: &ClassDeclaration,
    unit: &mut UnitModel<'_>,
) -> IndexMap<String, ClassMember> {
    let mut members = IndexMap::new();

    for property in &class.properties {
        members.insert(
            property.name.clone(),
            ClassMember {
                entry: TypeEntry::var(&property.name, property.ty.clone())
                    .with_visibility(property.visibility),
                is_static: property.is_static,
            },
        );

        if let Some(initializer) = &property.initializer {
            let assignment = Expression::assign(
                Expression::this_member(&property.name),
                Expression::raw(initializer.trim()),
            );
            unit.register_implementation(
                ImplKind::Constructor,
                &class.name,
                &[],
                None,
                Cow::Owned(Vec::new()),
            )
            .push_statement(Statement::expression(assignment));
        }
    }

    members
}
