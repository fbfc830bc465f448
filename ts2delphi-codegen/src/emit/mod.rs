//! Serialize a populated [`UnitModel`] into Pascal source text.

mod implementation;
mod types;

pub use implementation::{emit_block, emit_implementations};
pub use types::emit_types;

use crate::{
    TranslationContext,
    unit::{UnitKind, UnitModel},
    writer::{Indent, Writer},
};

/// Render the whole file for `unit`.
///
/// Layout: header, `interface` with the `uses` clause and `type` section,
/// `implementation`, then the program main block or the unit terminator.
pub fn render_unit(
    unit: &UnitModel<'_>,
    indent: Indent,
    ctx: &mut TranslationContext<'_>,
) -> String {
    let mut w = Writer::new(indent);

    w.write_line(&format!("{} {};", unit.kind(), unit.name()));
    w.blank_line();

    w.write_line("interface");
    w.indent();

    if unit.has_used_units() {
        let uses: Vec<String> = unit.used_units().map(ToString::to_string).collect();
        w.write_line(&format!("uses {};", uses.join(", ")));
        w.blank_line();
    }

    if unit.has_types() {
        w.write_line("type");
        w.indent();
        emit_types(unit, &mut w);
        w.dedent();
        w.blank_line();
    }

    if !unit.has_used_units() && !unit.has_types() {
        w.blank_line();
    }

    w.dedent();

    if unit.has_implementations() {
        w.write_line("implementation");
        w.indent();
        emit_implementations(unit, &mut w, ctx);
        w.dedent();
        w.blank_line();
    }

    match unit.kind() {
        UnitKind::Program => {
            emit_block(unit.body().unwrap_or_default(), &mut w, ctx, unit.name(), "end.");
        }
        UnitKind::Unit => {
            w.write_line("end.");
        }
    }

    w.build()
}
