//! The interface `type` section.

use ts2delphi_ast::Visibility;

use crate::{
    unit::{TypeEntry, TypeKind, UnitModel},
    writer::Writer,
};

/// Member groups in emission order.
const VISIBILITY_GROUPS: [Visibility; 3] =
    [Visibility::Public, Visibility::Private, Visibility::Protected];

/// Write one declaration per registered type, in registration order.
///
/// Members are grouped under `public`, `private` and `protected` labels;
/// members without a visibility tag are left out.
pub fn emit_types(unit: &UnitModel<'_>, w: &mut Writer) {
    for entry in unit.types() {
        w.write_line(&declaration_header(entry));
        w.indent();

        if let Some(members) = entry.members() {
            for visibility in VISIBILITY_GROUPS {
                let group: Vec<&TypeEntry> = members
                    .iter()
                    .copied()
                    .filter(|m| m.visibility == Some(visibility))
                    .collect();
                write_group(w, visibility, &group);
            }
        }

        w.dedent();
    }
}

fn declaration_header(entry: &TypeEntry) -> String {
    let mut header = format!("{} = {}", entry.name, entry.kind.keyword());
    if let TypeKind::Class {
        parent: Some(parent),
        ..
    } = &entry.kind
    {
        header.push_str(&format!(" ({})", parent));
    }
    header
}

fn write_group(w: &mut Writer, visibility: Visibility, members: &[&TypeEntry]) {
    if members.is_empty() {
        return;
    }
    w.write_line(visibility.as_str());
    w.indent();
    for member in members {
        w.write_line(&member.name);
    }
    w.dedent();
}
