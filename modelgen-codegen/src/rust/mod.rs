//! Rust code generation modules.

pub mod enums;
pub mod package;
pub mod structs;
pub mod tuples;
pub mod types;

pub use enums::EnumRenderer;
pub use package::PackageRenderer;
pub use structs::{RenderedField, StructRenderer};
pub use tuples::TupleRenderer;
pub use types::{DYNAMIC_VALUE, FieldShape, MAP_TYPE, TypeMapper};

/// Derives for structs and tuple structs.
pub const STRUCT_DERIVE: &str = "#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]";

/// Derives for enums whose variants carry no payload.
pub const UNIT_ENUM_DERIVE: &str =
    "#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]";

/// Derives for enums with payload variants.
pub const TAGGED_ENUM_DERIVE: &str = "#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]";

/// Indents every non-empty line of `text` by `level` steps of four spaces.
pub(crate) fn indent(text: &str, level: usize) -> String {
    let pad = "    ".repeat(level);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends `description` as doc comment lines after a blank doc line.
pub(crate) fn push_doc_lines(output: &mut String, description: Option<&str>) {
    let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return;
    };
    output.push_str("///\n");
    for line in description.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str("///\n");
        } else {
            output.push_str(&format!("/// {line}\n"));
        }
    }
}
