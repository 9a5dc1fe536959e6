//! Markdown rendering of schema types.
//!
//! Each documentable type becomes one self-contained fragment: a heading
//! line, the type's description, and a table of its fields. Fragments start
//! and end with a newline so concatenating them yields a well-formed
//! document without extra separators.

use std::fmt::Write;

use crate::types::{
    Argument, Field, InputField, InputObjectType, InterfaceType, NamedTypeRef, ObjectType,
    SchemaType,
};

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Markdown heading token placed before each type's title line.
    pub type_name_heading: String,
}

impl Default for RenderOptions {
    /// Second-level headings, leaving `#` for the document's own title.
    fn default() -> Self {
        Self {
            type_name_heading: "##".to_string(),
        }
    }
}

const FIELD_TABLE_HEADER: &str =
    "| Field | Type | Arguments | Description |\n|-------|------|-----------|-------------|";

const INPUT_FIELD_TABLE_HEADER: &str =
    "| Field | Type | Description |\n|-------|------|-------------|";

/// Renders one schema type as a Markdown fragment.
///
/// Objects, input objects, and interfaces each produce a heading plus a
/// field table; every other kind renders as empty text.
#[must_use]
pub fn render_type(type_def: &SchemaType, options: &RenderOptions) -> String {
    match type_def {
        SchemaType::Object(t) => render_object(t, options),
        SchemaType::InputObject(t) => render_input_object(t, options),
        SchemaType::Interface(t) => render_interface(t, options),
        SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::Union(_) => String::new(),
    }
}

/// Renders a resolved ordering as one Markdown document.
///
/// Fragments are concatenated in slot order, without deduplication: a type
/// appearing twice is rendered twice. Unresolved slots are skipped.
#[must_use]
#[tracing::instrument(skip(types, options), fields(slots = types.len()))]
pub fn render_document(types: &[Option<&SchemaType>], options: &RenderOptions) -> String {
    let mut doc = String::new();
    let mut rendered = 0usize;
    for type_def in types.iter().copied().flatten() {
        doc.push_str(&render_type(type_def, options));
        rendered += 1;
    }
    tracing::debug!(rendered, doc_length = doc.len(), "document assembly complete");
    doc
}

fn render_object(type_def: &ObjectType, options: &RenderOptions) -> String {
    let mut block = String::new();
    write!(
        block,
        "\n{} Type {}",
        options.type_name_heading, type_def.name
    )
    .unwrap();
    if !type_def.interfaces.is_empty() {
        block.push_str(" implements ");
        block.push_str(&implements_list(&type_def.interfaces));
    }
    block.push_str("\n\n");
    block.push_str(type_def.description.as_deref().unwrap_or_default());
    block.push_str("\n\n");
    block.push_str(FIELD_TABLE_HEADER);
    block.push_str(&field_rows(&type_def.fields));
    block.push('\n');
    block
}

fn render_interface(type_def: &InterfaceType, options: &RenderOptions) -> String {
    let mut block = String::new();
    write!(
        block,
        "\n{} Interface {}\n\n",
        options.type_name_heading, type_def.name
    )
    .unwrap();
    block.push_str(type_def.description.as_deref().unwrap_or_default());
    block.push_str("\n\n");
    block.push_str(FIELD_TABLE_HEADER);
    block.push_str(&field_rows(&type_def.fields));
    block.push('\n');
    block
}

fn render_input_object(type_def: &InputObjectType, options: &RenderOptions) -> String {
    let mut block = String::new();
    write!(
        block,
        "\n{} Input {}\n\n",
        options.type_name_heading, type_def.name
    )
    .unwrap();
    block.push_str(type_def.description.as_deref().unwrap_or_default());
    block.push_str("\n\n");
    block.push_str(INPUT_FIELD_TABLE_HEADER);
    block.push_str(&input_field_rows(&type_def.input_fields));
    block.push('\n');
    block
}

/// One table row per field; an empty field list renders as empty text, so
/// the table keeps its header and gains no data rows.
fn field_rows(fields: &[Field]) -> String {
    let mut rows = String::new();
    for field in fields {
        write!(
            rows,
            "\n| {} | {} | {} | {} |",
            field.name,
            field.type_ref.display_name(),
            argument_list(&field.args),
            cell_text(field.description.as_deref()),
        )
        .unwrap();
    }
    rows
}

/// Input-field rows render the type by bare name only; list wrappers are
/// not unwrapped here, unlike field and argument types.
fn input_field_rows(input_fields: &[InputField]) -> String {
    let mut rows = String::new();
    for input_field in input_fields {
        write!(
            rows,
            "\n| {} | {} | {} |",
            input_field.name,
            input_field.type_ref.name.as_deref().unwrap_or_default(),
            cell_text(input_field.description.as_deref()),
        )
        .unwrap();
    }
    rows
}

/// `name: Type` pairs joined with `", "`; empty input renders as empty text.
fn argument_list(args: &[Argument]) -> String {
    args.iter()
        .map(|arg| format!("{}: {}", arg.name, arg.type_ref.display_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn implements_list(interfaces: &[NamedTypeRef]) -> String {
    interfaces
        .iter()
        .map(|interface| interface.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapses a description into a single table cell: embedded line breaks
/// become `", "`, so paragraph structure is not preserved.
fn cell_text(description: Option<&str>) -> String {
    description.unwrap_or_default().replace('\n', ", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OpaqueType, TypeKind, TypeRef};

    fn scalar_ref(name: &str) -> TypeRef {
        TypeRef {
            kind: TypeKind::Scalar,
            name: Some(name.to_string()),
            of_type: None,
        }
    }

    fn list_ref(inner: &str) -> TypeRef {
        TypeRef {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(TypeRef {
                kind: TypeKind::Object,
                name: Some(inner.to_string()),
                of_type: None,
            })),
        }
    }

    fn field(name: &str, type_ref: TypeRef) -> Field {
        Field {
            name: name.to_string(),
            description: None,
            args: vec![],
            type_ref,
        }
    }

    fn widget() -> SchemaType {
        SchemaType::Object(ObjectType {
            name: "Widget".to_string(),
            description: Some("A widget.".to_string()),
            fields: vec![field("id", scalar_ref("ID"))],
            interfaces: vec![],
        })
    }

    #[test]
    fn test_object_block() {
        let rendered = render_type(&widget(), &RenderOptions::default());
        assert_eq!(
            rendered,
            "\n## Type Widget\n\nA widget.\n\n\
             | Field | Type | Arguments | Description |\n\
             |-------|------|-----------|-------------|\n\
             | id | ID |  |  |\n"
        );
    }

    #[test]
    fn test_object_block_with_interfaces() {
        let type_def = SchemaType::Object(ObjectType {
            name: "Widget".to_string(),
            description: None,
            fields: vec![],
            interfaces: vec![
                NamedTypeRef {
                    name: "Node".to_string(),
                },
                NamedTypeRef {
                    name: "Timestamped".to_string(),
                },
            ],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert!(rendered.starts_with("\n## Type Widget implements Node, Timestamped\n"));
    }

    #[test]
    fn test_object_without_fields_keeps_table_header() {
        let type_def = SchemaType::Object(ObjectType {
            name: "Empty".to_string(),
            description: None,
            fields: vec![],
            interfaces: vec![],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert_eq!(
            rendered,
            "\n## Type Empty\n\n\n\n\
             | Field | Type | Arguments | Description |\n\
             |-------|------|-----------|-------------|\n"
        );
    }

    #[test]
    fn test_field_row_with_arguments_and_list_type() {
        let type_def = SchemaType::Object(ObjectType {
            name: "Query".to_string(),
            description: None,
            fields: vec![Field {
                name: "widgets".to_string(),
                description: Some("All widgets\nin order".to_string()),
                args: vec![
                    Argument {
                        name: "first".to_string(),
                        type_ref: scalar_ref("Int"),
                    },
                    Argument {
                        name: "after".to_string(),
                        type_ref: scalar_ref("Cursor"),
                    },
                ],
                type_ref: list_ref("Widget"),
            }],
            interfaces: vec![],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert!(rendered.contains(
            "\n| widgets | List< Widget > | first: Int, after: Cursor | All widgets, in order |"
        ));
    }

    #[test]
    fn test_interface_block() {
        let type_def = SchemaType::Interface(InterfaceType {
            name: "Node".to_string(),
            description: Some("An identifiable object.".to_string()),
            fields: vec![field("id", scalar_ref("ID"))],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert_eq!(
            rendered,
            "\n## Interface Node\n\nAn identifiable object.\n\n\
             | Field | Type | Arguments | Description |\n\
             |-------|------|-----------|-------------|\n\
             | id | ID |  |  |\n"
        );
    }

    #[test]
    fn test_input_block_renders_bare_type_names() {
        let type_def = SchemaType::InputObject(InputObjectType {
            name: "WidgetFilter".to_string(),
            description: Some("Filter criteria.".to_string()),
            input_fields: vec![InputField {
                name: "ids".to_string(),
                description: Some("Match these ids".to_string()),
                // Input-field types are rendered by name only, so a list
                // wrapper contributes nothing here.
                type_ref: list_ref("ID"),
            }],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert_eq!(
            rendered,
            "\n## Input WidgetFilter\n\nFilter criteria.\n\n\
             | Field | Type | Description |\n\
             |-------|------|-------------|\n\
             | ids |  | Match these ids |\n"
        );
    }

    #[test]
    fn test_type_description_is_rendered_verbatim() {
        let type_def = SchemaType::Object(ObjectType {
            name: "Widget".to_string(),
            description: Some("First paragraph.\n\nSecond paragraph.".to_string()),
            fields: vec![],
            interfaces: vec![],
        });
        let rendered = render_type(&type_def, &RenderOptions::default());
        assert!(rendered.contains("\n\nFirst paragraph.\n\nSecond paragraph.\n\n"));
    }

    #[test]
    fn test_unrenderable_kinds_produce_empty_text() {
        let opaque = OpaqueType {
            name: "Color".to_string(),
            description: Some("ignored".to_string()),
        };
        let options = RenderOptions::default();
        assert_eq!(render_type(&SchemaType::Scalar(opaque.clone()), &options), "");
        assert_eq!(render_type(&SchemaType::Enum(opaque.clone()), &options), "");
        assert_eq!(render_type(&SchemaType::Union(opaque), &options), "");
    }

    #[test]
    fn test_heading_marker_is_configurable() {
        let options = RenderOptions {
            type_name_heading: "###".to_string(),
        };
        let rendered = render_type(&widget(), &options);
        assert!(rendered.starts_with("\n### Type Widget\n"));
    }

    #[test]
    fn test_document_is_concatenation_of_fragments() {
        let object = widget();
        let interface = SchemaType::Interface(InterfaceType {
            name: "Node".to_string(),
            description: None,
            fields: vec![],
        });
        let options = RenderOptions::default();

        let doc = render_document(&[Some(&object), Some(&interface)], &options);
        let expected = format!(
            "{}{}",
            render_type(&object, &options),
            render_type(&interface, &options)
        );
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_document_renders_duplicates_twice() {
        let object = widget();
        let options = RenderOptions::default();
        let once = render_type(&object, &options);
        let doc = render_document(&[Some(&object), Some(&object)], &options);
        assert_eq!(doc, format!("{once}{once}"));
    }

    #[test]
    fn test_document_skips_unresolved_slots() {
        let object = widget();
        let options = RenderOptions::default();
        let doc = render_document(&[None, Some(&object), None], &options);
        assert_eq!(doc, render_type(&object, &options));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let object = widget();
        let options = RenderOptions::default();
        assert_eq!(
            render_type(&object, &options),
            render_type(&object, &options)
        );
    }
}
