//! Type definitions for GraphQL introspection responses.
//!
//! These types mirror the structure of GraphQL introspection query responses
//! and can be deserialized from JSON using serde.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Schema information from introspection. Types are kept in declaration
/// order; names are unique within one schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionSchema {
    pub types: Vec<SchemaType>,
}

/// A named schema construct, tagged by its introspection `kind`.
///
/// Objects, input objects, and interfaces carry the structure the renderer
/// documents. The remaining kinds still deserialize and pass catalog
/// filtering, but render as empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SchemaType {
    #[serde(rename = "OBJECT")]
    Object(ObjectType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(InputObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(InterfaceType),
    #[serde(rename = "SCALAR")]
    Scalar(OpaqueType),
    #[serde(rename = "ENUM")]
    Enum(OpaqueType),
    #[serde(rename = "UNION")]
    Union(OpaqueType),
}

impl SchemaType {
    /// The type's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(t) => &t.name,
            Self::InputObject(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Scalar(t) | Self::Enum(t) | Self::Union(t) => &t.name,
        }
    }
}

/// An OBJECT type: its fields plus the interfaces it implements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub interfaces: Vec<NamedTypeRef>,
}

/// An INTERFACE type. Shares the field-table shape with objects but never
/// carries an `implements` clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// An INPUT_OBJECT type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<InputField>,
}

/// Payload for the kinds the renderer leaves undocumented (scalars, enums,
/// unions). Only the name participates in filtering and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpaqueType {
    pub name: String,
    pub description: Option<String>,
}

/// A field of an object or interface type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<Argument>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// An argument of a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A field of an input object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A reference to a type by name only, as used in `interfaces` lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// A reference to a type, possibly wrapped (e.g. as a list) one level deep.
///
/// Wrapper kinds carry no name of their own; the referenced name lives on
/// the innermost `of_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeRef {
    /// Converts the reference to the name used in documentation tables.
    ///
    /// Non-list references render their bare name. List references render as
    /// `List< Inner >`, unwrapping a single level; deeper wrappers fall back
    /// to the inner reference's literal name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphql_markdown::{TypeRef, TypeKind};
    /// let type_ref = TypeRef {
    ///     kind: TypeKind::List,
    ///     name: None,
    ///     of_type: Some(Box::new(TypeRef {
    ///         kind: TypeKind::Scalar,
    ///         name: Some("String".to_string()),
    ///         of_type: None,
    ///     })),
    /// };
    /// assert_eq!(type_ref.display_name(), "List< String >");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            TypeKind::List => {
                let inner = self
                    .of_type
                    .as_ref()
                    .and_then(|of_type| of_type.name.as_deref())
                    .unwrap_or_default();
                format!("List< {inner} >")
            }
            _ => self.name.as_deref().unwrap_or_default().to_string(),
        }
    }
}

/// Parses an introspection response from its JSON text.
pub fn parse_introspection(json: &str) -> Result<IntrospectionResponse> {
    serde_json::from_str(json).map_err(Error::ParseSchema)
}
