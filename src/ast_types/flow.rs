//! Flow type annotation nodes

use super::Node;
use serde::{Deserialize, Serialize};

/// `T[]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeAnnotation {
    pub element_type: Box<Node>,
}

/// `?T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NullableTypeAnnotation {
    pub type_annotation: Box<Node>,
}

/// `(a: A, ...rest: R) => T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeAnnotation {
    pub params: Vec<Node>,
    #[serde(default)]
    pub rest: Option<Box<Node>>,
    pub return_type: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeParam {
    #[serde(default)]
    pub name: Option<Box<Node>>,
    pub type_annotation: Box<Node>,
    #[serde(default)]
    pub optional: bool,
}

/// A named type such as `Array` or `Foo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericTypeAnnotation {
    pub id: Box<Node>,
}
