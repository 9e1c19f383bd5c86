use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeName;

/// Primitive column types a sheet may declare in its third header line.
///
/// Variant names mirror [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    String,
}

impl ColumnType {
    /// Canonical lowercase token, as written in the type header line and in
    /// exported type lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
        }
    }

    /// Parse a type token. Tokens match exactly; there are no aliases.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "int" => Some(ColumnType::Int),
            "float" => Some(ColumnType::Float),
            "bool" => Some(ColumnType::Bool),
            "string" => Some(ColumnType::String),
            _ => None,
        }
    }

    /// All accepted type tokens, for diagnostics.
    pub fn variants() -> &'static [&'static str] {
        &["int", "float", "bool", "string"]
    }
}

impl FromStr for ColumnType {
    type Err = UnknownTypeName;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        ColumnType::parse(token).ok_or_else(|| UnknownTypeName {
            token: token.to_string(),
        })
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// One schema column: its comment, field name, and declared type, taken
/// positionally from the three header lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub comment: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

impl Column {
    pub fn new(comment: impl Into<String>, name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
            ty,
        }
    }
}

/// Ordered column definitions parsed from a sheet's first three lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of columns; every record carries exactly this many values.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Position of the column with this exact name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// The column backing the identifiable capability: literally named `id`
    /// and typed `int`. Anything else cannot produce an integer id.
    pub fn id_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == "id" && c.ty == ColumnType::Int)
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Canonical type tokens in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.ty.type_name())
    }
}

impl From<Vec<Column>> for Schema {
    fn from(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}
