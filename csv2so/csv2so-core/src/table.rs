//! Records and tables.

use std::ops::Deref;

use crate::{convert::default_value, schema::Schema, value::Value};

/// One data row, with exactly one value per schema column, positionally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(pub Vec<Value>);

impl Record {
    /// A record with every field at its column's default value. This is the
    /// starting point for row conversion, so short data rows keep defaults
    /// in their trailing fields.
    pub fn defaults(schema: &Schema) -> Self {
        Self(schema.iter().map(|c| default_value(c.ty)).collect())
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Replace the field at `index`. Panics when `index` is out of bounds;
    /// records are always built at schema width via [`Record::defaults`].
    pub fn set(&mut self, index: usize, value: Value) {
        self.0[index] = value;
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl Deref for Record {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Ordered records sharing one schema. This is the persisted unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    pub fn first(&self) -> Option<&Record> {
        self.rows.first()
    }
}

impl From<Vec<Record>> for Table {
    fn from(rows: Vec<Record>) -> Self {
        Self { rows }
    }
}
