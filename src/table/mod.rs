//! Table definitions and the builder used to declare them.

use serde::{Deserialize, Serialize};

use crate::models::{
    connections::Dialect,
    schema::{ColumnProperty, TableColumn},
};

pub mod builder;
pub mod executor;
pub mod render;

pub use builder::TableBuilder;

/// A finalized table: its columns plus the side statements that run with it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Table {
    name: String,
    dialect: Dialect,
    columns: Vec<TableColumn>,
    enum_statements: Vec<String>,
    foreign_key_statements: Vec<String>,
    index_statements: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            dialect,
            columns: Vec::new(),
            enum_statements: Vec::new(),
            foreign_key_statements: Vec::new(),
            index_statements: Vec::new(),
        }
    }

    pub fn builder(name: impl Into<String>, dialect: Dialect) -> TableBuilder {
        TableBuilder::new(name, dialect)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn enum_statements(&self) -> &[String] {
        &self.enum_statements
    }

    pub fn foreign_key_statements(&self) -> &[String] {
        &self.foreign_key_statements
    }

    pub fn index_statements(&self) -> &[String] {
        &self.index_statements
    }

    /// Appends a column; names are not checked for duplicates.
    pub fn add_column(&mut self, name: impl Into<String>, property: ColumnProperty) {
        self.columns.push(TableColumn::new(name, property));
    }
}

/// Starts a table declaration.
pub fn create_table(name: impl Into<String>, dialect: Dialect) -> TableBuilder {
    TableBuilder::new(name, dialect)
}
