use serde::{Deserialize, Serialize};

use super::{connections::Dialect, schema::DefaultValue};

/// Shape options for char, varchar, text and temporal columns.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextColumnProps {
    pub unique: bool,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub primary_key: bool,
    /// Overrides the length given to the builder when greater than zero.
    pub size: u32,
}

/// Shape options for integer and floating point columns.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct NumericColumnProps {
    pub unique: bool,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub primary_key: bool,
    pub unsigned: bool,
    pub auto_increment: bool,
    pub precision: u32,
    pub size: u32,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnumColumnProps {
    pub default: Option<DefaultValue>,
    pub nullable: bool,
    /// Renders the enum for this dialect instead of the table's.
    pub dialect: Option<Dialect>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct UuidColumnProps {
    pub primary_key: bool,
    pub unique: bool,
}

/// Foreign key referential action.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ForeignKeyAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            ForeignKeyAction::NoAction => "NO ACTION",
            ForeignKeyAction::Restrict => "RESTRICT",
            ForeignKeyAction::Cascade => "CASCADE",
            ForeignKeyAction::SetNull => "SET NULL",
            ForeignKeyAction::SetDefault => "SET DEFAULT",
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ForeignKeyOptions {
    pub reference_table: String,
    pub reference_column: String,
    pub on_delete: Option<ForeignKeyAction>,
    pub on_update: Option<ForeignKeyAction>,
}

impl ForeignKeyOptions {
    pub fn references(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            reference_table: table.into(),
            reference_column: column.into(),
            ..Default::default()
        }
    }

    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }
}
