use serde::{Deserialize, Serialize};

use super::connections::Dialect;

/// Logical column kind.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDataType {
    Varchar,
    Char,
    Text,
    Date,
    DateTime,
    Timestamp,
    Int,
    TinyInt,
    MediumInt,
    BigInt,
    Bool,
    Float,
    Double,
    Real,
    DoublePrecision,
    Serial,
    BigSerial,
    Enum,
    Uuid,
}

impl SqlDataType {
    /// Returns the SQL keyword for the type.
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlDataType::Varchar => "varchar",
            SqlDataType::Char => "char",
            SqlDataType::Text => "text",
            SqlDataType::Date => "date",
            SqlDataType::DateTime => "datetime",
            SqlDataType::Timestamp => "timestamp",
            SqlDataType::Int => "int",
            SqlDataType::TinyInt => "tinyint",
            SqlDataType::MediumInt => "mediumint",
            SqlDataType::BigInt => "bigint",
            SqlDataType::Bool => "bool",
            SqlDataType::Float => "float",
            SqlDataType::Double => "double",
            SqlDataType::Real => "real",
            SqlDataType::DoublePrecision => "double precision",
            SqlDataType::Serial => "serial",
            SqlDataType::BigSerial => "bigserial",
            SqlDataType::Enum => "enum",
            SqlDataType::Uuid => "uuid",
        }
    }
}

pub fn is_numeric_column(data_type: SqlDataType) -> bool {
    matches!(
        data_type,
        SqlDataType::Int
            | SqlDataType::TinyInt
            | SqlDataType::MediumInt
            | SqlDataType::BigInt
            | SqlDataType::Bool
            | SqlDataType::Float
            | SqlDataType::Double
            | SqlDataType::Real
            | SqlDataType::Serial
            | SqlDataType::BigSerial
            | SqlDataType::DoublePrecision
    )
}

pub fn is_text_column(data_type: SqlDataType) -> bool {
    matches!(
        data_type,
        SqlDataType::Char
            | SqlDataType::Varchar
            | SqlDataType::Text
            | SqlDataType::Date
            | SqlDataType::DateTime
    )
}

/// Default value of a column.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Rendered with `Display`; NaN and infinities are not valid SQL literals.
    Float(f64),
    /// Plain string; quoted unless it looks like a function call.
    Text(String),
    /// Raw SQL expression, rendered verbatim (e.g. `gen_random_uuid()`).
    Raw(String),
}

impl DefaultValue {
    pub fn raw(expr: impl Into<String>) -> Self {
        DefaultValue::Raw(expr.into())
    }

    /// Returns the SQL representation of the default value.
    pub fn to_sql(&self) -> String {
        match self {
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::Text(s) if s.contains("()") => s.clone(),
            DefaultValue::Text(s) => quote_literal(s),
            DefaultValue::Raw(expr) => expr.clone(),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Int(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float(value)
    }
}

/// Wraps a string in single quotes, doubling embedded quotes.
pub(crate) fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Rendering-relevant attributes of one column.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColumnProperty {
    pub data_type: SqlDataType,
    /// Length for text columns, width for numeric ones. Zero means unset.
    pub size: u32,
    /// Scale, rendered as `(size, precision)` when both are set.
    pub precision: u32,
    pub default: Option<DefaultValue>,
    pub nullable: bool,
    pub auto_increment: bool,
    pub unsigned: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub enum_options: Vec<String>,
    /// Dialect override, only consulted for enum columns.
    pub dialect: Option<Dialect>,
    /// Named type that replaces the type keyword (PostgreSQL enum types).
    pub type_name: Option<String>,
}

impl ColumnProperty {
    pub fn new(data_type: SqlDataType) -> Self {
        Self {
            data_type,
            size: 0,
            precision: 0,
            default: None,
            nullable: false,
            auto_increment: false,
            unsigned: false,
            primary_key: false,
            unique: false,
            enum_options: Vec::new(),
            dialect: None,
            type_name: None,
        }
    }

    pub fn sized(data_type: SqlDataType, size: u32) -> Self {
        Self {
            size,
            ..Self::new(data_type)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    pub property: ColumnProperty,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, property: ColumnProperty) -> Self {
        Self {
            name: name.into(),
            property,
        }
    }
}
