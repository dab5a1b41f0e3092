use crate::models::{
    connections::Dialect,
    options::{
        EnumColumnProps, ForeignKeyOptions, NumericColumnProps, TextColumnProps, UuidColumnProps,
    },
    schema::{ColumnProperty, DefaultValue, SqlDataType},
};

use super::{render, Table};

const POSTGRES_UUID_DEFAULT: &str = "gen_random_uuid()";
const MYSQL_UUID_DEFAULT: &str = "uuid()";
const MYSQL_UUID_LENGTH: u32 = 36;

/// Fluent builder for a [`Table`].
///
/// Every column method appends exactly one column, in call order. Side
/// statements (enum types, foreign keys, indexes) are rendered as they are
/// declared and executed later by [`Table::run`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            table: Table::new(name, dialect),
        }
    }

    /// Appends a column with a hand-built property.
    pub fn column(mut self, name: impl Into<String>, property: ColumnProperty) -> Self {
        self.table.add_column(name, property);
        self
    }

    pub fn char(self, name: impl Into<String>, length: u32, props: Option<TextColumnProps>) -> Self {
        self.text_column(name, SqlDataType::Char, length, props)
    }

    pub fn varchar(
        self,
        name: impl Into<String>,
        length: u32,
        props: Option<TextColumnProps>,
    ) -> Self {
        self.text_column(name, SqlDataType::Varchar, length, props)
    }

    pub fn text(self, name: impl Into<String>, props: Option<TextColumnProps>) -> Self {
        self.text_column(name, SqlDataType::Text, 0, props)
    }

    pub fn date(self, name: impl Into<String>, props: Option<TextColumnProps>) -> Self {
        self.text_column(name, SqlDataType::Date, 0, props)
    }

    pub fn date_time(self, name: impl Into<String>, props: Option<TextColumnProps>) -> Self {
        self.text_column(name, SqlDataType::DateTime, 0, props)
    }

    pub fn timestamp(self, name: impl Into<String>, props: Option<TextColumnProps>) -> Self {
        self.text_column(name, SqlDataType::Timestamp, 0, props)
    }

    pub fn int(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::Int, props)
    }

    pub fn tinyint(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::TinyInt, props)
    }

    pub fn mediumint(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::MediumInt, props)
    }

    pub fn bigint(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::BigInt, props)
    }

    pub fn boolean(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::Bool, props)
    }

    pub fn float(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::Float, props)
    }

    pub fn double(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::Double, props)
    }

    pub fn real(self, name: impl Into<String>, props: Option<NumericColumnProps>) -> Self {
        self.numeric_column(name, SqlDataType::Real, props)
    }

    pub fn double_precision(
        self,
        name: impl Into<String>,
        props: Option<NumericColumnProps>,
    ) -> Self {
        self.numeric_column(name, SqlDataType::DoublePrecision, props)
    }

    /// Declares an enum column.
    ///
    /// `options` must hold at least one value; an empty list is not rejected
    /// and renders DDL the database will refuse.
    ///
    /// MySQL renders the options inline. On PostgreSQL a named type
    /// `<table>_<column>_type` is created first and the column refers to it.
    pub fn enumeration<I, S>(
        mut self,
        name: impl Into<String>,
        options: I,
        props: Option<EnumColumnProps>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut property = ColumnProperty::new(SqlDataType::Enum);
        property.enum_options = options.into_iter().map(Into::into).collect();

        if let Some(props) = props {
            property.default = props.default;
            property.nullable = props.nullable;
            property.dialect = props.dialect;
        }

        if property.dialect.unwrap_or(self.table.dialect) == Dialect::Postgres {
            let type_name = format!("{}_{}_type", self.table.name, name);
            self.table
                .enum_statements
                .push(render::enum_type_statement(&type_name, &property.enum_options));
            property.type_name = Some(type_name);
        }

        self.column(name, property)
    }

    pub fn serial(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnProperty::new(SqlDataType::Serial))
    }

    pub fn big_serial(self, name: impl Into<String>) -> Self {
        let mut property = ColumnProperty::new(SqlDataType::BigSerial);
        property.unsigned = true;
        self.column(name, property)
    }

    /// Auto-incrementing integer primary key.
    pub fn increment(self, name: impl Into<String>) -> Self {
        let property = match self.table.dialect {
            Dialect::Postgres => ColumnProperty {
                primary_key: true,
                ..ColumnProperty::new(SqlDataType::Serial)
            },
            Dialect::MySql => ColumnProperty {
                auto_increment: true,
                ..ColumnProperty::new(SqlDataType::Int)
            },
        };
        self.column(name, property)
    }

    /// Auto-incrementing unsigned big integer primary key.
    pub fn big_increment(self, name: impl Into<String>) -> Self {
        let property = match self.table.dialect {
            Dialect::Postgres => ColumnProperty {
                primary_key: true,
                unsigned: true,
                ..ColumnProperty::new(SqlDataType::BigSerial)
            },
            Dialect::MySql => ColumnProperty {
                auto_increment: true,
                unsigned: true,
                ..ColumnProperty::new(SqlDataType::BigInt)
            },
        };
        self.column(name, property)
    }

    /// UUID column defaulting to a server-generated value.
    pub fn uuid(self, name: impl Into<String>, props: Option<UuidColumnProps>) -> Self {
        let mut property = match self.table.dialect {
            Dialect::Postgres => ColumnProperty {
                default: Some(DefaultValue::raw(POSTGRES_UUID_DEFAULT)),
                ..ColumnProperty::new(SqlDataType::Uuid)
            },
            Dialect::MySql => ColumnProperty {
                default: Some(DefaultValue::raw(MYSQL_UUID_DEFAULT)),
                ..ColumnProperty::sized(SqlDataType::Varchar, MYSQL_UUID_LENGTH)
            },
        };

        if let Some(props) = props {
            property.primary_key = props.primary_key;
            property.unique = props.unique;
        }

        self.column(name, property)
    }

    /// Queues an `ALTER TABLE ... ADD FOREIGN KEY` for `column`.
    pub fn foreign_key(mut self, column: &str, options: ForeignKeyOptions) -> Self {
        let statement = render::foreign_key_statement(&self.table.name, column, &options);
        self.table.foreign_key_statements.push(statement);
        self
    }

    /// Queues a `CREATE INDEX` over `columns`.
    pub fn create_index<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        let statement = render::create_index_statement(&self.table.name, &columns);
        self.table.index_statements.push(statement);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }

    fn text_column(
        self,
        name: impl Into<String>,
        data_type: SqlDataType,
        size: u32,
        props: Option<TextColumnProps>,
    ) -> Self {
        let mut property = ColumnProperty::sized(data_type, size);

        if let Some(props) = props {
            property.unique = props.unique;
            property.nullable = props.nullable;
            property.default = props.default;
            property.primary_key = props.primary_key;
            if props.size > 0 {
                property.size = props.size;
            }
        }

        self.column(name, property)
    }

    fn numeric_column(
        self,
        name: impl Into<String>,
        data_type: SqlDataType,
        props: Option<NumericColumnProps>,
    ) -> Self {
        let mut property = ColumnProperty::new(data_type);

        if let Some(props) = props {
            property.unique = props.unique;
            property.nullable = props.nullable;
            property.default = props.default;
            property.primary_key = props.primary_key;
            property.unsigned = props.unsigned;
            property.auto_increment = props.auto_increment;
            property.precision = props.precision;
            property.size = props.size;
        }

        self.column(name, property)
    }
}
