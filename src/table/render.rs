//! Pure rendering of tables and columns into DDL strings.

use crate::models::{
    connections::Dialect,
    options::ForeignKeyOptions,
    schema::{quote_literal, SqlDataType, TableColumn},
};

use super::Table;

/// Renders one column clause, e.g. `price double(10, 2) UNSIGNED NULL`.
///
/// `UNSIGNED` is only emitted for MySQL; PostgreSQL has no unsigned types, so
/// the flag is ignored there.
pub fn column_clause(column: &TableColumn, dialect: Dialect) -> String {
    let property = &column.property;
    let type_name = property
        .type_name
        .as_deref()
        .unwrap_or_else(|| property.data_type.as_sql());

    let mut clause = format!("{} {}", column.name, type_name);

    if property.size > 0 {
        if property.precision > 0 {
            clause.push_str(&format!("({}, {})", property.size, property.precision));
        } else {
            clause.push_str(&format!("({})", property.size));
        }
    }

    if property.data_type == SqlDataType::Enum && property.type_name.is_none() {
        clause.push_str(&format!("({})", quoted_list(&property.enum_options)));
    }

    // PostgreSQL has no unsigned integer types.
    if property.unsigned && dialect == Dialect::MySql {
        clause.push_str(" UNSIGNED");
    }
    if property.auto_increment {
        clause.push_str(" AUTO_INCREMENT PRIMARY KEY");
    }
    if property.unique {
        clause.push_str(" UNIQUE");
    }
    if property.primary_key {
        clause.push_str(" PRIMARY KEY");
    }
    if property.nullable {
        clause.push_str(" NULL");
    }
    if let Some(default) = &property.default {
        clause.push_str(" DEFAULT ");
        clause.push_str(&default.to_sql());
    }

    clause
}

/// Renders `CREATE TABLE IF NOT EXISTS <name>(<col>,<col>,...)`.
pub fn create_table_statement(table: &Table) -> String {
    let columns: Vec<String> = table
        .columns()
        .iter()
        .map(|column| column_clause(column, table.dialect()))
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {}({})",
        table.name(),
        columns.join(",")
    )
}

pub fn create_index_statement(table: &str, columns: &[String]) -> String {
    format!(
        "CREATE INDEX {}_{}_idx ON {}({});",
        table,
        columns.join("_"),
        table,
        columns.join(", ")
    )
}

pub fn foreign_key_statement(table: &str, column: &str, options: &ForeignKeyOptions) -> String {
    let mut sql = format!(
        "ALTER TABLE {} ADD FOREIGN KEY ({}) REFERENCES {}({})",
        table, column, options.reference_table, options.reference_column
    );

    if let Some(action) = options.on_delete {
        sql.push_str(" ON DELETE ");
        sql.push_str(action.as_sql());
    }
    if let Some(action) = options.on_update {
        sql.push_str(" ON UPDATE ");
        sql.push_str(action.as_sql());
    }
    sql.push(';');

    sql
}

/// Renders the PostgreSQL statement pair that (re)creates an enum type.
pub fn enum_type_statement(type_name: &str, options: &[String]) -> String {
    format!(
        "DROP TYPE IF EXISTS {}; CREATE TYPE {} AS ENUM({});",
        type_name,
        type_name,
        quoted_list(options)
    )
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| quote_literal(value))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Table {
    /// Renders the `CREATE TABLE` statement.
    pub fn to_sql(&self) -> String {
        create_table_statement(self)
    }

    /// Every statement in execution order: enum types, the table, foreign
    /// keys, then indexes.
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::with_capacity(
            self.enum_statements.len()
                + 1
                + self.foreign_key_statements.len()
                + self.index_statements.len(),
        );
        statements.extend(self.enum_statements.iter().cloned());
        statements.push(self.to_sql());
        statements.extend(self.foreign_key_statements.iter().cloned());
        statements.extend(self.index_statements.iter().cloned());
        statements
    }
}
