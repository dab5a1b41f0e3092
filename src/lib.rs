use db::DbClient;
use errors::DbError;
use log::info;
use models::connections::ConnectionConfig;

pub mod db;
pub mod errors;
pub mod models;
pub mod table;

pub use models::{
    connections::Dialect,
    options::{
        EnumColumnProps, ForeignKeyAction, ForeignKeyOptions, NumericColumnProps, TextColumnProps,
        UuidColumnProps,
    },
    schema::{ColumnProperty, DefaultValue, SqlDataType, TableColumn},
};
pub use table::{create_table, Table, TableBuilder};

/// Runs table definitions against one database connection.
pub struct Migrator {
    client: Box<dyn DbClient + Send + Sync>,
}

impl Migrator {
    pub fn new(client: Box<dyn DbClient + Send + Sync>) -> Self {
        Migrator { client }
    }

    pub async fn connect(config: &ConnectionConfig) -> Result<Self, DbError> {
        let client = db::connect(config).await?;
        Ok(Migrator { client })
    }

    pub async fn run(&self, table: &Table) -> Result<(), DbError> {
        table.run(self.client.as_ref()).await
    }

    /// Runs the tables in order, stopping at the first failure.
    pub async fn run_all(&self, tables: &[Table]) -> Result<(), DbError> {
        for table in tables {
            self.run(table).await?;
        }
        info!("{} tables created", tables.len());
        Ok(())
    }

    pub async fn close(self) {
        self.client.close().await;
    }
}
