use async_trait::async_trait;
use log::info;

use crate::{
    errors::DbError,
    models::connections::{ConnectionConfig, Dialect},
};

pub mod mysql;
pub mod postgres;

use mysql::MySqlClient;
use postgres::PostgresClient;

/// A database handle able to run raw DDL.
#[async_trait]
pub trait DbClient {
    async fn execute(&self, query: &str) -> Result<(), DbError>;
    async fn close(&self);
}

/// Opens a client for the dialect named in `config`.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DbClient + Send + Sync>, DbError> {
    let client: Box<dyn DbClient + Send + Sync> = match config.dialect {
        Dialect::Postgres => Box::new(PostgresClient::connect(&config.database_url).await?),
        Dialect::MySql => Box::new(MySqlClient::connect(&config.database_url).await?),
    };
    info!("connected to {} database", config.dialect);

    Ok(client)
}
