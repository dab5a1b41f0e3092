use async_trait::async_trait;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

use crate::errors::DbError;

use super::DbClient;

pub struct MySqlClient {
    pub pool: MySqlPool,
}

impl MySqlClient {
    pub async fn connect(database_url: &str) -> Result<Self, DbError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DbClient for MySqlClient {
    async fn execute(&self, query: &str) -> Result<(), DbError> {
        sqlx::raw_sql(query)
            .execute(&self.pool)
            .await
            .map_err(DbError::Sqlx)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
