use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DbError;

/// SQL dialect a table is rendered for.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    Postgres,
}

impl Dialect {
    /// Infers the dialect from the scheme of a connection URL.
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let scheme = url
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .ok_or_else(|| DbError::Config(format!("missing scheme in url `{}`", url)))?;

        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            other => Err(DbError::Config(format!("unsupported url scheme `{}`", other))),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => f.write_str("mysql"),
            Dialect::Postgres => f.write_str("postgres"),
        }
    }
}

impl FromStr for Dialect {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(DbError::Config(format!("unknown dialect `{}`", other))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub dialect: Dialect,
    pub database_url: String,
}

impl ConnectionConfig {
    pub fn new(dialect: Dialect, database_url: impl Into<String>) -> Self {
        Self {
            dialect,
            database_url: database_url.into(),
        }
    }

    pub fn from_url(database_url: impl Into<String>) -> Result<Self, DbError> {
        let database_url = database_url.into();
        let dialect = Dialect::from_url(&database_url)?;

        Ok(Self {
            dialect,
            database_url,
        })
    }

    /// Reads `DATABASE_URL` and the optional `DATABASE_DIALECT` override,
    /// loading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, DbError> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| DbError::Config("DATABASE_URL must be set".to_string()))?;

        match env::var("DATABASE_DIALECT") {
            Ok(dialect) => Ok(Self::new(dialect.parse()?, database_url)),
            Err(_) => Self::from_url(database_url),
        }
    }
}
