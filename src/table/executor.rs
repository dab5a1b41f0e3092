use log::{debug, error, info};

use crate::{db::DbClient, errors::DbError};

use super::Table;

impl Table {
    /// Runs every statement of the table against `client`.
    ///
    /// Order is enum types, the table itself, foreign keys, then indexes.
    /// The first failing statement aborts the run and its error is returned;
    /// objects created before it are left in place.
    pub async fn run<C>(&self, client: &C) -> Result<(), DbError>
    where
        C: DbClient + ?Sized,
    {
        info!("creating table {} ({})", self.name, self.dialect);

        for statement in self.statements() {
            debug!("executing: {}", statement);

            if let Err(e) = client.execute(&statement).await {
                error!("statement failed for table {}: {}", self.name, e);
                return Err(e);
            }
        }

        info!("table {} created", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{connections::Dialect, options::ForeignKeyOptions},
        Migrator,
    };
    use async_trait::async_trait;
    use mockall::{mock, predicate, Sequence};

    mock! {
        pub DbClientMock {}

        #[async_trait]
        impl DbClient for DbClientMock {
            async fn execute(&self, query: &str) -> Result<(), DbError>;
            async fn close(&self);
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn profiles_table() -> Table {
        Table::builder("profiles", Dialect::Postgres)
            .uuid("id", None)
            .uuid("user_id", None)
            .enumeration("kind", ["basic", "premium"], None)
            .create_index(["user_id"])
            .foreign_key("user_id", ForeignKeyOptions::references("users", "id"))
            .build()
    }

    fn expect_in_order(mock: &mut MockDbClientMock, statements: &[String]) {
        let mut seq = Sequence::new();
        for statement in statements {
            mock.expect_execute()
                .with(predicate::eq(statement.clone()))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
    }

    #[tokio::test]
    async fn test_run_executes_phases_in_order() {
        init_logger();
        let table = profiles_table();
        let mut mock_db = MockDbClientMock::new();

        let expected = vec![
            "DROP TYPE IF EXISTS profiles_kind_type; CREATE TYPE profiles_kind_type AS ENUM('basic', 'premium');".to_string(),
            "CREATE TABLE IF NOT EXISTS profiles(id uuid DEFAULT gen_random_uuid(),user_id uuid DEFAULT gen_random_uuid(),kind profiles_kind_type)".to_string(),
            "ALTER TABLE profiles ADD FOREIGN KEY (user_id) REFERENCES users(id);".to_string(),
            "CREATE INDEX profiles_user_id_idx ON profiles(user_id);".to_string(),
        ];
        expect_in_order(&mut mock_db, &expected);

        let result = table.run(&mock_db).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_aborts_on_first_failure() {
        init_logger();
        let table = profiles_table();
        let mut mock_db = MockDbClientMock::new();
        let mut seq = Sequence::new();

        mock_db
            .expect_execute()
            .with(predicate::eq(table.enum_statements()[0].clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_db
            .expect_execute()
            .with(predicate::eq(table.to_sql()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(DbError::General("relation already exists".to_string())));

        let result = table.run(&mock_db).await;
        assert!(matches!(result, Err(DbError::General(msg)) if msg == "relation already exists"));
    }

    #[tokio::test]
    async fn test_run_stops_when_enum_phase_fails() {
        init_logger();
        let table = profiles_table();
        let mut mock_db = MockDbClientMock::new();

        mock_db
            .expect_execute()
            .times(1)
            .returning(|_| Err(DbError::General("permission denied".to_string())));

        assert!(table.run(&mock_db).await.is_err());
    }

    #[tokio::test]
    async fn test_migrator_runs_tables_in_order() {
        init_logger();
        let users = Table::builder("users", Dialect::MySql)
            .increment("id")
            .varchar("email", 50, None)
            .build();
        let posts = Table::builder("posts", Dialect::MySql)
            .increment("id")
            .int("user_id", None)
            .foreign_key("user_id", ForeignKeyOptions::references("users", "id"))
            .build();

        let mut mock_db = MockDbClientMock::new();
        let mut expected = users.statements();
        expected.extend(posts.statements());
        expect_in_order(&mut mock_db, &expected);
        mock_db.expect_close().times(1).returning(|| ());

        let migrator = Migrator::new(Box::new(mock_db));
        migrator.run_all(&[users, posts]).await.unwrap();
        migrator.close().await;
    }
}
