//! Live-database tests. They need `DATABASE_URL` (a `.env` file works) and
//! are ignored by default: `cargo test -- --ignored`.

use migrator::{
    db::DbClient, models::connections::ConnectionConfig, EnumColumnProps, ForeignKeyOptions,
    Migrator, NumericColumnProps, Table, TextColumnProps, UuidColumnProps,
};

async fn setup() -> (ConnectionConfig, Box<dyn DbClient + Send + Sync>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = ConnectionConfig::from_env().expect("DATABASE_URL must be set");
    let client = migrator::db::connect(&config)
        .await
        .expect("Failed to connect to the database");

    (config, client)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_items_table() {
    let (config, client) = setup().await;

    client.execute("DROP TABLE IF EXISTS items").await.unwrap();

    let table = Table::builder("items", config.dialect)
        .increment("id")
        .varchar("name", 50, None)
        .varchar(
            "sku",
            50,
            Some(TextColumnProps {
                unique: true,
                ..Default::default()
            }),
        )
        .real("mark", None)
        .double_precision("price", None)
        .enumeration(
            "status",
            ["active", "inactive"],
            Some(EnumColumnProps {
                default: Some("inactive".into()),
                ..Default::default()
            }),
        )
        .text("description", None)
        .build();

    table.run(client.as_ref()).await.unwrap();
    client.close().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_table_with_uuid() {
    let (config, client) = setup().await;

    client.execute("DROP TABLE IF EXISTS items").await.unwrap();

    let table = Table::builder("items", config.dialect)
        .uuid(
            "id",
            Some(UuidColumnProps {
                primary_key: true,
                ..Default::default()
            }),
        )
        .varchar("name", 50, None)
        .int(
            "grade",
            Some(NumericColumnProps {
                default: Some(1.into()),
                ..Default::default()
            }),
        )
        .build();

    table.run(client.as_ref()).await.unwrap();
    client.close().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_tables_with_foreign_key_and_index() {
    let (config, client) = setup().await;

    client.execute("DROP TABLE IF EXISTS profiles").await.unwrap();
    client.execute("DROP TABLE IF EXISTS users").await.unwrap();

    let users = Table::builder("users", config.dialect)
        .uuid(
            "id",
            Some(UuidColumnProps {
                primary_key: true,
                ..Default::default()
            }),
        )
        .varchar("first_name", 50, None)
        .varchar("last_name", 50, None)
        .create_index(["first_name", "last_name"])
        .build();

    let profiles = Table::builder("profiles", config.dialect)
        .uuid(
            "id",
            Some(UuidColumnProps {
                primary_key: true,
                ..Default::default()
            }),
        )
        .uuid("user_id", None)
        .foreign_key("user_id", ForeignKeyOptions::references("users", "id"))
        .varchar("address", 100, None)
        .build();

    let migrator = Migrator::new(client);
    migrator.run_all(&[users, profiles]).await.unwrap();
    migrator.close().await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_statement_is_reported() {
    let (config, client) = setup().await;

    let table = Table::builder("broken", config.dialect)
        .increment("id")
        .foreign_key("id", ForeignKeyOptions::references("missing_table", "id"))
        .build();

    let result = table.run(client.as_ref()).await;
    assert!(result.is_err());

    client.execute("DROP TABLE IF EXISTS broken").await.unwrap();
    client.close().await;
}
