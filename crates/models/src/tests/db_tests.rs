use crate::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

/// Test connection with custom configuration
#[tokio::test]
async fn test_sqlite_memory_connection() -> Result<()> {
    let config = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&config).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    db.close().await?;
    Ok(())
}

/// Unreachable database surfaces an error instead of hanging forever
#[tokio::test]
async fn test_bad_url_fails() -> Result<()> {
    let config = DatabaseConfig {
        url: "sqlite:///nonexistent-dir-for-tests/recipes.db".into(),
        connect_timeout_secs: 1,
        acquire_timeout_secs: 1,
        ..Default::default()
    };
    assert!(connect_with_config(&config).await.is_err());
    Ok(())
}
