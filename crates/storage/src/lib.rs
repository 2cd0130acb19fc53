use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::{fs, path::Path};

mod models;
mod repo;

/// 共享的数据库句柄：进程启动时建一次，克隆进各个 handler。
#[derive(Clone)]
pub struct Db {
    pub(crate) pool: Pool<Sqlite>,
}

impl Db {
    pub async fn new(db_url: &str) -> anyhow::Result<Self> {
        if let Some(path_str) = db_url.strip_prefix("sqlite://") {
            if !path_str.contains(":memory:") {
                if let Some(parent) = Path::new(path_str).parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
            }
        }

        if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            Sqlite::create_database(db_url).await?;
        }

        // :memory: 下每个连接都是一套独立的库，必须压到单连接
        let mut options = SqlitePoolOptions::new();
        if db_url.contains(":memory:") {
            options = options.max_connections(1);
        }
        let pool = options.connect(db_url).await?;

        sqlx::query("PRAGMA journal_mode = WAL;")
            .execute(&pool)
            .await?;
        sqlx::query("PRAGMA synchronous = NORMAL;")
            .execute(&pool)
            .await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;
        tracing::info!("Database ready at {}", db_url);

        Ok(Self { pool })
    }
}
