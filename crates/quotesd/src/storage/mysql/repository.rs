//! MySQL repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};

use quotes_core::quote::{NewQuote, Quote};
use quotes_core::storage::{QuoteRepository, RepositoryError, Result};

use super::error::map_sqlx_error;
use super::schema;
use crate::config::Config;

/// Delay before the first retry of the initial connection.
const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Connection attempts before startup gives up.
const MAX_CONNECT_ATTEMPTS: u32 = 8;

/// MySQL-based repository implementation.
///
/// Provides async access to the quotes table through a connection pool.
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Connects to the server, ensures database and table exist, and
    /// returns a repository over a connection pool.
    ///
    /// The database server is often slower to accept connections than this
    /// process is to start, so the initial connection is retried with
    /// exponential backoff before giving up.
    pub async fn connect(config: &Config) -> Result<Self> {
        let server_options = MySqlConnectOptions::new()
            .host(&config.mysql_host)
            .username(&config.mysql_user)
            .password(&config.mysql_password);

        // The database may not exist yet, so the first connection selects none
        let mut conn = connect_with_backoff(&server_options).await?;

        sqlx::query(&format!(
            "CREATE DATABASE IF NOT EXISTS `{}`",
            config.mysql_db
        ))
        .execute(&mut conn)
        .await
        .map_err(map_sqlx_error)?;

        conn.close().await.map_err(map_sqlx_error)?;

        let pool = MySqlPoolOptions::new()
            .connect_with(server_options.database(&config.mysql_db))
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query(schema::CREATE_QUOTES_TABLE)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(database = %config.mysql_db, "Connected to MySQL, schema ready");

        Ok(Self { pool })
    }
}

/// Retries the initial server connection with exponential backoff.
async fn connect_with_backoff(options: &MySqlConnectOptions) -> Result<MySqlConnection> {
    let mut delay = INITIAL_RETRY_DELAY;

    for attempt in 1..MAX_CONNECT_ATTEMPTS {
        match options.connect().await {
            Ok(conn) => return Ok(conn),
            Err(err) => {
                tracing::warn!(
                    %err,
                    attempt,
                    retry_in_ms = delay.as_millis() as u64,
                    "Database not ready, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }
    }

    options
        .connect()
        .await
        .map_err(|err| RepositoryError::ConnectionFailed(err.to_string()))
}

#[async_trait]
impl QuoteRepository for MySqlRepository {
    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        let rows = sqlx::query_as::<_, (i64, String, Option<String>)>(schema::SELECT_QUOTES)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, quote, author)| Quote { id, quote, author })
            .collect())
    }

    async fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        let result = sqlx::query(schema::INSERT_QUOTE)
            .bind(&new_quote.quote)
            .bind(&new_quote.author)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(new_quote.with_id(result.last_insert_id() as i64))
    }
}
