use crate::catalog::ParamValue;
use crate::db::cursor::{PgRowCursor, RowCursor, TextRowCursor};
use crate::db::script;
use crate::error::{ConnectionError, QueryError, StorageError};
use crate::storage::config::Profile;
use std::path::Path;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Config as PgConfig, NoTls};

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// The session's single database connection.
///
/// The connection is opened once at startup and closed exactly once through
/// [`DbClient::close`]; dropping the client on any other exit path also
/// terminates the driver task, so the connection is never leaked.
pub struct DbClient {
    client: tokio_postgres::Client,
    driver: tokio::task::JoinHandle<()>,
}

impl DbClient {
    pub async fn connect(profile: &Profile, password: &str) -> Result<Self, ConnectionError> {
        let mut config = PgConfig::new();
        config
            .host(&profile.host)
            .port(profile.port)
            .dbname(&profile.database)
            .user(&profile.user)
            .password(password)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let (client, connection) = config
            .connect(NoTls)
            .await
            .map_err(ConnectionError::Connect)?;

        // Drive the connection in the background and surface late errors;
        // the task ends when the client is dropped.
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("database connection error: {}", e);
            }
        });

        Ok(Self { client, driver })
    }

    /// Prepare a statement, bind the collected parameter values positionally
    /// and stream the result. Column metadata comes from the prepared
    /// statement, so it is known before the first row arrives.
    pub async fn execute_report(
        &self,
        sql: &str,
        params: &[ParamValue],
    ) -> Result<Box<dyn RowCursor>, QueryError> {
        let statement = self.client.prepare(sql).await?;
        let columns = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let bound: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|value| match value {
                ParamValue::Text(text) => text as &(dyn ToSql + Sync),
                ParamValue::Int(int) => int as &(dyn ToSql + Sync),
            })
            .collect();

        let stream = self.client.query_raw(&statement, bound).await?;
        Ok(Box::new(PgRowCursor::new(columns, stream)))
    }

    /// Execute a parameterless or allow-list-built statement over the text
    /// protocol. Never called with operator-influenced text.
    pub async fn execute_direct(&self, sql: &str) -> Result<Box<dyn RowCursor>, QueryError> {
        let messages = self.client.simple_query(sql).await?;
        Ok(Box::new(TextRowCursor::new(messages)))
    }

    /// Replay a rebuild script, batching statements to bound round trips.
    /// Returns the number of statements executed.
    pub async fn run_script(&self, path: &Path) -> crate::Result<usize> {
        let text = std::fs::read_to_string(path).map_err(|source| StorageError::FileIo {
            path: path.display().to_string(),
            source,
        })?;

        let statements = script::split_statements(&text);
        for chunk in statements.chunks(script::STATEMENTS_PER_BATCH) {
            let batch = format!("{};", chunk.join(";\n"));
            self.client
                .batch_execute(&batch)
                .await
                .map_err(QueryError::Driver)?;
        }

        Ok(statements.len())
    }

    /// Release the connection. Dropping the client ends the driver task;
    /// awaiting it makes the release observable before process exit.
    pub async fn close(self) {
        drop(self.client);
        let _ = self.driver.await;
    }
}
