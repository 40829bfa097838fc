//! Storage query logging contract.
//!
//! The storage access layer reports one [`QueryEvent`] per statement it
//! executes. The contract carries no storage-engine types, so observers can
//! be written and tested without a database.

use crate::Logger;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info};

/// A single executed statement.
#[derive(Debug, Clone, Copy)]
pub struct QueryEvent<'a> {
    /// Statement text as sent to the engine.
    pub statement: &'a str,
    /// Rows returned or affected.
    pub rows: u64,
    /// Wall-clock time spent executing.
    pub duration: Duration,
    /// Error reported by the engine, if the statement failed.
    pub error: Option<&'a (dyn Error + Send + Sync)>,
}

impl QueryEvent<'_> {
    /// Returns true if the statement failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Receives an event after every storage query.
pub trait QueryObserver: Send + Sync {
    /// Called once per executed statement.
    fn on_query(&self, event: &QueryEvent<'_>);
}

/// Observer that writes query events as structured log lines.
#[derive(Debug, Clone, Default)]
pub struct TracingQueryObserver {
    logger: Logger,
}

impl TracingQueryObserver {
    /// Creates a new observer logging through the given handle.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl QueryObserver for TracingQueryObserver {
    fn on_query(&self, event: &QueryEvent<'_>) {
        let sql = compact_statement(event.statement);
        let duration_ms = event.duration.as_secs_f64() * 1000.0;

        match event.error {
            Some(err) => error!(
                target: "sql",
                parent: self.logger.span(),
                sql = %sql,
                rows = event.rows,
                duration_ms,
                error = %err,
                "query failed"
            ),
            None => info!(
                target: "sql",
                parent: self.logger.span(),
                sql = %sql,
                rows = event.rows,
                duration_ms,
                "query"
            ),
        }
    }
}

/// Collapses the whitespace of a multi-line statement onto one line.
fn compact_statement(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}
