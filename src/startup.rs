use std::path::Path;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Error;

/// Owns the single warehouse connection of a run.
pub struct ConnectionManager {
    db: DatabaseConnection,
}

impl ConnectionManager {
    /// Connect to the database and run migrations
    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        use migration::{Migrator, MigratorTrait};

        let mut opt = ConnectOptions::new(database_url);
        opt.sqlx_logging(false);

        let db = Database::connect(opt).await.map_err(|e| {
            tracing::error!("Failed to connect to the warehouse: {}", e);
            e
        })?;

        Migrator::up(&db, None).await?;

        tracing::info!("Connected to the warehouse");

        Ok(Self { db })
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Closes the connection; a failure to close is logged, not returned.
    pub async fn close(self) {
        match self.db.close().await {
            Ok(()) => tracing::info!("Connection closed"),
            Err(e) => tracing::warn!("Failed to close the warehouse connection: {}", e),
        }
    }
}

/// Install the console and file log sinks
///
/// Keep the returned guard alive until exit; dropping it flushes the file log.
pub fn init_logging(log_file: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .ok_or_else(|| format!("Log file path {:?} has no file name", log_file))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(directory)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()?;

    Ok(guard)
}
