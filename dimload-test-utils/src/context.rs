//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database and a temporary directory with the three
//! extract files. The directory is removed when the context is dropped.

use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::{error::TestError, fixtures::extract::ExtractFile};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_dimension_tables()
///     .with_products(vec![factory::product_row(1, Some("Tools"))])
///     .build()
///     .await?;
///
/// let products = read_products(&test.extract_path(ExtractFile::Products))?;
/// CategoryLoader::new(&test.db).load(&products).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Directory holding the extract files
    pub(crate) dir: TempDir,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let dir = tempfile::tempdir()?;

        Ok(Self { db, dir })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Path of an extract file inside the test directory.
    pub fn extract_path(&self, file: ExtractFile) -> PathBuf {
        self.dir.path().join(file.file_name())
    }

    /// Directory holding the extract files.
    pub fn extract_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrites an extract file with `content` as-is.
    pub fn write_extract(&self, file: ExtractFile, content: &str) -> Result<(), TestError> {
        std::fs::write(self.extract_path(file), content)?;

        Ok(())
    }

    /// Overwrites an extract file with `rows` below its standard header.
    pub fn write_rows(&self, file: ExtractFile, rows: &[String]) -> Result<(), TestError> {
        self.write_extract(file, &file.render(rows))
    }
}
