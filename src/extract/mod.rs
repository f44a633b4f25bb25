//! CSV extract readers.
//!
//! Each extract is a header-first CSV file. Expected columns are checked
//! before any row is read, so a mis-exported file fails fast with
//! [`ExtractError::MissingColumn`]. Columns the loader doesn't use are
//! ignored and empty fields read as `None`.

pub mod customer;
pub mod order;
pub mod product;

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::extract::ExtractError;

pub use customer::CustomerRecord;
pub use order::OrderRecord;
pub use product::ProductRecord;

/// Records read from one extract file.
#[derive(Debug, Clone)]
pub struct Extract<T> {
    pub path: PathBuf,
    pub records: Vec<T>,
}

impl<T> Extract<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads every record of `path`, requiring `columns` in the header row.
pub fn read_extract<T>(path: &Path, columns: &[&str]) -> Result<Extract<T>, ExtractError>
where
    T: DeserializeOwned,
{
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let csv_error = |source| ExtractError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?;
    if let Some(missing) = columns
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(ExtractError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }

    let records = reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(csv_error)?;

    tracing::debug!("Read {} records from {}", records.len(), path.display());

    Ok(Extract {
        path: path.to_path_buf(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_customers_ignoring_extra_columns() {
        let file = write_csv(
            "CustomerID,FirstName,LastName,Email,Phone,City,Country,Segment\n\
             1, Ada ,Lovelace,,555-0100,London,,VIP\n",
        );

        let extract = customer::read_customers(file.path()).unwrap();

        assert_eq!(extract.len(), 1);
        let record = &extract.records[0];
        assert_eq!(record.customer_id.as_deref(), Some("1"));
        assert_eq!(record.first_name.as_deref(), Some("Ada"));
        assert_eq!(record.email, None);
        assert_eq!(record.country, None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = write_csv("ProductID,ProductName,Price,Stock\n1,Hammer,9.99,3\n");

        let result = product::read_products(file.path());

        assert!(matches!(
            result,
            Err(ExtractError::MissingColumn { ref column, .. }) if column == "Category"
        ));
    }

    #[test]
    fn short_rows_read_missing_fields_as_none() {
        let file = write_csv("OrderID,OrderDate,CustomerID\n1,2023-06-01,7\n2\n");

        let extract = order::read_orders(file.path()).unwrap();

        assert_eq!(extract.len(), 2);
        assert_eq!(extract.records[0].order_date.as_deref(), Some("2023-06-01"));
        assert_eq!(extract.records[1].order_date, None);
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv("OrderDate\n");

        let extract = order::read_orders(file.path()).unwrap();

        assert!(extract.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = order::read_orders(Path::new("does/not/exist.csv"));

        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }
}
