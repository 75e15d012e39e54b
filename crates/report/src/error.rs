use database::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to fetch the report data: {0}")]
    Database(#[from] DbError),
}
