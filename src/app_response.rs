use std::fmt::{Display, Formatter};

use redb::{CommitError, DatabaseError, StorageError, TableError, TransactionError};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::signals_api::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppResponse {
    DatabaseError(String),
    SerializationError(String),
    NotFound(String),
    ValidationError(String),
    NetworkError(String),
    BadRequest(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl From<SerdeError> for AppResponse {
    fn from(err: SerdeError) -> Self {
        AppResponse::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<DatabaseError> for AppResponse {
    fn from(err: DatabaseError) -> Self {
        AppResponse::DatabaseError(format!("Could not open database: {}", err))
    }
}

impl From<TransactionError> for AppResponse {
    fn from(err: TransactionError) -> Self {
        AppResponse::DatabaseError(format!("Transaction error: {:?}", err))
    }
}

impl From<TableError> for AppResponse {
    fn from(err: TableError) -> Self {
        match err {
            TableError::TableDoesNotExist(name) =>
                AppResponse::NotFound(format!("Table '{}' not found", name)),
            _ => AppResponse::DatabaseError(format!("Table operation error: {:?}", err)),
        }
    }
}

impl From<StorageError> for AppResponse {
    fn from(err: StorageError) -> Self {
        AppResponse::DatabaseError(format!("Error de almacenamiento en la base de datos: {:?}", err))
    }
}

impl From<CommitError> for AppResponse {
    fn from(err: CommitError) -> Self {
        AppResponse::DatabaseError(format!("Error al confirmar la transacción: {:?}", err))
    }
}

impl From<ApiError> for AppResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => AppResponse::NetworkError(msg),
            ApiError::Server(msg) => AppResponse::BadRequest(msg),
        }
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }
}
