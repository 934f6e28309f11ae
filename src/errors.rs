use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("storage unavailable for '{key}': {source}")]
    StorageUnavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid goal: {0}")]
    InvalidGoal(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::StorageUnavailable { .. } => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: format!("Could not save, please try again ({err})"),
            },
            TrackerError::InvalidGoal(_) => Self::bad_request(err.to_string()),
            TrackerError::Encode { .. } => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_are_service_unavailable() {
        let err = TrackerError::StorageUnavailable {
            key: "panda-quit-entries".into(),
            source: std::io::Error::other("quota exceeded"),
        };
        let app: AppError = err.into();
        assert_eq!(app.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(app.message.contains("quota exceeded"));
    }

    #[test]
    fn invalid_goal_is_bad_request() {
        let app: AppError = TrackerError::InvalidGoal("description is empty".into()).into();
        assert_eq!(app.status, StatusCode::BAD_REQUEST);
    }
}
