use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String
}

/// Everything that can go wrong in the dashboard server
///
/// `MalformedRequest` is the only client-facing class; the rest are raised
/// while starting up and end the process.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error
    },
    #[error(transparent)]
    Io(#[from] std::io::Error)
}

impl DashboardError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DashboardError::MalformedRequest(_))
    }
}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_fatal() {
            log::error!("{}", self);
        } else {
            log::warn!("Rejected request: {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_request_is_client_error() {
        let err = DashboardError::MalformedRequest("limit too large".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "malformed request: limit too large");
    }

    #[test]
    fn startup_errors_are_fatal() {
        let bind = DashboardError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use")
        };
        assert!(bind.is_fatal());
        assert_eq!(bind.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(DashboardError::Config("bad".to_string()).is_fatal());
    }

    #[actix_web::test]
    async fn error_body_is_json() {
        let resp = DashboardError::Config("shot pool must not be empty".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "invalid configuration: shot pool must not be empty");

        let resp = DashboardError::MalformedRequest("bad limit".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
