use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::services::RegistrationError;

impl RegistrationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyRegistered | Self::NotRegistered => StatusCode::BAD_REQUEST,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Store errors are logged here and never echoed to the client.
        let detail = match &self {
            Self::StoreUnavailable(e) => {
                tracing::error!(error = %e, "activity store call failed");
                "Service unavailable".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(RegistrationError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RegistrationError::AlreadyRegistered.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistrationError::NotRegistered.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistrationError::InvalidInput("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn store_failure_is_unavailable_and_hides_details() {
        let err = RegistrationError::StoreUnavailable(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
