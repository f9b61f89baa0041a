use {
    super::envelope::Envelope,
    crate::domain::error::PayoutError,
    axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
};

pub struct ApiError(pub PayoutError);

impl From<PayoutError> for ApiError {
    fn from(err: PayoutError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            PayoutError::MissingField { .. }
            | PayoutError::InvalidAmount(_)
            | PayoutError::InsufficientBalance(_)
            | PayoutError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            PayoutError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self.0 {
            PayoutError::MissingField { field, .. } => {
                tracing::info!(field, "rejected: missing field");
            }
            PayoutError::Upstream(msg) => tracing::error!("upstream error: {msg}"),
            other => tracing::info!("rejected: {other}"),
        }

        (status, Json(Envelope::failure(self.0.to_string()))).into_response()
    }
}
