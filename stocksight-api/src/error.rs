//! HTTP mapping for inventory errors

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use stocksight_core::InventoryError;
use tracing::{error, warn};

/// Body returned for every 5xx so internals never leak to clients
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error type returned by every handler
#[derive(Debug)]
pub struct ApiError(pub InventoryError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            InventoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            InventoryError::Validation(_) | InventoryError::Json(_) => StatusCode::BAD_REQUEST,
            InventoryError::Configuration(_) | InventoryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(InventoryError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let category = self.0.category();

        let message = if status.is_server_error() {
            error!("Request failed ({}): {}", category, self.0);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            warn!("Request rejected ({}): {}", category, self.0);
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": category,
                "message": message
            })),
        )
            .into_response()
    }
}

/// JSON body extractor whose rejections use the `{error, message}` shape
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksight_core::EntityKind;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(InventoryError::not_found(EntityKind::Store, 7)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(InventoryError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(InventoryError::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = ApiError(InventoryError::internal("lock poisoned")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal");
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    }
}
