pub mod dishes;
pub mod orders;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::AppError;

// ── Shared request / response DTOs ───────────────────────────────────────────

/// Request body wrapper. Every create and update call sends `{ "data": {...} }`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct Envelope {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// The `data` payload of an optional body. A missing or unparsable body reads
/// as `Null` so the guard chain, not the extractor, decides the error.
pub(crate) fn payload(body: Option<web::Json<Envelope>>) -> Value {
    body.map(|b| b.into_inner().data).unwrap_or(Value::Null)
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

pub async fn path_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("Path not found: {}", req.path())))
}
