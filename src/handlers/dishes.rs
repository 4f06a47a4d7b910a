use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::dish::Dish;
use crate::domain::id::RecordId;
use crate::errors::AppError;
use crate::state::AppState;

use super::{payload, Envelope, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct DishResponse {
    pub data: Dish,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishListResponse {
    pub data: Vec<Dish>,
}

/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes in insertion order", body = DishListResponse),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let data = state.dishes.list()?;
    Ok(HttpResponse::Ok().json(DishListResponse { data }))
}

/// GET /dishes/{id}
#[utoipa::path(
    get,
    path = "/dishes/{id}",
    params(("id" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "Dish found", body = DishResponse),
        (status = 404, description = "Dish not found", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let data = state.dishes.read(RecordId::new(path.into_inner()))?;
    Ok(HttpResponse::Ok().json(DishResponse { data }))
}

/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = Envelope,
    responses(
        (status = 201, description = "Dish created", body = DishResponse),
        (status = 400, description = "Missing or invalid dish fields", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    state: web::Data<AppState>,
    body: Option<web::Json<Envelope>>,
) -> Result<HttpResponse, AppError> {
    let data = state.dishes.create(payload(body))?;
    Ok(HttpResponse::Created().json(DishResponse { data }))
}

/// PUT /dishes/{id}
///
/// Replaces every editable field of the dish. A body `id`, when present, must
/// match the route.
#[utoipa::path(
    put,
    path = "/dishes/{id}",
    params(("id" = String, Path, description = "Dish id")),
    request_body = Envelope,
    responses(
        (status = 200, description = "Dish updated", body = DishResponse),
        (status = 400, description = "Invalid fields or id mismatch", body = ErrorBody),
        (status = 404, description = "Dish not found", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<Envelope>>,
) -> Result<HttpResponse, AppError> {
    let data = state
        .dishes
        .update(RecordId::new(path.into_inner()), payload(body))?;
    Ok(HttpResponse::Ok().json(DishResponse { data }))
}
