use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::id::RecordId;
use crate::domain::order::Order;
use crate::errors::AppError;
use crate::state::AppState;

use super::{payload, Envelope, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub data: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub data: Vec<Order>,
}

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders in insertion order", body = OrderListResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let data = state.orders.list()?;
    Ok(HttpResponse::Ok().json(OrderListResponse { data }))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let data = state.orders.read(RecordId::new(path.into_inner()))?;
    Ok(HttpResponse::Ok().json(OrderResponse { data }))
}

/// POST /orders
///
/// New orders always start out `pending`.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = Envelope,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Missing or invalid order fields", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: Option<web::Json<Envelope>>,
) -> Result<HttpResponse, AppError> {
    let data = state.orders.create(payload(body))?;
    Ok(HttpResponse::Created().json(OrderResponse { data }))
}

/// PUT /orders/{id}
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    request_body = Envelope,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Id mismatch, invalid status, delivered order or invalid fields", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<Envelope>>,
) -> Result<HttpResponse, AppError> {
    let data = state
        .orders
        .update(RecordId::new(path.into_inner()), payload(body))?;
    Ok(HttpResponse::Ok().json(OrderResponse { data }))
}

/// DELETE /orders/{id}
///
/// Only pending orders can be deleted.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.orders.delete(RecordId::new(path.into_inner()))?;
    Ok(HttpResponse::NoContent().finish())
}
