use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::DynOrderService;
use crate::domain::order::{OrderLineView, ProductRef};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductRequest {
    pub product_id: i64,
    /// 13-digit EAN product code, e.g. "4006381333931"
    #[serde(default)]
    pub product_ean: String,
}

/// Body of both create and update. Missing fields deserialize as empty so they
/// are reported by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct OrderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub products: Vec<ProductRequest>,
}

impl OrderRequest {
    fn into_parts(self) -> (String, Vec<ProductRef>) {
        let products = self
            .products
            .into_iter()
            .map(|p| ProductRef {
                product_id: p.product_id,
                product_ean: p.product_ean,
            })
            .collect();
        (self.customer_name, products)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourceResponse {
    pub status: u16,
    pub message: String,
    #[serde(rename = "resourceId")]
    pub resource_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    pub order_id: i64,
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
}

impl From<OrderLineView> for OrderLineResponse {
    fn from(v: OrderLineView) -> Self {
        Self {
            order_id: v.order_id,
            product_id: v.product_id,
            product_ean: v.product_ean,
            customer_name: v.customer_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FetchOrderResponse {
    pub status: u16,
    pub message: String,
    pub order: Vec<OrderLineResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /v1/order/
///
/// Creates an order and one line item per product. Nothing is stored when any
/// product fails validation.
#[utoipa::path(
    post,
    path = "/v1/order/",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = ResourceResponse),
        (status = 400, description = "Invalid order input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<DynOrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let (customer_name, products) = body.into_inner().into_parts();

    let order_id = web::block(move || service.create_order(&customer_name, products))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ResourceResponse {
        status: StatusCode::CREATED.as_u16(),
        message: "Order Created Successfully!".to_string(),
        resource_id: order_id,
    }))
}

/// GET /v1/order/{id}
///
/// Returns the line items of the order, ordered by line-item id.
#[utoipa::path(
    get,
    path = "/v1/order/{id}",
    params(
        ("id" = String, Path, description = "Numeric order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = FetchOrderResponse),
        (status = 400, description = "Order id is not a number", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn fetch_order(
    service: web::Data<DynOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let items = web::block(move || service.fetch_order(&id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(FetchOrderResponse {
        status: StatusCode::OK.as_u16(),
        message: "Order Details Fetched Successfully!".to_string(),
        order: items.into_iter().map(OrderLineResponse::from).collect(),
    }))
}

/// PUT /v1/order/{id}
///
/// Rewrites the customer name and the existing line items in place. The
/// product list must be as long as the order's line-item list; products are
/// applied to line items by position.
#[utoipa::path(
    put,
    path = "/v1/order/{id}",
    params(
        ("id" = String, Path, description = "Numeric order id"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated successfully", body = ResourceResponse),
        (status = 400, description = "Invalid id or input, or product count mismatch", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<DynOrderService>,
    path: web::Path<String>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (customer_name, products) = body.into_inner().into_parts();

    let order_id = web::block(move || service.update_order(&id, &customer_name, products))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ResourceResponse {
        status: StatusCode::OK.as_u16(),
        message: "Order Updated Successfully!".to_string(),
        resource_id: order_id,
    }))
}
