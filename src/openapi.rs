use utoipa::OpenApi;

use crate::handlers::{health, orders};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::ping,
        orders::create_order,
        orders::fetch_order,
        orders::update_order,
    ),
    components(schemas(
        orders::OrderRequest,
        orders::ProductRequest,
        orders::ResourceResponse,
        orders::FetchOrderResponse,
        orders::OrderLineResponse,
        orders::ErrorResponse,
    )),
    tags(
        (name = "orders", description = "Order lifecycle endpoints"),
        (name = "health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;
