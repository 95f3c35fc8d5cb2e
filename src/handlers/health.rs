use actix_web::HttpResponse;

/// HEAD /v1/order/
///
/// Liveness probe; answers 200 while the service is up.
#[utoipa::path(
    head,
    path = "/v1/order/",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().finish()
}
