use actix_web::http::header::ACCESS_CONTROL_ALLOW_HEADERS;
use actix_web::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use actix_web::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use actix_web::http::header::ACCESS_CONTROL_MAX_AGE;
use actix_web::middleware::DefaultHeaders;
use actix_web::HttpResponse;

/// Wraps the whole app, so that every response (including 400/405/500) can be
/// read by a form hosted on any origin
pub fn allow_any_origin() -> DefaultHeaders {
    DefaultHeaders::new().add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

/// `OPTIONS` on the relay endpoints (CORS preflight). Never touches the relay.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        // one day
        .insert_header((ACCESS_CONTROL_MAX_AGE, "86400"))
        .finish()
}

/// Any other method on the relay endpoints
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().body("Method not allowed")
}
