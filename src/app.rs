use crate::api_docs::ApiDoc;
use crate::config::APP_CONFIG;
use crate::middleware::http_logger::http_logger;
use crate::routes;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use http::header;
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowOrigin, Any, CorsLayer},
    propagate_header::PropagateHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub async fn create_app() -> anyhow::Result<Router> {
    let mut router = Router::new()
        .merge(routes::health::create_route())
        .merge(routes::auth::create_route())
        .merge(routes::admissions::create_route())
        .merge(routes::notifications::create_route())
        .merge(routes::admin::create_route())
        .merge(routes::students::create_route())
        .merge(routes::teachers::create_route())
        .merge(routes::files::create_route());

    // Add Swagger UI
    if APP_CONFIG.swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    // Admission submissions carry scanned documents; the default 2 MB body
    // limit is far too small for them.
    let router = router.layer(DefaultBodyLimit::max(25 * 1024 * 1024));

    let sensitive_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();

    // Axum middleware (middleware::from_fn) must be applied separately from
    // ServiceBuilder, which only accepts Tower layers.
    let router = router.layer(middleware::from_fn(http_logger));

    let allowed_headers = [
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
        header::ACCEPT_LANGUAGE,
    ];

    let allowed_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];

    let cors_layer = if APP_CONFIG.cors_allowed_origins == "*" {
        // Wildcard origins cannot be combined with credentials.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(false)
    } else {
        let allowed_origins: HashSet<String> = APP_CONFIG
            .cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
    };

    let middleware = ServiceBuilder::new()
        .layer(cors_layer)
        .layer(PropagateHeaderLayer::new(header::HeaderName::from_static(
            "x-request-id",
        )))
        .sensitive_request_headers(sensitive_headers.clone())
        .sensitive_response_headers(sensitive_headers)
        .compression();

    Ok(router.layer(middleware))
}
