use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(config: Settings) -> Router<()> {
    let app = Router::new()
        .route("/health", get(routes::health))
        .nest("/teams", routes::teams::router())
        .nest("/projects", routes::projects::router())
        .nest("/api/linear", routes::relay::router());

    let app_state = AppState::new(config.linear.api_url);

    // The relay is meant to be reachable from any local dev origin, so the
    // CORS layer reflects the request's origin instead of pinning a list.
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::mirror_request());

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
