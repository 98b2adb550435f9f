use super::{handler, middleware::json_error_bodies, X_REQUEST_ID};
use crate::state::Zustand;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    middleware,
    response::{IntoResponse, Response},
    routing::{self, get_service},
    Router,
};
use color_eyre::eyre;
use folio_config::server;
use folio_email::MailTransport;
use http::{Request, StatusCode};
use std::{any::Any, path::Path, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    folio_error::folio_error!(format!("handler panicked: {details}")).into_response()
}

pub fn create<T>(state: Zustand<T>, server_config: &server::Configuration) -> eyre::Result<Router>
where
    T: MailTransport,
{
    if !server_config.contact_path.starts_with('/') {
        eyre::bail!(
            "contact path \"{}\" has to start with a slash",
            server_config.contact_path
        );
    }

    let router = Router::new().route(
        &server_config.contact_path,
        routing::post(handler::contact::post::<T>)
            .fallback(handler::contact::method_not_allowed)
            .layer(DefaultBodyLimit::max(server_config.max_body_size)),
    );

    let router = match server_config.frontend_dir {
        Some(ref frontend_dir) => {
            let index = Path::new(frontend_dir.as_str()).join("index.html");
            router.fallback_service(get_service(
                ServeDir::new(frontend_dir.as_str()).fallback(ServeFile::new(index)),
            ))
        }
        None => router,
    };

    let router = router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server_config.request_timeout_secs),
        ))
        .layer(middleware::from_fn(json_error_bodies))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(&X_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();

                info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            MakeRequestUuid,
        ))
        .with_state(state);

    Ok(router)
}
