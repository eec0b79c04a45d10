use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_account::current_account;
use super::handlers::get_account::get_account;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_active as active_middleware;
use crate::domain::account::authenticator::RequestAuthenticator;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::service::AccountRegistry;

pub struct AppState<R>
where
    R: AccountRepository,
{
    pub account_service: Arc<AccountRegistry<R>>,
    pub authenticator: Arc<RequestAuthenticator<R>>,
}

// Manual impl so R itself does not need Clone; only the handles are shared
impl<R> Clone for AppState<R>
where
    R: AccountRepository,
{
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<R>(
    account_service: Arc<AccountRegistry<R>>,
    authenticator: Arc<RequestAuthenticator<R>>,
) -> Router
where
    R: AccountRepository,
{
    let state = AppState {
        account_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login::<R>))
        .route("/api/accounts", post(register::<R>));

    let authenticated_routes = Router::new()
        .route("/api/accounts/me", get(current_account))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    // The layer added last runs first: authenticate resolves the caller,
    // then the active check reads the stored identity
    let active_only_routes = Router::new()
        .route("/api/accounts/:account_id", get(get_account::<R>))
        .route_layer(middleware::from_fn(active_middleware))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(active_only_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
