use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};

use std::sync::Arc;

use crate::{ServerError, TokenKeys, analytics, expenses, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub tokens: Arc<TokenKeys>,
}

/// Resolve the caller from the `Authorization: Bearer` header.
///
/// The verified [`crate::AuthUser`] is stored in the request extensions for
/// the handlers. Nothing reaches the database without it.
async fn auth(
    State(state): State<ServerState>,
    auth_header: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Ok(TypedHeader(auth_header)) = auth_header else {
        return Err(ServerError::Unauthorized);
    };

    let user = state.tokens.verify(auth_header.token())?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    let protected = Router::new()
        .route(
            "/expenses/",
            get(expenses::list_for_date).post(expenses::replace_for_date),
        )
        .route("/all_expenses/", get(expenses::list_all))
        .route("/analytics/", post(analytics::category_breakdown))
        .route("/analytics_by_month/", get(analytics::monthly_totals))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route("/", get(user::welcome))
        .route("/create_user/", post(user::create_user))
        .route("/login/", post(user::login))
        .merge(protected)
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    tokens: TokenKeys,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        tokens: Arc::new(tokens),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    tokens: TokenKeys,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, tokens, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
