use axum::{
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use hr_records_api::{config, database, handlers, middleware, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting HR records API in {:?} mode", config.environment);

    let pool = match database::pool::create_pool() {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("cannot build database pool: {}", e);
            std::process::exit(1);
        }
    };

    // The pool is lazy; a missing database shows up here and in /health
    // rather than preventing startup.
    if let Err(e) = database::pool::run_migrations(&pool).await {
        tracing::warn!("migrations not applied: {}", e);
    }

    let app = app(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("HR records API listening on http://{}", bind_addr);
    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Public auth route
        .route("/login", post(handlers::users::login))
        // Protected groups
        .merge(user_routes())
        .merge(employee_routes())
        // Public groups
        .merge(salary_routes())
        .merge(title_routes())
        // Global middleware
        .layer(axum_middleware::from_fn(middleware::request_log))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/users/findall", get(users::show_all))
        .route("/users/add", post(users::store))
        .route("/users/find/:id", get(users::show_id))
        .route("/users/update/:id", put(users::update))
        .route("/users/remove/:id", delete(users::remove))
        .layer(axum_middleware::from_fn(middleware::jwt_check))
}

fn employee_routes() -> Router<AppState> {
    use handlers::employees;

    Router::new()
        .route("/employee/add", post(employees::store))
        .route("/employee/findall", get(employees::show_all))
        .route("/employee/find", get(employees::show_id))
        .route("/employee/update", put(employees::update))
        .route("/employee/remove", delete(employees::remove))
        .route("/employee/salary", get(employees::emp_salary))
        .layer(axum_middleware::from_fn(middleware::jwt_check))
}

fn salary_routes() -> Router<AppState> {
    use handlers::salaries;

    Router::new()
        .route("/salary/find", get(salaries::find))
        .route("/salary/update", put(salaries::update))
}

fn title_routes() -> Router<AppState> {
    use handlers::titles;

    Router::new()
        .route("/title/find", get(titles::show))
        .route("/title/update", put(titles::update))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match database::pool::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "data": { "database": "ok" },
                "message": "healthy",
                "status": true
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "data": e.to_string(),
                "message": "database unavailable",
                "status": false
            })),
        ),
    }
}
