use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use talenttrack_backend::{
    config::{get_config, init_config},
    routes,
    store::{memory::InMemoryStore, TalentStore},
    AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store: Arc<dyn TalentStore> = Arc::new(InMemoryStore::new());
    if config.seed_demo_data {
        talenttrack_backend::store::seed::load_demo_data(store.as_ref())?;
    }

    let app_state = AppState::new(store);

    let careers_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/roles", get(routes::role_routes::list_roles))
        .route("/api/roles/:id", get(routes::role_routes::get_role))
        .route(
            "/api/resumes/parse",
            post(routes::application_routes::parse_resume),
        )
        .route(
            "/api/applications",
            post(routes::application_routes::submit_application),
        )
        .layer(axum::middleware::from_fn_with_state(
            talenttrack_backend::middleware::rate_limit::RateLimiter::per_second(
                config.careers_rps,
            ),
            talenttrack_backend::middleware::rate_limit::rps_middleware,
        ));

    let hiring_api = Router::new()
        .route("/api/roles", post(routes::role_routes::create_role))
        .route(
            "/api/roles/:id",
            axum::routing::patch(routes::role_routes::update_role),
        )
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/duplicates",
            post(routes::candidate_routes::find_duplicate_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .patch(routes::candidate_routes::update_candidate)
                .delete(routes::candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidates/:id/stage",
            post(routes::candidate_routes::set_candidate_stage),
        )
        .route(
            "/api/candidates/:id/notes",
            post(routes::candidate_routes::add_candidate_note),
        )
        .route(
            "/api/candidates/:id/history",
            get(routes::candidate_routes::get_candidate_history),
        )
        .route(
            "/api/interviews",
            get(routes::interview_routes::list_interviews)
                .post(routes::interview_routes::schedule_interview),
        )
        .route(
            "/api/interviews/:id",
            get(routes::interview_routes::get_interview)
                .patch(routes::interview_routes::update_interview),
        )
        .route(
            "/api/dashboard",
            get(routes::dashboard_routes::get_dashboard),
        )
        .route(
            "/api/activities",
            get(routes::dashboard_routes::list_activities),
        )
        .layer(axum::middleware::from_fn_with_state(
            talenttrack_backend::middleware::rate_limit::RateLimiter::per_second(
                config.hiring_rps,
            ),
            talenttrack_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = careers_api
        .merge(hiring_api)
        .with_state(app_state)
        .layer(talenttrack_backend::middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
