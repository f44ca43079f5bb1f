//! Blood Bank API Server
//!
//! Backend for a blood donation and inventory platform: hospitals, blood
//! types, a per-hospital unit ledger, donation appointments, blood requests,
//! and user registration with roles.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod response;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAppointmentRepository, PostgresBloodTypeRepository, PostgresHospitalRepository,
    PostgresInventoryRepository, PostgresRequestRepository, PostgresUserDirectory,
};
use app::{AppointmentService, InventoryService, RequestService, UserService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub inventory_service: Arc<
        InventoryService<
            PostgresInventoryRepository,
            PostgresHospitalRepository,
            PostgresBloodTypeRepository,
        >,
    >,
    pub appointment_service: Arc<
        AppointmentService<
            PostgresAppointmentRepository,
            PostgresHospitalRepository,
            PostgresUserDirectory,
        >,
    >,
    pub request_service: Arc<
        RequestService<
            PostgresRequestRepository,
            PostgresHospitalRepository,
            PostgresBloodTypeRepository,
        >,
    >,
    pub user_service: Arc<UserService<PostgresUserDirectory>>,
    pub hospital_repo: Arc<PostgresHospitalRepository>,
    pub blood_type_repo: Arc<PostgresBloodTypeRepository>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bloodbank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Blood Bank API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let hospital_repo = Arc::new(PostgresHospitalRepository::new(db.clone()));
    let blood_type_repo = Arc::new(PostgresBloodTypeRepository::new(db.clone()));
    let inventory_repo = Arc::new(PostgresInventoryRepository::new(db.clone()));
    let appointment_repo = Arc::new(PostgresAppointmentRepository::new(db.clone()));
    let request_repo = Arc::new(PostgresRequestRepository::new(db.clone()));
    let user_directory = Arc::new(PostgresUserDirectory::new(db.clone()));

    // Create application services
    let inventory_service = Arc::new(InventoryService::new(
        inventory_repo.clone(),
        hospital_repo.clone(),
        blood_type_repo.clone(),
    ));

    let appointment_service = Arc::new(AppointmentService::new(
        appointment_repo.clone(),
        hospital_repo.clone(),
        user_directory.clone(),
    ));

    let request_service = Arc::new(RequestService::new(
        request_repo.clone(),
        hospital_repo.clone(),
        blood_type_repo.clone(),
    ));

    let user_service = Arc::new(UserService::new(user_directory.clone()));

    // Create app state
    let state = AppState {
        inventory_service,
        appointment_service,
        request_service,
        user_service,
        hospital_repo,
        blood_type_repo,
    };

    // Throttle registration per client: 2 req/sec, burst of 5. Keyed by the
    // socket peer address since nothing sits in front of this server.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Registration is rate limited; the list endpoint on the same path is not
    let users_routes = get(handlers::list_users).merge(post(handlers::register).layer(
        GovernorLayer {
            config: governor_config,
        },
    ));

    // Appointments require a session
    let appointment_routes = Router::new()
        .route(
            "/api/appointment",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/api/appointment/:id",
            get(handlers::get_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .route(
            "/api/appointment/:id/status",
            put(handlers::set_appointment_status),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Hospitals
        .route(
            "/api/hospitals",
            get(handlers::list_hospitals).post(handlers::create_hospital),
        )
        .route(
            "/api/hospitals/:id",
            get(handlers::get_hospital)
                .put(handlers::update_hospital)
                .delete(handlers::delete_hospital),
        )
        // Blood types
        .route(
            "/api/bloodtypes",
            get(handlers::list_blood_types).post(handlers::create_blood_type),
        )
        .route(
            "/api/bloodtypes/:id",
            get(handlers::get_blood_type)
                .put(handlers::update_blood_type)
                .delete(handlers::delete_blood_type),
        )
        // Blood inventory ledger
        .route(
            "/api/bloodinventorys",
            get(handlers::list_inventories).post(handlers::create_inventory),
        )
        .route(
            "/api/bloodinventorys/:id",
            get(handlers::get_inventory)
                .put(handlers::update_inventory)
                .delete(handlers::delete_inventory),
        )
        .route(
            "/api/bloodinventorys/:id/addunits",
            post(handlers::add_inventory_units),
        )
        .route(
            "/api/bloodinventorys/:id/removeunits",
            post(handlers::remove_inventory_units),
        )
        // Blood requests
        .route(
            "/api/requests",
            get(handlers::list_requests).post(handlers::create_request),
        )
        .route(
            "/api/requests/:id",
            get(handlers::get_request)
                .put(handlers::update_request)
                .delete(handlers::delete_request),
        )
        // Users
        .route("/api/users", users_routes)
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Merge session-protected routes
        .merge(appointment_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
