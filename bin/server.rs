// Safari Stays - Web Server
// JSON API over the in-memory catalog and site content

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use safari_stays::{
    AuthForm, AuthMode, AuthRequest, BookingForm, BookingRequest, FacetSelection, FilterEngine,
    HotelCatalog, HotelRecord, NotFoundPage, PaginationWindow, SearchQuery, SiteContent,
    ValidationError, INITIAL_VISIBLE_COUNT, PROCESSING_DELAY, SIGN_IN_DELAY, VERSION,
};

/// Shared application state: the catalog and content never change after boot
#[derive(Clone)]
struct AppState {
    catalog: Arc<HotelCatalog>,
    content: Arc<SiteContent>,
    engine: Arc<FilterEngine>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn fail(data: T, error: &str) -> Self {
        Self {
            success: false,
            data,
            error: Some(error.to_string()),
        }
    }
}

// ============================================================================
// Response shapes
// ============================================================================

/// Listing page payload: filtered, then windowed
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HotelsResponse {
    listed: usize,
    matching: usize,
    visible: usize,
    has_more: bool,
    hotels: Vec<HotelRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    query: SearchQuery,
    count: usize,
    results: Vec<HotelRecord>,
}

#[derive(Serialize)]
struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    routes: Vec<&'static str>,
}

// ============================================================================
// Request shapes
// ============================================================================

/// Search form params as they appear in the query string
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    location: String,
    #[serde(rename = "checkIn", default)]
    check_in: String,
    #[serde(rename = "checkOut", default)]
    check_out: String,
    #[serde(default = "default_guests")]
    guests: u32,
}

fn default_guests() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingPayload {
    hotel_id: u32,
    check_in: String,
    check_out: String,
    guests: u32,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET / - Service banner
async fn service_info() -> impl IntoResponse {
    Json(ApiResponse::ok(ServiceInfo {
        service: "safari-stays",
        version: VERSION,
        routes: vec![
            "/api/health",
            "/api/home",
            "/api/hotels",
            "/api/hotels/:id",
            "/api/search",
            "/api/bookings",
            "/api/auth/login",
            "/api/auth/register",
        ],
    }))
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/home - Hero slides, featured hotels, offers, testimonials
async fn home_content(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.content.as_ref().clone()))
}

/// GET /api/hotels - Filtered, windowed listing
///
/// Facet params take comma-separated multi-values: `beds=1,3`,
/// `price=price-0-10000,price-20000-plus`, `location=Nyali,Gigiri`.
/// `visible` sets the pagination cursor (default 4).
async fn list_hotels(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut selection = FacetSelection::new();

    if let Some(beds) = params.get("beds") {
        for value in beds.split(',').filter(|v| !v.is_empty()) {
            match value.parse::<u32>() {
                Ok(count) => {
                    selection.beds.insert(count);
                }
                Err(_) => warn!("Ignoring non-numeric beds value: {}", value),
            }
        }
    }

    if let Some(ranges) = params.get("price") {
        for value in ranges.split(',').filter(|v| !v.is_empty()) {
            selection.price_ranges.insert(value.to_string());
        }
    }

    if let Some(locations) = params.get("location") {
        for value in locations.split(',').filter(|v| !v.is_empty()) {
            selection.locations.insert(value.to_string());
        }
    }

    let visible = params
        .get("visible")
        .and_then(|v| v.parse().ok())
        .unwrap_or(INITIAL_VISIBLE_COUNT);
    let window = PaginationWindow::with_visible(visible);

    let filtered = state.engine.apply(state.catalog.records(), &selection);
    let shown = window.window(&filtered);

    let response = HotelsResponse {
        listed: state.catalog.len(),
        matching: filtered.len(),
        visible: shown.len(),
        has_more: window.has_more(filtered.len()),
        hotels: shown.iter().map(|hotel| (*hotel).clone()).collect(),
    };

    Json(ApiResponse::ok(response))
}

/// GET /api/hotels/:id - Detail, or the not-found fallback
async fn hotel_detail(State(state): State<AppState>, Path(id): Path<u32>) -> impl IntoResponse {
    match state.catalog.get(id) {
        Some(hotel) => (StatusCode::OK, Json(ApiResponse::ok(hotel.clone()))).into_response(),
        None => {
            info!("Unknown hotel requested: {}", id);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::fail(NotFoundPage::hotel(), "Hotel not found")),
            )
                .into_response()
        }
    }
}

/// GET /api/search - Consume the search form's query string
async fn search_stays(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = SearchQuery {
        location: params.location,
        check_in: params.check_in,
        check_out: params.check_out,
        guests: params.guests,
    };

    let results: Vec<HotelRecord> = query
        .run(state.catalog.records())
        .into_iter()
        .cloned()
        .collect();

    let response = SearchResponse {
        count: results.len(),
        results,
        query,
    };

    Json(ApiResponse::ok(response))
}

/// POST /api/bookings - Validate, simulate processing, confirm
async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> impl IntoResponse {
    let Some(hotel) = state.catalog.get(payload.hotel_id) else {
        info!("Booking requested for unknown hotel: {}", payload.hotel_id);
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::fail(
                serde_json::json!(NotFoundPage::hotel()),
                "Hotel not found",
            )),
        )
            .into_response();
    };

    let request = BookingRequest {
        check_in: payload.check_in,
        check_out: payload.check_out,
        guests: payload.guests,
    };

    let mut form = BookingForm::new(hotel.id);
    if let Err(errors) = form.submit(request) {
        return validation_failure(errors);
    }

    // Simulated processing stands in for a real booking backend
    tokio::time::sleep(PROCESSING_DELAY).await;

    match form.complete(hotel) {
        Some(confirmation) => {
            info!(
                "Booking confirmed at {} ({})",
                confirmation.hotel_name, confirmation.reference
            );
            (
                StatusCode::CREATED,
                Json(ApiResponse::ok(serde_json::json!(confirmation))),
            )
                .into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::fail(
                serde_json::Value::Null,
                "Booking was not in flight",
            )),
        )
            .into_response(),
    }
}

/// POST /api/auth/login - Cosmetic sign-in
async fn login(Json(request): Json<AuthRequest>) -> impl IntoResponse {
    run_auth(AuthMode::Login, request).await
}

/// POST /api/auth/register - Cosmetic registration
async fn register(Json(request): Json<AuthRequest>) -> impl IntoResponse {
    run_auth(AuthMode::Register, request).await
}

async fn run_auth(mode: AuthMode, request: AuthRequest) -> axum::response::Response {
    let mut form = AuthForm::with_mode(mode);

    if let Err(errors) = form.submit(request) {
        return validation_failure(errors);
    }

    // Simulated delay stands in for an authentication backend
    tokio::time::sleep(SIGN_IN_DELAY).await;

    match form.complete() {
        Some(outcome) => {
            info!("Auth success for {}", outcome.email);
            (StatusCode::OK, Json(ApiResponse::ok(serde_json::json!(outcome)))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::fail(
                serde_json::Value::Null,
                "Request was not in flight",
            )),
        )
            .into_response(),
    }
}

fn validation_failure(errors: Vec<ValidationError>) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::fail(
            serde_json::json!(errors),
            "Validation failed",
        )),
    )
        .into_response()
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "stays_server=info,tower_http=info".to_string()),
        )
        .init();

    let catalog = HotelCatalog::with_defaults();
    if let Err(e) = catalog.verify() {
        eprintln!("Catalog failed verification: {}", e);
        std::process::exit(1);
    }
    info!("Catalog loaded: {} hotels", catalog.len());

    let state = AppState {
        catalog: Arc::new(catalog),
        content: Arc::new(SiteContent::with_defaults()),
        engine: Arc::new(FilterEngine::new()),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/home", get(home_content))
        .route("/hotels", get(list_hotels))
        .route("/hotels/:id", get(hotel_detail))
        .route("/search", get(search_stays))
        .route("/bookings", post(create_booking))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .with_state(state);

    // Build main router
    let app = Router::new()
        .route("/", get(service_info))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Safari Stays API running on http://localhost:{}", port);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
