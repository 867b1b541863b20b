use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ecopoints::config::Config;
use ecopoints::handlers::{
    CreatePointRequest, ItemResponse, PointDetailResponse, PointResponse,
};
use ecopoints::state::AppState;
use ecopoints::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::item::list_items,
        handlers::point::create_point,
        handlers::point::list_points,
        handlers::point::get_point,
    ),
    components(schemas(
        ItemResponse,
        CreatePointRequest,
        PointResponse,
        PointDetailResponse,
    )),
    tags(
        (name = "Items", description = "Collectible-material catalog"),
        (name = "Points", description = "Collection point registration and retrieval")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (runs migrations, connects the pool)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
