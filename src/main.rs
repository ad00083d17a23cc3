use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mum_match::config::Settings;
use mum_match::core::Matcher;
use mum_match::routes::{self, AppState, MatchLimits};
use mum_match::services::{CandidateDirectory, RelationshipStore, ScoreCache};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; LOG_LEVEL / LOG_FORMAT override the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Mum Match service...");

    let directory = match CandidateDirectory::load_or_empty(settings.directory.fixture_path.as_deref()) {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            error!("Failed to load candidate directory: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let cache_size = settings.cache.score_cache_size.unwrap_or(10_000);
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache = Arc::new(ScoreCache::new(cache_size, cache_ttl));

    info!("Score cache initialized ({} entries, TTL: {}s)", cache_size, cache_ttl);

    // Initialize matcher with configured weights and neighborhood graph
    let weights = settings.weights();
    let graph = settings.proximity.graph();
    info!("Matcher initialized with weights: {:?} ({} neighborhoods)", weights, graph.len());
    let matcher = Matcher::new(weights, graph);

    let defaults = MatchLimits::default();
    let limits = MatchLimits {
        default_limit: settings.matching.default_limit.unwrap_or(defaults.default_limit),
        max_limit: settings.matching.max_limit.unwrap_or(defaults.max_limit),
    };

    // Build application state
    let app_state = AppState {
        directory,
        relationships: Arc::new(RelationshipStore::new()),
        cache,
        matcher,
        limits,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_payload_errors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
