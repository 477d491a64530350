use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use chowk_match::config::{CacheSettings, LoggingSettings, Settings};
use chowk_match::routes::{self, AppState};
use chowk_match::services::{CacheManager, MatchingService, PostgresClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

/// Build the cache; Redis is optional and the service falls back to L1 only
async fn init_cache(settings: &CacheSettings) -> Option<Arc<CacheManager>> {
    if !settings.enabled {
        info!("Caching disabled");
        return None;
    }

    let ttl = settings.ttl_secs.unwrap_or(300);
    let l1_size = settings.l1_cache_size.unwrap_or(1000);

    let cache = match &settings.redis_url {
        Some(url) => CacheManager::new(url, l1_size, ttl).await.unwrap_or_else(|e| {
            warn!("Failed to connect to Redis ({}), using in-process cache only", e);
            CacheManager::local_only(l1_size, ttl)
        }),
        None => CacheManager::local_only(l1_size, ttl),
    };

    info!(
        "Cache manager initialized (L1: {} entries, TTL: {}s, Redis: {})",
        l1_size,
        ttl,
        cache.has_redis()
    );

    Some(Arc::new(cache))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Chowk Match service...");

    let cache = init_cache(&settings.cache).await;

    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "PostgreSQL client initialized (max: {} connections)",
        settings.database.max_connections.unwrap_or(10)
    );

    let service = MatchingService::with_default_weights(Arc::new(postgres));

    let app_state = AppState {
        service,
        cache,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
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
