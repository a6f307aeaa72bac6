mod config;
mod rate_limit;
mod routes;
mod upstream;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::Config;
use rate_limit::RateLimiter;
use routes::{configure_routes, CLASSIFY_PATH};
use upstream::{Classifier, UpstreamClassifier};

const SWEEP_EVERY: Duration = Duration::from_secs(60);

fn other_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(e.to_string())
}

// The frontend's endpoint is baked in at build time; the gateway cannot redirect it.
fn frontend_notice(dir: &Path) -> String {
    format!(
        "Serving frontend from {}. It only posts through this gateway if it was built with \
         SPAMCHECK_ENDPOINT={}; otherwise it calls the hosted classifier directly",
        dir.display(),
        CLASSIFY_PATH
    )
}

async fn sweep_rate_limits(limiter: web::Data<RateLimiter>) {
    let mut interval = actix_web::rt::time::interval(SWEEP_EVERY);
    loop {
        interval.tick().await;
        let dropped = limiter.sweep(Instant::now());
        if dropped > 0 {
            log::debug!(
                "Forgot {} rate-limited clients, {} still tracked",
                dropped,
                limiter.tracked()
            );
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        other_error(e)
    })?;

    let classifier = UpstreamClassifier::new(config.upstream_url.clone(), config.upstream_timeout)
        .map_err(|e| {
            log::error!("Failed to build upstream client: {}", e);
            other_error(e)
        })?;
    let classifier: Arc<dyn Classifier> = Arc::new(classifier);
    let classifier = web::Data::from(classifier);

    let limiter = web::Data::new(RateLimiter::new(config.rate_limit));
    actix_web::rt::spawn(sweep_rate_limits(limiter.clone()));

    match &config.frontend_dir {
        Some(dir) => log::info!("{}", frontend_notice(dir)),
        None => log::warn!("No built frontend found; serving the API only"),
    }
    log::info!(
        "Forwarding to {} (one request per client every {:?})",
        config.upstream_url,
        limiter.window()
    );

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let frontend_dir = config.frontend_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(limiter.clone())
            .app_data(classifier.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_notice_names_the_build_setting() {
        let notice = frontend_notice(Path::new("/srv/frontend/dist"));

        assert!(notice.contains("/srv/frontend/dist"));
        assert!(notice.contains("SPAMCHECK_ENDPOINT=/api/classify"));
    }
}
