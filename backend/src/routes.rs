use std::path::PathBuf;
use std::time::Instant;

use actix_files::Files;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use log::{error, warn};
use serde::Serialize;
use shared::{ClassificationRequest, ClassificationResponse, ClassifyError};

use crate::rate_limit::RateLimiter;
use crate::upstream::Classifier;

pub const CLASSIFY_PATH: &str = "/api/classify";
const DEFAULT_IP: &str = "0.0.0.0";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_body(error: &str) -> ErrorResponse {
    ErrorResponse { error: error.into() }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: Option<PathBuf>) {
    cfg.service(web::resource(CLASSIFY_PATH).route(web::post().to(handle_classify)));
    if let Some(dir) = frontend_dir {
        cfg.service(Files::new("/", dir).index_file("index.html"));
    }
}

async fn handle_classify(
    request: HttpRequest,
    payload: Result<web::Json<ClassificationRequest>, Error>,
    limiter: web::Data<RateLimiter>,
    classifier: web::Data<dyn Classifier>,
) -> HttpResponse {
    let client = request
        .connection_info()
        .realip_remote_addr()
        .unwrap_or(DEFAULT_IP)
        .to_string();
    if !limiter.admit(&client, Instant::now()) {
        return HttpResponse::TooManyRequests().json(error_body("Too many requests"));
    }

    let payload = match payload {
        Ok(payload) => payload.into_inner(),
        Err(e) => {
            warn!("Rejected payload from {}: {}", client, e);
            return HttpResponse::BadRequest().json(error_body("Invalid payload"));
        }
    };

    match classifier.classify(&payload.message).await {
        Ok(spam) => HttpResponse::Ok().json(ClassificationResponse { spam }),
        Err(ClassifyError::RateLimited) => {
            warn!("Upstream classifier is rate limiting");
            HttpResponse::TooManyRequests().json(error_body("Upstream is busy"))
        }
        Err(e) => {
            error!("Classification failed: {}", e);
            HttpResponse::BadGateway().json(error_body("Classification failed"))
        }
    }
}
