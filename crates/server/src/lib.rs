//! Prediction Server
//!
//! Serves a loaded model over actix-web. The model is loaded once by the
//! caller and shared read-only across every worker.
//!
//! ## Routes
//!
//! - `GET /` — liveness acknowledgment
//! - `POST /predict` — score one JSON feature record
//!
//! ## Submodules
//!
//! - [`handlers`] — Request handlers
//! - [`dto`] — Response bodies
mod config;

pub mod dto;
pub mod handlers;

pub use config::Config;

use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use mapi_model::Predictor;
use std::sync::Arc;

/// Route table, shared by the server and in-process tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/predict", web::post().to(handlers::predict));
}

pub async fn run(config: &Config, model: Arc<dyn Predictor>) -> Result<(), std::io::Error> {
    let model = web::Data::from(model);
    log::info!("starting prediction server on {}", config.bind);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(model.clone())
            .configure(routes)
    });
    let server = match config.workers {
        Some(workers) => server.workers(workers.get()),
        None => server,
    };
    server.bind(&config.bind)?.run().await
}
