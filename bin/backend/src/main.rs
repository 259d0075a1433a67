//! Prediction Server Binary
//!
//! Loads the model artifact once, then serves `GET /` and `POST /predict`.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:8000) against MODEL_PATH.

use anyhow::Context;
use clap::Parser;
use mapi_model::*;
use mapi_server::Config;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    mapi_core::log().context("initialize logging")?;
    let model = Model::load(&config.model)
        .inspect_err(|e| log::error!("model failed to load: {}", e))
        .with_context(|| format!("load model artifact {}", config.model.display()))?;
    if config.check {
        println!("{}", model.estimator());
        for feature in model.features() {
            println!(" - {}", feature);
        }
        return Ok(());
    }
    mapi_server::run(&config, Arc::new(model)).await?;
    Ok(())
}
