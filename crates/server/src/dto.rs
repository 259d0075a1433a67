//! Response bodies.
use mapi_model::Prediction;
use serde::Serialize;

/// Acknowledgment served from the root route.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// One prediction per scored row.
#[derive(Debug, Serialize)]
pub struct Scored {
    pub prediction: Vec<Prediction>,
}
