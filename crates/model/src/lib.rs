//! Tabular model artifacts.
//!
//! A [`Model`] is deserialized once from a JSON artifact, validated, and then
//! shared read-only by every request. Callers hand it a [`Frame`] of raw JSON
//! cells; the model encodes each row against its own feature schema, applies
//! the optional standard scaler, and scores the row with its estimator.
//!
//! ## Core Types
//!
//! - [`Model`] — Validated artifact, the only [`Predictor`] implementation
//! - [`Frame`] — Named columns over rows of untyped cells
//! - [`Feature`] — Schema entry describing how one column is encoded
//! - [`Estimator`] — Gradient-boosted trees or a linear model
//! - [`Prediction`] — Class label or regression value for one row
//!
//! ## Errors
//!
//! - [`LoadError`] — Artifact could not be read, parsed, or validated
//! - [`ScoreError`] — A frame does not fit the model's schema
mod error;
mod estimator;
mod feature;
mod frame;
mod model;
mod prediction;
mod scaler;
mod tree;

pub use error::*;
pub use estimator::*;
pub use feature::*;
pub use frame::*;
pub use model::*;
pub use prediction::*;
pub use scaler::*;
pub use tree::*;

/// Anything that turns a frame into one prediction per row.
///
/// The HTTP layer holds the loaded model behind this trait so it never
/// depends on the artifact format.
pub trait Predictor: Send + Sync {
    /// Input schema, in encoding order.
    fn features(&self) -> &[Feature];
    /// Score every row of the frame.
    fn predict(&self, frame: &Frame) -> Result<Vec<Prediction>, ScoreError>;
}
