use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Per-feature normalization parameters captured when the model was trained.
/// Applied as `(x - mean) / std` before every forward pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureStats {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}
