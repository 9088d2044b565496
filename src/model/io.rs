use std::path::Path;

use log::info;

use crate::error::ModelLoadError;
use crate::model::network::TrainedModel;

/// Reads the bincode model artifact from `path`.
///
/// Fails with [`ModelLoadError`] when the file is absent, unreadable, or does
/// not deserialize; the caller must halt further processing. No retry, no
/// fallback model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TrainedModel, ModelLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let model_data = std::fs::read(path)?;
    let model = bincode::deserialize(&model_data)?;
    info!("loaded model artifact from {}", path.display());
    Ok(model)
}

/// Writes a model artifact. The training process producing these lives
/// out-of-band; this writer exists for that tooling and for tests.
pub fn save_model<P: AsRef<Path>>(path: P, model: &TrainedModel) -> Result<(), ModelLoadError> {
    let model_data = bincode::serialize(model)?;
    std::fs::write(path, model_data)?;
    Ok(())
}
