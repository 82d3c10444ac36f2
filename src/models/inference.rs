//! Regression inference over the loaded sales model

use crate::models::loader::{LoadedModel, ModelLoader};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::RwLock;
use tracing::debug;

/// Inference engine wrapping the loaded ONNX session.
///
/// The session is behind an `RwLock` because ONNX Runtime requires mutable
/// access to run; callers keep a shared handle.
pub struct InferenceEngine {
    model: RwLock<LoadedModel>,
}

impl InferenceEngine {
    /// Load the model artifact and build an engine around it.
    pub fn load<P: AsRef<Path>>(path: P, onnx_threads: usize) -> Result<Self> {
        let loader = ModelLoader::with_threads(onnx_threads)?;
        let model = loader.load_model(path)?;
        Ok(Self {
            model: RwLock::new(model),
        })
    }

    /// Run the regression on one feature vector.
    ///
    /// The vector is fed as a `[1, len]` tensor; the model's single scalar
    /// output is returned as `f64`.
    pub fn predict(&self, features: &[f32]) -> Result<f64> {
        use ort::value::Tensor;

        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .context("Failed to create input tensor")?;

        let mut model = self
            .model
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        let input_name = model.input_name.clone();
        let output_name = model.output_name.clone();

        let outputs = model.session.run(ort::inputs![&input_name => input_tensor])?;

        Self::extract_scalar(&outputs, &output_name)
    }

    /// Extract the predicted scalar from model output.
    fn extract_scalar(outputs: &ort::session::SessionOutputs, output_name: &str) -> Result<f64> {
        // Prefer the resolved output name
        if let Some(output) = outputs.get(output_name) {
            if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
                if let Some(&value) = data.first() {
                    return Ok(value as f64);
                }
            }
        }

        // Fallback: first numeric tensor among all outputs
        for (name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
                if let Some(&value) = data.first() {
                    debug!(output = %name, "Extracted prediction from fallback output");
                    return Ok(value as f64);
                }
            }
        }

        anyhow::bail!("Model produced no numeric output tensor")
    }
}
