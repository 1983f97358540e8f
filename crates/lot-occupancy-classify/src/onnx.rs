//! ONNX Runtime engine backend.

use std::path::Path;
use std::sync::Mutex;

use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::{InferenceEngine, InferenceError};

fn engine_err(err: ort::Error) -> InferenceError {
    InferenceError::Engine(err.to_string())
}

/// [`InferenceEngine`] backed by an ONNX Runtime session.
///
/// `Session::run` needs exclusive access, so the session sits behind a
/// mutex; the handle itself stays shareable across threads.
pub struct OnnxEngine {
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxEngine {
    /// Load a model from an `.onnx` file.
    ///
    /// `input_name` must match the graph's input tensor (for models exported
    /// from a TF SavedModel this is typically the serving signature input).
    pub fn from_file(
        path: impl AsRef<Path>,
        input_name: impl Into<String>,
    ) -> Result<Self, InferenceError> {
        let session = Session::builder()
            .map_err(engine_err)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(engine_err)?
            .with_intra_threads(4)
            .map_err(engine_err)?
            .commit_from_file(path)
            .map_err(engine_err)?;

        Ok(Self {
            session: Mutex::new(session),
            input_name: input_name.into(),
        })
    }
}

impl InferenceEngine for OnnxEngine {
    fn run(&self, nhwc: &[f32], width: usize, height: usize) -> Result<[f32; 2], InferenceError> {
        let shape = [1usize, height, width, 3];
        let input = ort::value::Value::from_array((
            shape.as_slice(),
            nhwc.to_vec().into_boxed_slice(),
        ))
        .map_err(engine_err)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::Engine("session mutex poisoned".into()))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(engine_err)?;

        let (_, scores) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(engine_err)?;

        if scores.len() < 2 {
            return Err(InferenceError::BadOutput { got: scores.len() });
        }
        Ok([scores[0], scores[1]])
    }
}
