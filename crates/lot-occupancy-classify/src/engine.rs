/// Errors surfaced by the classifier adapter or the engine behind it.
#[derive(thiserror::Error, Debug)]
pub enum InferenceError {
    #[error("patch shape mismatch (expected {expected}x{expected}x3, got {width}x{height})")]
    ShapeMismatch {
        expected: usize,
        width: usize,
        height: usize,
    },
    #[error("engine returned {got} class scores, expected 2")]
    BadOutput { got: usize },
    #[error("inference engine failure: {0}")]
    Engine(String),
}

/// One forward pass over a pre-built input tensor.
///
/// The input is an NHWC `f32` buffer of shape `[1, height, width, 3]`
/// flattened row-major, preprocessed by the classifier. The output is the
/// pair of class scores `[occupied, vacant]` (softmax or raw logits, the
/// decision rule only compares them).
///
/// Engines are loaded once at process start and shared read-only across
/// callers, hence the `Send + Sync` bound.
pub trait InferenceEngine: Send + Sync {
    fn run(&self, nhwc: &[f32], width: usize, height: usize) -> Result<[f32; 2], InferenceError>;
}
