use thiserror::Error;

/// Reported failure of [`RenderingSensor::render`](super::RenderingSensor::render).
///
/// Neither variant changes any state; the caller may bind a scene and retry.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RenderError {
    /// `render` was called before `set_scene`.
    #[error("rendering sensor '{sensor}' has no scene bound")]
    SceneUnbound { sensor: String },

    /// The bound scene was dropped by its owner.
    #[error("scene bound to rendering sensor '{sensor}' no longer exists")]
    SceneExpired { sensor: String },
}
