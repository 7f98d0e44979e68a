/// What one successful `render` call did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct FrameReport {
    /// This call prepared the shared scene.
    pub scene_refreshed: bool,
    /// Children that received `render` + `post_render`.
    pub sensors_rendered: usize,
    /// Children skipped for lacking the render capability.
    pub sensors_skipped: usize,
}

/// Result of a `render` call that did not fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderOutcome {
    /// The per-sensor gate blocked the call; nothing happened.
    Gated,
    /// The frame was dispatched.
    Rendered(FrameReport),
}

impl RenderOutcome {
    #[inline]
    pub fn is_gated(&self) -> bool {
        matches!(self, RenderOutcome::Gated)
    }

    /// The frame report, if the call was dispatched.
    #[inline]
    pub fn report(&self) -> Option<&FrameReport> {
        match self {
            RenderOutcome::Gated => None,
            RenderOutcome::Rendered(r) => Some(r),
        }
    }
}
