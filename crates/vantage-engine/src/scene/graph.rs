/// Render-ready scene graph shared by every sensor viewing the same world.
///
/// Implementations are driven through `&self`; any state touched by
/// `pre_render` lives behind the implementor's own interior mutability.
pub trait Scene: Send + Sync {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Prepares the graph for drawing (transform propagation, culling data,
    /// resource uploads).
    ///
    /// Called at most once per unique simulation timestamp across all
    /// coordinators sharing a [`FrameEpoch`](crate::epoch::FrameEpoch).
    fn pre_render(&self);
}
