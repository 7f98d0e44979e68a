/// Render capability carried by camera-like sensors.
///
/// `render` draws the sensor's view of the already prepared scene;
/// `post_render` finalizes it (readback, publishing). They are always called
/// in that order, once each per dispatched frame.
pub trait RenderSensor: Send + Sync {
    fn name(&self) -> &str;

    fn render(&self);

    fn post_render(&self);
}

/// A child sensor that is attached to a rendering entity but never draws
/// (mount frames, markers, non-visual probes).
pub trait PassiveSensor: Send + Sync {
    fn name(&self) -> &str;
}
