//! Shared scene-update bookkeeping.
//!
//! One [`FrameEpoch`] exists per simulated world and is shared by every
//! rendering sensor looking at that world's scene. It records the last
//! timestamp at which the scene was prepared so the preparation runs at most
//! once per timestamp, however many sensors are driven with it.

mod frame_epoch;

pub use frame_epoch::FrameEpoch;
