//! Vantage engine crate.
//!
//! Per-frame render coordination for rendering sensors that share one scene:
//! each sensor decides whether it renders at a simulation timestamp, while
//! the shared scene is prepared at most once per timestamp across all of
//! them.
//!
//! ```
//! use std::sync::Arc;
//! use vantage_engine::coordinator::RenderingSensor;
//! use vantage_engine::epoch::FrameEpoch;
//! use vantage_engine::scene::Scene;
//! use vantage_engine::time::SimTime;
//!
//! struct World;
//! impl Scene for World {
//!     fn name(&self) -> &str { "world" }
//!     fn pre_render(&self) {}
//! }
//!
//! let epoch = FrameEpoch::shared();
//! let scene: Arc<dyn Scene> = Arc::new(World);
//!
//! let mut front = RenderingSensor::new("front", epoch.clone());
//! let mut rear = RenderingSensor::new("rear", epoch.clone());
//! front.set_scene(&scene);
//! rear.set_scene(&scene);
//!
//! let now = SimTime::from_secs(1);
//! let a = front.render(now, false).unwrap();
//! let b = rear.render(now, false).unwrap();
//! assert!(a.report().unwrap().scene_refreshed);
//! assert!(!b.report().unwrap().scene_refreshed);
//! ```

pub mod coordinator;
pub mod epoch;
pub mod manager;
pub mod scene;
pub mod sensor;
pub mod time;

pub mod logging;
