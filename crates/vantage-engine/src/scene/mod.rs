//! Scene contract.
//!
//! The render-ready scene graph is built and owned elsewhere; rendering
//! sensors only ever ask it to prepare itself for drawing. Coordinators keep
//! a weak reference so a scene dropped by its owner is reported rather than
//! used.

mod graph;

pub use graph::Scene;
