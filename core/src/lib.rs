//! Document model and plot math for the beamplot viewer.
//!
//! The crate turns a solution document written by the beam solver into a
//! [`PlotScene`]: colored polylines, the solution point cloud and a title.
//! Everything here is GUI-agnostic; the `beamplot` binary draws the scene.

pub mod document;
pub mod math;
pub mod prelude;
pub mod scene;

pub use document::SolutionDocument;
pub use prelude::{DataPoint, DocumentError, DocumentResult};
pub use scene::PlotScene;
