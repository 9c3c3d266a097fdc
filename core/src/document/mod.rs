pub mod element;
pub mod loader;

pub use element::{Element, FullState, SegmentGroup};
pub use loader::SolutionDocument;
