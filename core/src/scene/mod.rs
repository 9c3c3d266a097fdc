pub mod palette;
pub mod plot;
pub mod title;

pub use palette::SegmentColor;
pub use plot::{PlotScene, Polyline};
pub use title::problem_title;
