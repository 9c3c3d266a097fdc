pub mod bounds;
pub mod ticks;

pub use bounds::{Bounds, ScreenRect, Viewport, AXIS_MARGIN};
pub use ticks::{format_tick, nice_step, nice_ticks, MAX_TICKS};
