use crate::prelude::DataPoint;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Axis-aligned extent of plotted data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Extent used when nothing is drawn.
    pub const UNIT: Bounds = Bounds {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };

    /// Tight extent over the points; `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        points
            .into_iter()
            .fold(None, |acc: Option<Bounds>, p| {
                Some(match acc {
                    None => Bounds {
                        min_x: p.x,
                        max_x: p.x,
                        min_y: p.y,
                        max_y: p.y,
                    },
                    Some(b) => Bounds {
                        min_x: b.min_x.min(p.x),
                        max_x: b.max_x.max(p.x),
                        min_y: b.min_y.min(p.y),
                        max_y: b.max_y.max(p.y),
                    },
                })
            })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Widens zero-span axes, then pads every axis by `margin` of its span.
    pub fn padded(&self, margin: f64) -> Self {
        let (min_x, max_x) = pad_axis(self.min_x, self.max_x, margin);
        let (min_y, max_y) = pad_axis(self.min_y, self.max_y, margin);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

fn pad_axis(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let (min, max) = if max > min {
        (min, max)
    } else {
        let half = if min == 0.0 { 0.05 } else { min.abs() * 0.05 };
        (min - half, max + half)
    };
    let pad = (max - min) * margin;
    (min - pad, max + pad)
}

/// Screen-space rectangle, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps data coordinates into a screen rectangle with the y axis flipped.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub data: Bounds,
    pub screen: ScreenRect,
}

impl Viewport {
    pub fn new(data: Bounds, screen: ScreenRect) -> Self {
        Self { data, screen }
    }

    pub fn to_screen(&self, point: DataPoint) -> (f64, f64) {
        (self.screen_x(point.x), self.screen_y(point.y))
    }

    pub fn screen_x(&self, x: f64) -> f64 {
        self.screen.x + (x - self.data.min_x) / self.data.width() * self.screen.width
    }

    pub fn screen_y(&self, y: f64) -> f64 {
        self.screen.y + (self.data.max_y - y) / self.data.height() * self.screen.height
    }
}
