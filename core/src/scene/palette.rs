/// Fixed colors cycled over segment groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentColor {
    Red,
    Green,
    Blue,
}

impl SegmentColor {
    pub const PALETTE: [SegmentColor; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Color of the segment group at `index`.
    pub fn for_group(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// RGB components of the named color.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Self::Red => [1.0, 0.0, 0.0],
            Self::Green => [0.0, 0.5, 0.0],
            Self::Blue => [0.0, 0.0, 1.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}
