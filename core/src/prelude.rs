use std::path::PathBuf;

/// Planar point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Common error type for loading a solution document.
#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON")]
    Parse(#[from] serde_json::Error),
    #[error("document root is not a JSON object")]
    NotAnObject,
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("`{0}` is not a sequence")]
    NotASequence(&'static str),
    #[error("segment group solution_seg[{index}] is not a sequence")]
    MalformedGroup { index: usize },
    #[error("element {location} has no numeric full.x/full.y")]
    MalformedElement {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type DocumentResult<T> = Result<T, DocumentError>;
