use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window and styling options for the viewer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub title_size: f32,
    pub tick_count: usize,
    pub show_solution_points: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 800.0,
            line_width: 1.5,
            marker_radius: 3.0,
            title_size: 16.0,
            tick_count: 6,
            show_solution_points: false,
        }
    }
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading viewer config {}", path_ref.display()))?;
        let config: ViewerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing viewer config {}", path_ref.display()))?;
        info!("viewer config loaded from {}", path_ref.display());
        Ok(config)
    }
}
