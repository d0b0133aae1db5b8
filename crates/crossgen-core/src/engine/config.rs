use super::render::PlotView;
use crate::core::models::cluster::ClusterBounds;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid distance bounds [{min}, {max}]: expected 0 <= min <= max and max > 0")]
    InvalidBounds { min: f64, max: f64 },
    #[error("Number of trials must be at least 1")]
    InvalidTrials,
    #[error("Unknown placement mode '{0}' (expected 'line' or 'plane')")]
    UnknownMode(String),
}

/// Strategy used to lay out the four atoms of a generated cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementMode {
    /// Collinear chain along the z-axis.
    Line,
    /// Zig-zag chain in the z = 0 plane.
    #[default]
    Plane,
}

impl FromStr for PlacementMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" | "linear" => Ok(PlacementMode::Line),
            "plane" | "planar" => Ok(PlacementMode::Plane),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementMode::Line => write!(f, "line"),
            PlacementMode::Plane => write!(f, "plane"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub bounds: ClusterBounds,
    pub mode: PlacementMode,
    pub trials: usize,
    pub seed: Option<u64>,
    /// Forward every valid configuration to the renderer.
    pub render: bool,
    /// Plot variant requested for each rendered configuration.
    pub view: PlotView,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    min: Option<f64>,
    max: Option<f64>,
    mode: Option<PlacementMode>,
    trials: Option<usize>,
    seed: Option<u64>,
    render: bool,
    view: PlotView,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
    pub fn bounds(self, bounds: ClusterBounds) -> Self {
        self.min(bounds.min).max(bounds.max)
    }
    pub fn mode(mut self, mode: PlacementMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
    pub fn view(mut self, view: PlotView) -> Self {
        self.view = view;
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let bounds = ClusterBounds::new(
            self.min.ok_or(ConfigError::MissingParameter("min"))?,
            self.max.ok_or(ConfigError::MissingParameter("max"))?,
        );
        // With max == 0 every drawn bond collapses to a point.
        if !bounds.is_valid() || bounds.max == 0.0 {
            return Err(ConfigError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }

        let trials = self.trials.ok_or(ConfigError::MissingParameter("trials"))?;
        if trials == 0 {
            return Err(ConfigError::InvalidTrials);
        }

        Ok(GenerationConfig {
            bounds,
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            trials,
            seed: self.seed,
            render: self.render,
            view: self.view,
        })
    }
}
