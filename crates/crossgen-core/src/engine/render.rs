use crate::core::models::cluster::AtomCluster;
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to format plot output")]
    Format(#[from] fmt::Error),
    #[error("Unknown plot view '{0}' (expected '2d', '3d' or '3d-line')")]
    UnknownView(String),
    #[error("Plot request has {coordinates} coordinates but {labels} labels")]
    LabelMismatch { coordinates: usize, labels: usize },
}

/// A snapshot of cluster coordinates handed to a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub coordinates: Vec<Point3<f64>>,
    pub labels: Vec<String>,
    /// Draw the atoms as a connected polyline instead of a scatter.
    pub connected: bool,
    pub title: Option<String>,
}

impl PlotRequest {
    pub fn from_cluster(cluster: &impl AtomCluster, connected: bool) -> Self {
        Self {
            coordinates: cluster.coordinates(),
            labels: cluster.labels(),
            connected,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.coordinates.len() != self.labels.len() {
            return Err(RenderError::LabelMismatch {
                coordinates: self.coordinates.len(),
                labels: self.labels.len(),
            });
        }
        Ok(())
    }
}

/// Presentation collaborator for cluster snapshots.
///
/// The analysis never consumes anything a renderer produces; failures are reported
/// back only so the caller can log them.
pub trait Renderer {
    /// Plots the x/y projection of the coordinates.
    fn plot_2d(&mut self, request: &PlotRequest) -> Result<(), RenderError>;

    /// Plots the coordinates in 3D.
    fn plot_3d(&mut self, request: &PlotRequest) -> Result<(), RenderError>;
}

/// Which of the three plot variants a workflow asks the renderer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlotView {
    /// x/y projection with the atoms joined in order.
    #[default]
    TwoD,
    /// 3D scatter of the atoms.
    ThreeD,
    /// 3D view with the atoms joined in order.
    ThreeDLine,
}

impl PlotView {
    pub fn is_connected(&self) -> bool {
        !matches!(self, PlotView::ThreeD)
    }

    /// Snapshots `cluster` and hands it to the matching renderer method.
    pub fn draw(
        &self,
        cluster: &impl AtomCluster,
        title: impl Into<String>,
        renderer: &mut dyn Renderer,
    ) -> Result<(), RenderError> {
        let request = PlotRequest::from_cluster(cluster, self.is_connected()).with_title(title);
        match self {
            PlotView::TwoD => renderer.plot_2d(&request),
            PlotView::ThreeD | PlotView::ThreeDLine => renderer.plot_3d(&request),
        }
    }
}

impl FromStr for PlotView {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2d" => Ok(PlotView::TwoD),
            "3d" => Ok(PlotView::ThreeD),
            "3d-line" => Ok(PlotView::ThreeDLine),
            _ => Err(RenderError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for PlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotView::TwoD => write!(f, "2d"),
            PlotView::ThreeD => write!(f, "3d"),
            PlotView::ThreeDLine => write!(f, "3d-line"),
        }
    }
}

/// A renderer that discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn plot_2d(&mut self, _request: &PlotRequest) -> Result<(), RenderError> {
        Ok(())
    }

    fn plot_3d(&mut self, _request: &PlotRequest) -> Result<(), RenderError> {
        Ok(())
    }
}
