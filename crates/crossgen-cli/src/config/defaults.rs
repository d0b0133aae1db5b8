use crossgen::engine::config::PlacementMode;
use crossgen::engine::render::PlotView;

pub struct DefaultsConfig {
    pub min: f64,
    pub max: f64,
    pub mode: PlacementMode,
    pub trials: usize,
    pub view: PlotView,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 2.0,
            mode: PlacementMode::Plane,
            trials: 100,
            view: PlotView::TwoD,
        }
    }
}
