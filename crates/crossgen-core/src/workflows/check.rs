use crate::core::models::cluster::FourAtomCluster;
use crate::engine::analysis::{self, Condition, Intersection};
use crate::engine::error::EngineError;
use crate::engine::render::{PlotView, Renderer};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckReport {
    pub condition: Condition,
    pub intersection: Intersection,
}

/// Analyzes and classifies the current configuration of `cluster`.
///
/// All geometry is computed before anything is rendered, so the 2D plot always shows
/// the configuration that was classified. Only configurations that pass the distance
/// guards (`crossed` / `not crossed`) are plotted, in the requested `view` and titled
/// with the condition string. A renderer failure is logged and does not affect the
/// result.
///
/// # Errors
///
/// Returns [`EngineError::Analysis`] for degenerate segments or an unsolvable
/// intersection system.
#[instrument(level = "debug", skip_all, name = "check_workflow", fields(view = %view))]
pub fn run(
    cluster: &FourAtomCluster,
    view: PlotView,
    renderer: &mut dyn Renderer,
) -> Result<CheckReport, EngineError> {
    let intersection = analysis::analyze_segments(cluster)?;
    let condition = analysis::classify(cluster, &intersection);

    if condition.is_valid() {
        if let Err(e) = view.draw(cluster, condition.to_string(), renderer) {
            warn!("Failed to render configuration: {}", e);
        }
    }

    Ok(CheckReport {
        condition,
        intersection,
    })
}

/// Runs [`run`] and reports the resulting condition string through the log.
pub fn check_and_report_conditions(
    cluster: &FourAtomCluster,
    view: PlotView,
    renderer: &mut dyn Renderer,
) -> Result<Condition, EngineError> {
    let report = run(cluster, view, renderer)?;
    info!(condition = %report.condition, "{}", report.condition);
    Ok(report.condition)
}
