use crate::core::models::cluster::FourAtomCluster;
use crate::engine::analysis::Condition;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::render::{NullRenderer, Renderer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

use super::check;

/// Outcome counts of a batch of generated configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    counts: BTreeMap<Condition, usize>,
}

impl GenerationSummary {
    pub fn record(&mut self, condition: Condition) {
        *self.counts.entry(condition).or_insert(0) += 1;
    }

    pub fn count(&self, condition: Condition) -> usize {
        self.counts.get(&condition).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Configurations that passed every distance guard.
    pub fn valid(&self) -> usize {
        self.count(Condition::Crossed) + self.count(Condition::NotCrossed)
    }

    /// Share of valid configurations whose segments cross, if any were valid.
    pub fn crossed_fraction(&self) -> Option<f64> {
        match self.valid() {
            0 => None,
            valid => Some(self.count(Condition::Crossed) as f64 / valid as f64),
        }
    }

    /// Counts for every condition in classification order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, usize)> + '_ {
        Condition::ALL
            .into_iter()
            .map(|condition| (condition, self.count(condition)))
    }
}

/// Generates and classifies `config.trials` configurations.
///
/// The random source is seeded from `config.seed` when present, otherwise from
/// system entropy.
#[instrument(skip_all, name = "generation_workflow", fields(mode = %config.mode, trials = config.trials))]
pub fn run(
    config: &GenerationConfig,
    renderer: &mut dyn Renderer,
    reporter: &ProgressReporter,
) -> Result<GenerationSummary, EngineError> {
    let mut rng = match config.seed {
        Some(seed) => {
            debug!(seed, "Seeding random source.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    run_with_rng(config, &mut rng, renderer, reporter)
}

/// Same as [`run`], drawing from the given random source.
pub fn run_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
    renderer: &mut dyn Renderer,
    reporter: &ProgressReporter,
) -> Result<GenerationSummary, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Generating configurations",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.trials as u64,
    });

    let mut cluster = FourAtomCluster::with_labels(config.bounds);
    let mut null_renderer = NullRenderer;
    let mut summary = GenerationSummary::default();

    for trial in 0..config.trials {
        cluster.place(config.mode, rng);

        let target: &mut dyn Renderer = if config.render {
            &mut *renderer
        } else {
            &mut null_renderer
        };
        let report = check::run(&cluster, config.view, target).map_err(|e| EngineError::Trial {
            trial,
            source: Box::new(e),
        })?;

        debug!(trial, condition = %report.condition, "Classified configuration.");
        summary.record(report.condition);
        reporter.report(Progress::Classified {
            trial,
            condition: report.condition,
        });
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        total = summary.total(),
        crossed = summary.count(Condition::Crossed),
        valid = summary.valid(),
        "Generation complete."
    );

    Ok(summary)
}
