use crate::cli::GenerateArgs;
use crate::config::{self, AppConfig};
use crate::error::{CliError, Result};
use crate::plot::SvgPlotter;
use crate::utils::progress::CliProgressHandler;
use crossgen::engine::render::{NullRenderer, Renderer};
use crossgen::engine::progress::ProgressReporter;
use crossgen::workflows::generate::{self, GenerationSummary};
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<GenerationSummary> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::build_config(&args)?;
    let progress_handler = CliProgressHandler::new();
    execute(&app_config, &progress_handler)
}

fn execute(app_config: &AppConfig, progress_handler: &CliProgressHandler) -> Result<GenerationSummary> {
    let core_config = &app_config.core_config;
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let mut plotter = match &app_config.plot_dir {
        Some(dir) => Some(SvgPlotter::new(dir).map_err(|e| CliError::Other(e.into()))?),
        None => None,
    };
    let mut null_renderer = NullRenderer;
    let renderer: &mut dyn Renderer = match plotter.as_mut() {
        Some(plotter) => plotter,
        None => &mut null_renderer,
    };

    println!(
        "Generating {} configuration(s) in {} mode with bonds in [{}, {}]...",
        core_config.trials, core_config.mode, core_config.bounds.min, core_config.bounds.max
    );
    if app_config.plot_dir.is_some() {
        println!("Writing {} plots of valid configurations.", core_config.view);
    }
    let summary = generate::run(core_config, renderer, &reporter)?;

    print_summary(&summary);
    if let (Some(plotter), Some(dir)) = (&plotter, &app_config.plot_dir) {
        println!(
            "{} plot(s) written to: {}",
            plotter.written().len(),
            dir.display()
        );
    }

    Ok(summary)
}

fn print_summary(summary: &GenerationSummary) {
    for (condition, count) in summary.iter() {
        println!("  {:<12} {:>8}", condition.to_string(), count);
    }
    println!("  {:<12} {:>8}", "total", summary.total());
    if let Some(fraction) = summary.crossed_fraction() {
        println!("Crossed among valid configurations: {:.2}%", fraction * 100.0);
    }
}
