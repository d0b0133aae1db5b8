use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::plot::SvgPlotter;
use crate::utils::parser;
use crossgen::core::models::atom::Atom;
use crossgen::core::models::cluster::{ClusterBounds, FourAtomCluster};
use crossgen::engine::analysis::Condition;
use crossgen::engine::render::{NullRenderer, Renderer};
use crossgen::workflows::check;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<Condition> {
    let cluster = build_cluster(&args)?;
    info!("Checking configuration {:?}", cluster.positions());

    let mut plotter = match &args.plot_dir {
        Some(dir) => Some(SvgPlotter::new(dir).map_err(|e| CliError::Other(e.into()))?),
        None => None,
    };
    let mut null_renderer = NullRenderer;
    let renderer: &mut dyn Renderer = match plotter.as_mut() {
        Some(plotter) => plotter,
        None => &mut null_renderer,
    };

    let condition = check::check_and_report_conditions(&cluster, args.view.into(), renderer)?;
    println!("{}", condition);

    if let Some(plotter) = &plotter {
        for path in plotter.written() {
            println!("Plot written to: {}", path.display());
        }
    }

    Ok(condition)
}

fn build_cluster(args: &CheckArgs) -> Result<FourAtomCluster> {
    let atoms = args
        .atoms
        .iter()
        .enumerate()
        .map(|(i, text)| {
            parser::parse_point(text)
                .map(|position| Atom::new(&i.to_string(), position))
                .map_err(|e| CliError::Argument(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let bounds = ClusterBounds::new(args.min, args.max.unwrap_or(args.min));
    if !bounds.is_valid() {
        return Err(CliError::Argument(format!(
            "Invalid distance bounds [{}, {}]: expected 0 <= min <= max",
            bounds.min, bounds.max
        )));
    }

    Ok(FourAtomCluster::new(atoms, bounds)?)
}
