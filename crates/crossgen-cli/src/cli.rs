use clap::{Args, Parser, Subcommand, ValueEnum};
use crossgen::engine::config::PlacementMode;
use crossgen::engine::render::PlotView;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "crossgen - generate random four-atom clusters and check whether their segments cross.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an explicit four-atom configuration.
    Check(CheckArgs),
    /// Generate random configurations and tally how they classify.
    Generate(GenerateArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Atom position as X,Y,Z. Must be given exactly four times, in atom order.
    #[arg(short, long = "atom", required = true, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub atoms: Vec<String>,

    /// Minimum allowed distance between non-bonded atoms.
    #[arg(long, value_name = "FLOAT")]
    pub min: f64,

    /// Maximum bond length (only recorded with the cluster; defaults to --min).
    #[arg(long, value_name = "FLOAT")]
    pub max: Option<f64>,

    /// Directory to write an SVG plot of valid configurations to.
    #[arg(long, value_name = "PATH")]
    pub plot_dir: Option<PathBuf>,

    /// Plot variant written to --plot-dir.
    #[arg(long, value_enum, default_value_t = ViewArg::TwoD)]
    pub view: ViewArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Line,
    Plane,
}

impl From<ModeArg> for PlacementMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Line => PlacementMode::Line,
            ModeArg::Plane => PlacementMode::Plane,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    /// x/y projection, atoms joined in order
    #[value(name = "2d")]
    TwoD,
    /// 3D scatter
    #[value(name = "3d")]
    ThreeD,
    /// 3D, atoms joined in order
    #[value(name = "3d-line")]
    ThreeDLine,
}

impl From<ViewArg> for PlotView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::TwoD => PlotView::TwoD,
            ViewArg::ThreeD => PlotView::ThreeD,
            ViewArg::ThreeDLine => PlotView::ThreeDLine,
        }
    }
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Placement strategy, overriding the config file.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of configurations to generate, overriding the config file.
    #[arg(short = 'n', long, value_name = "INT")]
    pub trials: Option<usize>,

    /// Minimum bond length and non-bonded distance, overriding the config file.
    #[arg(long, value_name = "FLOAT")]
    pub min: Option<f64>,

    /// Maximum bond length, overriding the config file.
    #[arg(long, value_name = "FLOAT")]
    pub max: Option<f64>,

    /// Seed for the random source, overriding the config file.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Write an SVG plot of every valid configuration into this directory.
    #[arg(long, value_name = "PATH")]
    pub plot_dir: Option<PathBuf>,

    /// Plot variant, overriding the config file.
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generation.trials=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
