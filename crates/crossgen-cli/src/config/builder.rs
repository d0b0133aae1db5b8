use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crossgen::engine::config::{self as core_config, PlacementMode};
use crossgen::engine::render::PlotView;

/// Merges CLI arguments, `--set` overrides, the config file, and built-in defaults,
/// in that order of precedence.
pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let bounds_file = file_config.bounds.take().unwrap_or_default();
    let min = args.min.or(bounds_file.min).unwrap_or(defaults.min);
    let max = args.max.or(bounds_file.max).unwrap_or(defaults.max);

    let generation_file = file_config.generation.take().unwrap_or_default();
    let trials = args
        .trials
        .or(generation_file.trials)
        .unwrap_or(defaults.trials);
    let seed = args.seed.or(generation_file.seed);

    let mode = match (args.mode, generation_file.mode.as_deref()) {
        (Some(mode), _) => mode.into(),
        (None, Some(name)) => name
            .parse::<PlacementMode>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        (None, None) => defaults.mode,
    };

    let view = match (args.view, generation_file.view.as_deref()) {
        (Some(view), _) => view.into(),
        (None, Some(name)) => name
            .parse::<PlotView>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        (None, None) => defaults.view,
    };

    let plot_dir = args.plot_dir.clone().or(generation_file.plot_dir);

    let core_config = core_config::GenerationConfigBuilder::new()
        .min(min)
        .max(max)
        .mode(mode)
        .trials(trials)
        .seed(seed)
        .render(plot_dir.is_some())
        .view(view)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        plot_dir,
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "bounds.min" => {
                config.bounds.get_or_insert_with(Default::default).min =
                    Some(parse_value(key, value_str, "float")?);
            }
            "bounds.max" => {
                config.bounds.get_or_insert_with(Default::default).max =
                    Some(parse_value(key, value_str, "float")?);
            }
            "generation.trials" => {
                config.generation.get_or_insert_with(Default::default).trials =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "generation.seed" => {
                config.generation.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "generation.mode" => {
                config.generation.get_or_insert_with(Default::default).mode =
                    Some(value_str.to_string());
            }
            "generation.view" => {
                config.generation.get_or_insert_with(Default::default).view =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}
