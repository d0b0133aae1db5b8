use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBoundsConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGenerationConfig {
    pub mode: Option<String>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub plot_dir: Option<PathBuf>,
    pub view: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bounds: Option<FileBoundsConfig>,
    pub generation: Option<FileGenerationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crossgen.toml");
        fs::write(
            &path,
            r#"
            [bounds]
            min = 0.9
            max = 1.7

            [generation]
            mode = "line"
            trials = 42
            seed = 1234
            plot-dir = "plots"
            view = "3d-line"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();

        let bounds = config.bounds.unwrap();
        assert_eq!(bounds.min, Some(0.9));
        assert_eq!(bounds.max, Some(1.7));
        let generation = config.generation.unwrap();
        assert_eq!(generation.mode.as_deref(), Some("line"));
        assert_eq!(generation.trials, Some(42));
        assert_eq!(generation.seed, Some(1234));
        assert_eq!(generation.plot_dir, Some(PathBuf::from("plots")));
        assert_eq!(generation.view.as_deref(), Some("3d-line"));
    }

    #[test]
    fn from_file_accepts_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = FileConfig::from_file(&path).unwrap();

        assert!(config.bounds.is_none());
        assert!(config.generation.is_none());
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[bounds]\nminimum = 1.0\n").unwrap();

        let result = FileConfig::from_file(&path);

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
