//! Preprocessing program configuration.

use crate::common::*;

pub const DEFAULT_DATASET_DIR: &str = "SYSU-MM01";
pub const DEFAULT_OUTPUT_DIR: &str = "SYSU-MM01-processed";

/// The preprocessing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The dataset root containing `exp/` and the `cam1`..`cam6` directories.
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: PathBuf,
    /// The directory where the four split directories are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_text() -> Result<()> {
        let config: Config = json5::from_str(
            r#"{
                // comments are allowed
                dataset_dir: "/data/SYSU-MM01",
                output_dir: "/data/processed",
            }"#,
        )?;
        assert_eq!(config.dataset_dir, Path::new("/data/SYSU-MM01"));
        assert_eq!(config.output_dir, Path::new("/data/processed"));
        Ok(())
    }

    #[test]
    fn missing_keys_take_defaults() -> Result<()> {
        let config: Config = json5::from_str(r#"{ output_dir: "out" }"#)?;
        assert_eq!(config.dataset_dir, Path::new(DEFAULT_DATASET_DIR));
        assert_eq!(config.output_dir, Path::new("out"));

        let config: Config = json5::from_str("{}")?;
        assert_eq!(config, Config::default());
        Ok(())
    }
}
