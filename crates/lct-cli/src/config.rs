//! Optional TOML configuration of the `lct` binary

use std::path::Path;

use anyhow::Context;
use lct_core::chart::ChartSet;
use serde::Deserialize;

/// Settings read from `--config`; every key is optional
///
/// ```toml
/// table_stride = 10
///
/// [step]
/// width = 800
/// height = 360
/// padding = 48
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows between printed samples of `--table`
    pub table_stride: usize,
    #[serde(flatten)]
    pub charts: ChartSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_stride: 20,
            charts: ChartSet::default(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lct_core::chart::{BODE_VIEWPORT, POLE_VIEWPORT};
    use lct_core::projection::Viewport;

    #[test]
    fn test_empty_config_keeps_presets() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            "table_stride = 5\n\n[step]\nwidth = 800\nheight = 360\npadding = 48\n",
        )
        .unwrap();
        assert_eq!(config.table_stride, 5);
        assert_eq!(config.charts.step, Viewport::new(800.0, 360.0, 48.0));
        assert_eq!(config.charts.pole, POLE_VIEWPORT);
        assert_eq!(config.charts.bode, BODE_VIEWPORT);
    }

    #[test]
    fn test_incomplete_viewport_is_rejected() {
        assert!(Config::parse("[bode]\nwidth = 700\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
