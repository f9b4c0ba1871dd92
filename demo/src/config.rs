//! Demo settings, read from an optional TOML file.

use std::path::Path;

use serde::Deserialize;
use tilewalk_paths::{FindOptions, PathConfig};

use crate::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub path: PathConfig,
    pub query: FindOptions,
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::parse(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Parse TOML text and reject step costs the search cannot use.
    pub fn parse(text: &str) -> Result<Self> {
        let cfg: DemoConfig = toml::from_str(text)?;
        cfg.path.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DemoError;
    use tilewalk_core::Size;
    use tilewalk_paths::PathError;

    #[test]
    fn bundled_config_parses() {
        let cfg = DemoConfig::parse(include_str!("../demo.toml")).unwrap();
        assert_eq!(cfg.path, PathConfig::default());
        assert!(cfg.query.check_last);
        assert_eq!(cfg.query.arrived_area, Size::new(2, 3));
    }

    #[test]
    fn empty_config_is_default() {
        let cfg = DemoConfig::parse("").unwrap();
        assert_eq!(cfg.path, PathConfig::default());
        assert_eq!(cfg.query, FindOptions::default());
    }

    #[test]
    fn overflowing_cost_is_refused() {
        let res = DemoConfig::parse("[path]\ndiagonal_cost = 2000000000\n");
        assert!(matches!(
            res,
            Err(DemoError::Path(PathError::InvalidCosts {
                straight: 10,
                diagonal: 2_000_000_000
            }))
        ));
    }
}
