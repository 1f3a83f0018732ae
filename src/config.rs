//! User configuration (config.toml in the platform config dir).
//!
//! Everything is optional; a missing file means defaults. Example:
//!
//! ```toml
//! section = "club"
//! quantity = 4
//!
//! [geometry]
//! seat_size = 20.0
//! aisle_gap = 30.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use courtside_core::Geometry;
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{CourtsideError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Starting section; CLI takes precedence.
    pub section: Option<String>,
    /// Starting ticket quantity; CLI takes precedence.
    pub quantity: Option<usize>,
    /// Seat layout constant overrides.
    pub geometry: Geometry,
}

/// Default config file location, e.g. `~/.config/courtside/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("io", "courtside", "courtside")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load configuration.
///
/// An explicit path must exist and parse; the default path is optional and
/// silently falls back to defaults when absent. A malformed file is always
/// an error - bad config should fail loudly at startup, not render oddly.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !path.is_file() {
        if required {
            return Err(CourtsideError::Config {
                path: path.display().to_string(),
                message: "file not found".to_string(),
            });
        }
        return Ok(Config::default());
    }

    let text = fs::read_to_string(&path)?;
    toml::from_str(&text).map_err(|e| CourtsideError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "{contents}").unwrap();
        path
    }

    #[test]
    fn full_config_parses() {
        let path = write_temp(
            "courtside_test_full.toml",
            "section = \"club\"\nquantity = 4\n\n[geometry]\nseat_size = 20.0\n",
        );
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.section.as_deref(), Some("club"));
        assert_eq!(config.quantity, Some(4));
        assert!((config.geometry.seat_size - 20.0).abs() < 1e-6);
        // Unspecified geometry fields keep their defaults.
        assert!((config.geometry.row_gap - Geometry::default().row_gap).abs() < 1e-6);
        fs::remove_file(path).ok();
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let path = write_temp("courtside_test_empty.toml", "");
        let config = load(Some(&path)).unwrap();
        assert!(config.section.is_none());
        assert!(config.quantity.is_none());
        fs::remove_file(path).ok();
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/courtside.toml"))).unwrap_err();
        assert!(matches!(err, CourtsideError::Config { .. }));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let path = write_temp("courtside_test_bad.toml", "section = [not toml");
        assert!(load(Some(&path)).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = write_temp("courtside_test_unknown.toml", "sektion = \"club\"\n");
        assert!(load(Some(&path)).is_err());
        fs::remove_file(path).ok();
    }
}
