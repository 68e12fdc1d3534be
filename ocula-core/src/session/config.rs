use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{OculaError, OculaResult},
    patterns::{
        anchored::ThemedImages,
        catalog::{DEFAULT_COMPREHENSIVE_LOOPS, PATTERN_NAMES},
    },
    session::settings::Settings,
};

/// JSON-facing session setup. Every field is optional.
///
/// ```json
/// {
///   "comprehensive_loops": [1, 6, 8, 3, 1, 1, 1, 1, 1, 1, 1, 5, 1, 4],
///   "comprehensive_order": [0, 2, 4],
///   "settings": { "dark_mode": true, "show_grid": false },
///   "seed": 42,
///   "images": { "light": "pvision2whitemode.svg", "dark": "pvision2darkmode.svg" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Repeats per roster position in comprehensive playback. Missing
    /// positions repeat once.
    pub comprehensive_loops: Vec<u32>,
    /// Roster indices visited in comprehensive playback; defaults to roster
    /// order.
    pub comprehensive_order: Option<Vec<usize>>,
    /// Initial appearance.
    pub settings: Settings,
    /// Seed for the random-walk patterns; the wall clock when absent.
    pub seed: Option<u64>,
    /// Asset names of the themed peripheral image.
    pub images: ThemedImages,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            comprehensive_loops: DEFAULT_COMPREHENSIVE_LOOPS.to_vec(),
            comprehensive_order: None,
            settings: Settings::default(),
            seed: None,
            images: ThemedImages::default(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OculaResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| OculaError::config(format!("parse session JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> OculaResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> OculaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OculaError::config(format!("open session JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check loop counts, traversal order and image names.
    pub fn validate(&self) -> OculaResult<()> {
        let roster = PATTERN_NAMES.len();
        if self.comprehensive_loops.len() > roster {
            return Err(OculaError::validation(format!(
                "comprehensive_loops has {} entries, roster has {roster}",
                self.comprehensive_loops.len()
            )));
        }
        if let Some(i) = self.comprehensive_loops.iter().position(|&n| n == 0) {
            return Err(OculaError::validation(format!(
                "comprehensive_loops[{i}] must be at least 1"
            )));
        }
        if let Some(order) = &self.comprehensive_order {
            if order.is_empty() {
                return Err(OculaError::validation("comprehensive_order is empty"));
            }
            if let Some(&bad) = order.iter().find(|&&i| i >= roster) {
                return Err(OculaError::validation(format!(
                    "comprehensive_order entry {bad} is out of range (roster has {roster})"
                )));
            }
        }
        if self.images.light.is_empty() || self.images.dark.is_empty() {
            return Err(OculaError::validation("image names must not be empty"));
        }
        Ok(())
    }

    /// Repeats for roster position `index`.
    pub fn loops_for(&self, index: usize) -> u32 {
        self.comprehensive_loops.get(index).copied().unwrap_or(1)
    }

    /// Comprehensive traversal order.
    pub fn order(&self) -> Vec<usize> {
        self.comprehensive_order
            .clone()
            .unwrap_or_else(|| (0..PATTERN_NAMES.len()).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
