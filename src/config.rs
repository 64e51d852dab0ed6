use std::{path::Path, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{GALLERY_SETTINGS, TIME_SETTINGS},
    error::{FolioError, Result},
};

/// Runtime tunables. Every field falls back to the compiled-in default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub open_delay_ms: u64,
    pub scroll_top_threshold_px: u32,
    pub row_height_px: u32,
    pub tag_display_limit: usize,
    pub smooth_scroll_ms: u64,
    pub tick_ms: u64,
    pub target_fps: u64,
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_delay_ms: GALLERY_SETTINGS.open_delay_ms,
            scroll_top_threshold_px: GALLERY_SETTINGS.scroll_top_threshold_px,
            row_height_px: GALLERY_SETTINGS.row_height_px,
            tag_display_limit: GALLERY_SETTINGS.tag_display_limit,
            smooth_scroll_ms: GALLERY_SETTINGS.smooth_scroll_ms,
            tick_ms: TIME_SETTINGS.tick_ms,
            target_fps: TIME_SETTINGS.target_fps,
            content_path: None,
        }
    }
}

impl Config {
    /// A missing file yields the defaults; a file that exists must parse.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| FolioError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |reason: &str| FolioError::Config {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if self.row_height_px == 0 {
            return Err(invalid("row_height_px must be positive"));
        }
        if self.target_fps == 0 {
            return Err(invalid("target_fps must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms must be positive"));
        }
        Ok(())
    }

    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn render_rate(&self) -> Duration {
        Duration::from_millis(1000 / self.target_fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, time::SystemTime};

    use super::*;

    fn unique_path(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}.json", prefix, now))
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = Config::load(&unique_path("folio_missing_config")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.open_delay(), Duration::from_millis(140));
        assert_eq!(config.scroll_top_threshold_px, 400);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let path = unique_path("folio_partial_config");
        fs::write(&path, r#"{ "open_delay_ms": 0, "tag_display_limit": 2 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.open_delay(), Duration::ZERO);
        assert_eq!(config.tag_display_limit, 2);
        assert_eq!(config.row_height_px, GALLERY_SETTINGS.row_height_px);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let path = unique_path("folio_bad_config");
        fs::write(&path, "{ open_delay_ms: ").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(FolioError::Config { .. })
        ));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_zero_row_height_is_rejected() {
        let path = unique_path("folio_zero_row_config");
        fs::write(&path, r#"{ "row_height_px": 0 }"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("row_height_px"));

        fs::remove_file(path).ok();
    }
}
