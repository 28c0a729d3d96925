//! Page configuration with defaults and validated JSON overrides.
//!
//! Pages may embed a `<script type="application/json" id="page-config">`
//! block; the host passes its text to [`PageConfig::from_json`]. Every field
//! is optional and falls back to the values in [`crate::consts`].

use serde::Deserialize;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub theme_storage_key: String,
    pub theme_transition_ms: u64,
    pub theme_transition_css: String,
    pub submit_delay_ms: u64,
    pub submit_pending_label: String,
    pub submit_success_message: String,
    pub modal_enter_delay_ms: u64,
    pub modal_exit_delay_ms: u64,
    pub header_hide_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub section_stagger_ms: u64,
    pub card_stagger_ms: u64,
    pub typing_start_delay_ms: u64,
    pub title_cadence_ms: u64,
    pub tagline_pause_ms: u64,
    pub tagline_cadence_ms: u64,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            theme_transition_ms: consts::THEME_TRANSITION_MS,
            theme_transition_css: consts::THEME_TRANSITION_CSS.to_owned(),
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            submit_pending_label: consts::SUBMIT_PENDING_LABEL.to_owned(),
            submit_success_message: consts::SUBMIT_SUCCESS_MESSAGE.to_owned(),
            modal_enter_delay_ms: consts::MODAL_ENTER_DELAY_MS,
            modal_exit_delay_ms: consts::MODAL_EXIT_DELAY_MS,
            header_hide_threshold_px: consts::HEADER_HIDE_THRESHOLD_PX,
            back_to_top_threshold_px: consts::BACK_TO_TOP_THRESHOLD_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            section_stagger_ms: consts::SECTION_STAGGER_MS,
            card_stagger_ms: consts::CARD_STAGGER_MS,
            typing_start_delay_ms: consts::TYPING_START_DELAY_MS,
            title_cadence_ms: consts::TITLE_CADENCE_MS,
            tagline_pause_ms: consts::TAGLINE_PAUSE_MS,
            tagline_cadence_ms: consts::TAGLINE_CADENCE_MS,
            log_level: consts::DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override document and validate the merged result.
    ///
    /// Keys are camelCase (`submitDelayMs`, `revealThreshold`, ...). Unknown
    /// keys are rejected so typos do not silently fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(invalid("themeStorageKey", "must not be empty"));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(invalid("revealThreshold", format!("{} is outside (0, 1]", self.reveal_threshold)));
        }
        if self.title_cadence_ms == 0 {
            return Err(invalid("titleCadenceMs", "must be greater than zero"));
        }
        if self.tagline_cadence_ms == 0 {
            return Err(invalid("taglineCadenceMs", "must be greater than zero"));
        }
        if self.header_hide_threshold_px < 0.0 || self.back_to_top_threshold_px < 0.0 {
            return Err(invalid("scroll thresholds", "must not be negative"));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(invalid("logLevel", format!("unknown level '{}'", self.log_level)));
        }
        Ok(())
    }

    /// Console log level; `info` if the configured name does not parse.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
