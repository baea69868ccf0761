use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use viz_viewer::{ViewKind, ViewerOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub start_view: ViewKind,
    pub show_intro: bool,
}

impl AppConfig {
    /// Build the configuration from raw setting values, as read from the
    /// environment. Missing values fall back to the defaults.
    pub fn from_values(
        start_view: Option<&str>,
        show_intro: Option<&str>,
    ) -> color_eyre::eyre::Result<Self> {
        let start_view = match start_view.map(str::trim) {
            Some(value) if !value.is_empty() => value
                .parse::<ViewKind>()
                .map_err(|e| eyre!("Invalid VIZ_START_VIEW: {e}"))?,
            _ => ViewKind::BubbleChart,
        };

        Ok(Self {
            start_view,
            show_intro: show_intro.map_or(true, is_enabled),
        })
    }

    pub const fn viewer_options(&self) -> ViewerOptions {
        ViewerOptions {
            start_view: self.start_view,
            show_intro: self.show_intro,
        }
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let start_view = env::var("VIZ_START_VIEW").ok();
    let show_intro = env::var("VIZ_SHOW_INTRO").ok();

    AppConfig::from_values(start_view.as_deref(), show_intro.as_deref())
}

/// Whether debug logging was asked for, checked ahead of the full config.
pub fn debug_requested() -> bool {
    dotenv().ok();
    env::var("DEBUG").is_ok_and(|value| is_enabled(&value))
}

fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config.start_view, ViewKind::BubbleChart);
        assert!(config.show_intro);
    }

    #[test]
    fn reads_start_view_and_flags() {
        let config = AppConfig::from_values(Some("heatmap"), Some("off")).unwrap();
        assert_eq!(config.start_view, ViewKind::Heatmap);
        assert!(!config.show_intro);
    }

    #[test]
    fn blank_start_view_uses_default() {
        let config = AppConfig::from_values(Some("  "), None).unwrap();
        assert_eq!(config.start_view, ViewKind::BubbleChart);
    }

    #[test]
    fn unknown_start_view_is_rejected() {
        let error = AppConfig::from_values(Some("pieChart"), None).unwrap_err();
        assert!(error.to_string().contains("unknown view kind: pieChart"));
    }

    #[test]
    fn options_follow_config() {
        let config = AppConfig::from_values(Some("scatterPlot"), Some("no")).unwrap();
        let options = config.viewer_options();
        assert_eq!(options.start_view, ViewKind::ScatterPlot);
        assert!(!options.show_intro);
    }

    #[test]
    fn flag_values_switch_on_and_off() {
        assert!(is_enabled("1"));
        assert!(is_enabled("yes"));
        assert!(!is_enabled("0"));
        assert!(!is_enabled(" OFF "));
        assert!(!is_enabled(""));
    }
}
