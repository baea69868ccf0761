use clap::Parser;

use crate::app::ViewerAction;

#[derive(Debug, Parser)]
#[command(name = "viz_carousel", version, about = "Visualization carousel TUI")]
pub struct CliArgs {
    /// Print the viewer state and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless state as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// View to show first (bubbleChart, scatterPlot, heatmap)
    #[arg(long, value_name = "VIEW")]
    pub start: Option<String>,

    /// Start with the intro popup already closed
    #[arg(long = "no-intro")]
    pub no_intro: bool,

    /// Actions to apply after the first render, comma separated
    #[arg(long, value_enum, value_delimiter = ',', value_name = "ACTIONS")]
    pub steps: Vec<ViewerAction>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(view) = &self.start {
            std::env::set_var("VIZ_START_VIEW", view);
        }
        if self.no_intro {
            std::env::set_var("VIZ_SHOW_INTRO", "0");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_list() {
        let args =
            CliArgs::try_parse_from(["viz_carousel", "--steps", "next,prev,close"]).unwrap();
        assert_eq!(
            args.steps,
            [
                ViewerAction::Next,
                ViewerAction::Previous,
                ViewerAction::Close
            ]
        );
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(CliArgs::try_parse_from(["viz_carousel", "--steps", "jump"]).is_err());
    }

    #[test]
    fn defaults_to_interactive_mode() {
        let args = CliArgs::try_parse_from(["viz_carousel"]).unwrap();
        assert!(!args.headless);
        assert!(!args.no_intro);
        assert!(args.start.is_none());
        assert!(args.steps.is_empty());
    }
}
