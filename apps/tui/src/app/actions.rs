use clap::ValueEnum;

/// Things a user can ask the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewerAction {
    /// Close the intro popup
    Close,
    /// Show the previous view
    #[value(alias = "prev")]
    Previous,
    /// Show the next view
    Next,
}
