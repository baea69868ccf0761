mod app;
mod cli;
mod config;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Logging comes up before config so parse errors reach the subscriber
    init_logging(config::debug_requested());
    let config = config::init_app_config()?;

    let options = config.viewer_options();

    // Piped output or an explicit request gets the headless report
    if args.headless || !is_terminal() {
        return event::run_headless(options, &args.steps, args.json);
    }

    let mut app = App::new(options);

    // The terminal is the page; it is ready once the app state exists
    app.page_ready()?;
    for action in &args.steps {
        app.perform(*action)?;
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
