use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;
use viz_viewer::{PopupVisibility, ViewCatalog, ViewerOptions, ViewerSnapshot};

use crate::app::{handle_input, App, ViewerAction};
use crate::ui;

/// Run the viewer without a UI and print the resulting state
pub fn run_headless(options: ViewerOptions, steps: &[ViewerAction], json: bool) -> Result<()> {
    let mut app = App::new(options);
    app.page_ready()?;

    for step in steps {
        app.perform(*step)?;
    }

    let snapshot = app.viewer.snapshot()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_headless_text(&snapshot, app.viewer.catalog()));
    }

    Ok(())
}

fn render_headless_text(snapshot: &ViewerSnapshot, catalog: &ViewCatalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nVisualization Viewer");
    let _ = writeln!(out, "====================");
    let _ = writeln!(
        out,
        "Current view: {} ({})",
        snapshot.label, snapshot.position
    );
    let popup = match snapshot.overlay {
        PopupVisibility::Visible => "visible",
        PopupVisibility::Hidden => "hidden",
    };
    let _ = writeln!(out, "Intro popup: {popup}");

    let _ = writeln!(out, "\nViews:");
    for (index, view) in catalog.iter().enumerate() {
        let marker = if index == snapshot.index { '*' } else { '-' };
        let _ = writeln!(out, "{marker} {}: {}", view.id(), view.label());
    }

    out
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key)?,
            // Resizes are picked up by the next draw
            _ => {}
        }
    }

    Ok(())
}
