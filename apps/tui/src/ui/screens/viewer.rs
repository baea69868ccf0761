use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn render_viewer(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_view_tabs(app, f, layout[0]);
    render_container(app, f, layout[1]);
    render_footer(f, layout[2]);
}

fn render_view_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = app
        .viewer
        .catalog()
        .iter()
        .map(|view| TextLine::from(view.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title("Visualizations")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(app.viewer.current_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_container(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Vertically centre the single heading line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Percentage(50),
        ])
        .split(inner);

    let heading = Paragraph::new(TextLine::from(Span::styled(
        app.heading(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(heading, rows[1]);
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    let hints = TextLine::from(vec![
        Span::styled("←/→", Style::default().fg(Color::Gray)),
        Span::raw(" switch view  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::raw(" close intro  "),
        Span::styled("q", Style::default().fg(Color::Gray)),
        Span::raw(" quit"),
    ]);

    f.render_widget(
        Paragraph::new(Text::from(hints)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use viz_viewer::ViewerOptions;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| render_viewer(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn container_shows_only_current_heading() {
        let mut app = App::new(ViewerOptions::default());
        app.page_ready().unwrap();
        app.perform(crate::app::ViewerAction::Next).unwrap();

        let text = screen_text(&app);
        // Tabs list every label once; the container adds the current one
        assert_eq!(text.matches("Scatter Plot").count(), 2);
        assert_eq!(text.matches("Bubble Chart").count(), 1);
    }
}
