use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::config::Rgb;

/// Render the date/time panel: background fill, optional borders, and the
/// display text centered both ways.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if area.is_empty() {
        return;
    }

    let config = app.config();
    let style = Style::default()
        .bg(color(config.panel_color))
        .fg(color(config.text_color));

    let mut block = Block::default().style(style);
    if config.show_borders {
        block = block
            .borders(Borders::ALL)
            .title(" Date Time Zone ")
            .title_alignment(Alignment::Center);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line_count = app.text().lines().count().max(1) as u16;
    let [center] = Layout::vertical([Constraint::Length(line_count)])
        .flex(Flex::Center)
        .areas(inner);

    let paragraph = Paragraph::new(app.text())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, center);
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.red, rgb.green, rgb.blue)
}
