use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{MenuItem, MenuState};

/// Outer menu size: the widest label plus padding, inside a border
const MENU_WIDTH: u16 = 10;
const MENU_HEIGHT: u16 = MenuItem::ALL.len() as u16 + 2;

/// Where the menu lands: anchored at the invoking click, shifted left/up
/// as needed to stay inside the terminal.
pub fn menu_rect(menu: &MenuState, area: Rect) -> Rect {
    let x = menu.column.min(area.right().saturating_sub(MENU_WIDTH));
    let y = menu.row.min(area.bottom().saturating_sub(MENU_HEIGHT));
    Rect::new(x, y, MENU_WIDTH, MENU_HEIGHT).intersection(area)
}

/// The menu entry under the given cell, if any
pub fn item_at(menu: &MenuState, area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = menu_rect(menu, area).inner(Margin::new(1, 1));
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let index = (row - inner.y) as usize;
    (index < MenuItem::ALL.len()).then_some(index)
}

pub fn render(frame: &mut Frame, menu: &MenuState, area: Rect) {
    let rect = menu_rect(menu, area);
    if rect.width < MENU_WIDTH || rect.height < MENU_HEIGHT {
        // terminal too small for the pop-up
        return;
    }

    frame.render_widget(Clear, rect);

    let lines: Vec<Line> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == menu.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!(" {:<7}", item.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
