pub mod menu;
pub mod panel;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::App;
use crate::config::DisplayConfig;

// Nominal pixel size of one terminal cell, used to map the configured
// window geometry onto the cell grid.
const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

/// Root render dispatcher
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    panel::render(frame, app, panel_area(app.config(), area));

    // Pop-up menu (on top of everything)
    if let Some(menu) = app.menu() {
        menu::render(frame, menu, area);
    }
}

/// The panel rectangle in terminal cells.
///
/// A maximized panel fills the terminal. Otherwise the configured pixel
/// rect is mapped to cells and clipped to the visible area; a rect placed
/// entirely outside the terminal renders nothing.
pub fn panel_area(config: &DisplayConfig, area: Rect) -> Rect {
    if config.maximize {
        return area;
    }
    let window = config.window;
    Rect::new(
        cells(window.left, CELL_WIDTH_PX),
        cells(window.top, CELL_HEIGHT_PX),
        cells(window.width, CELL_WIDTH_PX).max(1),
        cells(window.height, CELL_HEIGHT_PX).max(1),
    )
    .intersection(area)
}

fn cells(pixels: u32, pixels_per_cell: u32) -> u16 {
    (pixels / pixels_per_cell).try_into().unwrap_or(u16::MAX)
}
