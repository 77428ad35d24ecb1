use std::io;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use futures::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::time::interval;

use crate::clock::ClockFormatter;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::ui;

/// 0.100 seconds between display updates
const TIMER_DELAY: Duration = Duration::from_millis(100);

/// Entries of the pop-up menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Cancel,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Cancel, MenuItem::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Exit => "Exit",
        }
    }
}

/// An open pop-up menu: where it was invoked and which entry is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub column: u16,
    pub row: u16,
    pub selected: usize,
}

impl MenuState {
    pub fn anchored(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            selected: 0,
        }
    }
}

/// Main application state: the immutable configuration, the formatter, and
/// the text currently on screen.
pub struct App {
    config: DisplayConfig,
    formatter: ClockFormatter,
    /// Text currently displayed, compared against each tick's output
    text: String,
    /// Pop-up menu, when open
    menu: Option<MenuState>,
    /// Terminal area as of the last draw, for menu hit-testing
    viewport: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: DisplayConfig, formatter: ClockFormatter) -> Self {
        let text = formatter.format(Local::now());
        Self {
            config,
            formatter,
            text,
            menu: None,
            viewport: Rect::ZERO,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn menu(&self) -> Option<&MenuState> {
        self.menu.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main event loop until the user exits
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        let result = self.event_loop(terminal).await;
        execute!(io::stdout(), DisableMouseCapture)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut tick = interval(TIMER_DELAY);
        let mut events = EventStream::new();

        loop {
            let size = terminal.size()?;
            self.viewport = Rect::new(0, 0, size.width, size.height);
            terminal.draw(|frame| ui::render(frame, self))?;

            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                _ = tick.tick() => {
                    self.on_tick(Local::now());
                }
                event = events.next() => {
                    if let Some(Ok(event)) = event {
                        self.handle_event(event);
                    }
                }
            }
        }
    }

    /// One timer tick: recompute the text for the given instant and replace
    /// the displayed string only if it changed. Returns whether it did.
    pub fn on_tick(&mut self, now: DateTime<Local>) -> bool {
        let text = self.formatter.format(now);
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, like closing the window
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.menu.is_some() {
            match key.code {
                KeyCode::Esc => self.menu = None,
                KeyCode::Up | KeyCode::Char('k') => {
                    if let Some(menu) = &mut self.menu {
                        menu.selected = menu.selected.saturating_sub(1);
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if let Some(menu) = &mut self.menu {
                        menu.selected = (menu.selected + 1).min(MenuItem::ALL.len() - 1);
                    }
                }
                KeyCode::Enter => self.activate_menu(),
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
        }
    }

    /// Any mouse button press invokes the pop-up menu; a press while it is
    /// open either activates the entry under the cursor or dismisses it.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return;
        }

        match self.menu.take() {
            Some(menu) => {
                if let Some(selected) =
                    ui::menu::item_at(&menu, self.viewport, mouse.column, mouse.row)
                {
                    self.menu = Some(MenuState { selected, ..menu });
                    self.activate_menu();
                }
            }
            None => {
                self.menu = Some(MenuState::anchored(mouse.column, mouse.row));
            }
        }
    }

    fn activate_menu(&mut self) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        match MenuItem::ALL.get(menu.selected) {
            Some(MenuItem::Cancel) => {
                // the menu disappears by itself when we ignore this
            }
            Some(MenuItem::Exit) => self.should_quit = true,
            None => {
                // fault in program logic, not by the user
                tracing::error!(selected = menu.selected, "menu event from unknown entry");
            }
        }
    }
}
