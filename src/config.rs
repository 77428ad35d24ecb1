/// Minimum window height or width in pixels
pub const MIN_FRAME: u32 = 50;

/// Default two-line date/time pattern: day and date on the first line,
/// 12-hour clock with seconds and zone on the second.
pub const DEFAULT_FORMAT: &str = "%a %-d %b %Y\n%-I:%M:%S %p %Z";

/// Preferred font name for the output text
pub const DEFAULT_FONT: &str = "Verdana";

/// Default point size for the output text
pub const DEFAULT_FONT_SIZE: u32 = 36;

/// An RGB color with each component in 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Requested window position and size in pixels.
///
/// Width and height are validated against MIN_FRAME when parsed; left and
/// top are accepted as given, so the window may sit outside the visible
/// area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// The parsed result of the command-line options, fixed for the lifetime
/// of the process and consumed by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw borders and the title around the panel
    pub show_borders: bool,
    /// Fill the whole terminal instead of the configured rect
    pub maximize: bool,
    /// strftime pattern for the displayed text; literal text passes through
    pub format_pattern: String,
    /// Requested font name, recorded as given
    pub font_name: String,
    /// Requested font point size, 10-999
    pub font_size: u32,
    /// Background color of the panel
    pub panel_color: Rgb,
    /// Foreground color of the displayed text
    pub text_color: Rgb,
    /// Window position and size when not maximized
    pub window: WindowRect,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_borders: true,
            maximize: false,
            format_pattern: DEFAULT_FORMAT.to_string(),
            font_name: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            panel_color: Rgb::new(224, 224, 255),
            text_color: Rgb::new(51, 51, 51),
            window: WindowRect {
                left: 100,
                top: 100,
                width: 400,
                height: 150,
            },
        }
    }
}
