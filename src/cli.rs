use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::{DisplayConfig, Rgb, WindowRect, MIN_FRAME};

/// What a successful pass over the command line asks the program to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Show the panel with this configuration
    Run(DisplayConfig),
    /// Print the usage summary and exit
    Help,
}

/// A fatal command-line error. Every variant aborts startup: the caller
/// prints the diagnostic, then the usage summary, and exits non-zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid background color: {0}")]
    BackgroundColor(String),

    #[error("Invalid foreground color: {0}")]
    ForegroundColor(String),

    #[error("Invalid font point size {0}")]
    FontSize(String),

    #[error("Invalid window position or size: {0}")]
    WindowRect(String),

    #[error("Option not recognized: {0}")]
    Unrecognized(String),
}

/// Grammar for `-p(r,g,b)` and `-t(r,g,b)`: three 1-4 digit fields in
/// parentheses, optional whitespace, nothing else. Partial matches are
/// rejected outright.
static COLOR_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\(\s*([0-9]{1,4})\s*,\s*([0-9]{1,4})\s*,\s*([0-9]{1,4})\s*\)\s*$").unwrap()
});

/// Grammar for `-w(left,top,width,height)`: four 1-5 digit fields
static RECT_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*\(\s*([0-9]{1,5})\s*,\s*([0-9]{1,5})\s*,\s*([0-9]{1,5})\s*,\s*([0-9]{1,5})\s*\)\s*$",
    )
    .unwrap()
});

/// Parse the command line into a configuration, or fail on the first
/// invalid token. Printing and process exit are left to the caller.
pub fn parse_args(args: &[String]) -> Result<Invocation, ParseError> {
    parse_with_platform(args, cfg!(windows))
}

/// Single left-to-right pass. Each token is self-contained: an option
/// letter plus an inline argument, no lookahead. The letter is matched on
/// the lowercased token; `/X` forms are accepted only when `mswin` is set.
fn parse_with_platform(args: &[String], mswin: bool) -> Result<Invocation, ParseError> {
    let mut config = DisplayConfig::default();

    for arg in args {
        let word = arg.to_lowercase();

        if word.is_empty() {
            // Empty parameters are common when invoked from scripts.
        } else if is_help_token(&word, mswin) {
            return Ok(Invocation::Help);
        } else if word == "-b" || word == "-b1" || (mswin && (word == "/b" || word == "/b1")) {
            config.show_borders = true;
        } else if word == "-b0" || (mswin && word == "/b0") {
            config.show_borders = false;
        } else if has_option_letter(&word, 'd', mswin) {
            // Accept anything; a bad pattern fails at formatter construction.
            config.format_pattern = option_rest(arg).to_string();
        } else if has_option_letter(&word, 'f', mswin) {
            // No check against installed fonts.
            config.font_name = option_rest(arg).to_string();
        } else if has_option_letter(&word, 'p', mswin) {
            config.panel_color = parse_color(option_rest(&word))
                .ok_or_else(|| ParseError::BackgroundColor(arg.clone()))?;
        } else if has_option_letter(&word, 's', mswin) {
            config.font_size = option_rest(&word)
                .parse::<u32>()
                .ok()
                .filter(|size| (10..=999).contains(size))
                .ok_or_else(|| ParseError::FontSize(arg.clone()))?;
        } else if has_option_letter(&word, 't', mswin) {
            config.text_color = parse_color(option_rest(&word))
                .ok_or_else(|| ParseError::ForegroundColor(arg.clone()))?;
        } else if has_option_letter(&word, 'w', mswin) {
            config.window = parse_window_rect(option_rest(&word))
                .ok_or_else(|| ParseError::WindowRect(arg.clone()))?;
        } else if word == "-x" || word == "-x1" || (mswin && (word == "/x" || word == "/x1")) {
            config.maximize = true;
        } else if word == "-x0" || (mswin && word == "/x0") {
            config.maximize = false;
        } else {
            return Err(ParseError::Unrecognized(arg.clone()));
        }
    }

    Ok(Invocation::Run(config))
}

/// `?` and `/?` are accepted on every platform; `/h` and `/help` only on
/// Windows.
fn is_help_token(word: &str, mswin: bool) -> bool {
    matches!(word, "?" | "-?" | "/?" | "-h" | "-help")
        || (mswin && matches!(word, "/h" | "/help"))
}

/// True when the token starts with `-X` (or `/X` on Windows) for the given
/// lowercase option letter.
fn has_option_letter(word: &str, letter: char, mswin: bool) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(c)) => c == letter,
        (Some('/'), Some(c)) => mswin && c == letter,
        _ => false,
    }
}

/// The inline argument after the two-character option prefix
fn option_rest(token: &str) -> &str {
    token
        .char_indices()
        .nth(2)
        .map(|(i, _)| &token[i..])
        .unwrap_or("")
}

fn parse_color(rest: &str) -> Option<Rgb> {
    let caps = COLOR_GRAMMAR.captures(rest)?;
    let red: u32 = caps[1].parse().ok()?;
    let green: u32 = caps[2].parse().ok()?;
    let blue: u32 = caps[3].parse().ok()?;
    if red > 255 || green > 255 || blue > 255 {
        return None;
    }
    Some(Rgb::new(red as u8, green as u8, blue as u8))
}

fn parse_window_rect(rest: &str) -> Option<WindowRect> {
    let caps = RECT_GRAMMAR.captures(rest)?;
    let rect = WindowRect {
        left: caps[1].parse().ok()?,
        top: caps[2].parse().ok()?,
        width: caps[3].parse().ok()?,
        height: caps[4].parse().ok()?,
    };
    // Only width and height are range-checked; left and top are accepted
    // as given once the pattern matches.
    if rect.width < MIN_FRAME || rect.height < MIN_FRAME {
        return None;
    }
    Some(rect)
}

/// Usage summary, printed to stderr on request or after any option error
pub fn usage() -> &'static str {
    "\nShow Current Date or Time in a Terminal Panel\n\
     \n\
     This is a full-terminal application.  You may give options on the command line:\n\
     \n\
     \x20 -? = -help = show summary of command-line syntax\n\
     \x20 -b0 = hide panel borders and title; use the full terminal if -x1 given\n\
     \x20 -b1 = -b = draw borders and title on the panel (default)\n\
     \x20 -d# = date and/or time format; see the chrono strftime description\n\
     \x20 -f# = text font name; example: -fVerdana\n\
     \x20 -p(#,#,#) = panel color or background in RGB; white is -p(255,255,255)\n\
     \x20 -s# = text font size from 10 to 999 points; example: -s24\n\
     \x20 -t(#,#,#) = text color or foreground in RGB; black is -t(0,0,0)\n\
     \x20 -w(#,#,#,#) = normal window position: left, top, width, height;\n\
     \x20     example: -w(50,50,700,500)\n\
     \x20 -x0 = normal or regular window, don't maximize (default)\n\
     \x20 -x1 = -x = maximize the panel; full screen if -b0 given\n\
     \n\
     Options containing spaces or punctuation may need to be quoted according to\n\
     your system's command syntax."
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FORMAT, MIN_FRAME};

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    /// Parse on a non-Windows platform, expecting a configuration
    fn parsed(tokens: &[&str]) -> DisplayConfig {
        match parse_with_platform(&args(tokens), false) {
            Ok(Invocation::Run(config)) => config,
            other => panic!("expected configuration, got {:?}", other),
        }
    }

    fn parse_err(tokens: &[&str]) -> ParseError {
        match parse_with_platform(&args(tokens), false) {
            Err(err) => err,
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn no_arguments_yields_defaults() {
        assert_eq!(parsed(&[]), DisplayConfig::default());
    }

    #[test]
    fn parsing_is_deterministic() {
        let tokens = ["-s24", "-b0", "-p(1,2,3)", "-w(0,0,60,60)"];
        assert_eq!(parsed(&tokens), parsed(&tokens));
    }

    #[test]
    fn size_border_maximize_scenario() {
        let config = parsed(&["-s24", "-b0", "-x1"]);
        assert_eq!(config.font_size, 24);
        assert!(!config.show_borders);
        assert!(config.maximize);
        // everything else stays default
        assert_eq!(config.font_name, DisplayConfig::default().font_name);
        assert_eq!(config.window, DisplayConfig::default().window);
        assert_eq!(config.format_pattern, DEFAULT_FORMAT);
    }

    #[test]
    fn color_scenario() {
        let config = parsed(&["-p(0,0,0)", "-t(255,255,255)"]);
        assert_eq!(config.panel_color, Rgb::new(0, 0, 0));
        assert_eq!(config.text_color, Rgb::new(255, 255, 255));
    }

    #[test]
    fn last_occurrence_wins() {
        assert_eq!(parsed(&["-s20", "-s30"]).font_size, 30);
        assert!(parsed(&["-b0", "-b1"]).show_borders);
        assert!(!parsed(&["-x1", "-x0"]).maximize);
        assert_eq!(parsed(&["-fArial", "-fGeorgia"]).font_name, "Georgia");
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let config = parsed(&["", "-s24", "", ""]);
        assert_eq!(config.font_size, 24);
        assert_eq!(parsed(&["", ""]), DisplayConfig::default());
    }

    #[test]
    fn font_size_range() {
        assert_eq!(parsed(&["-s10"]).font_size, 10);
        assert_eq!(parsed(&["-s999"]).font_size, 999);
        assert_eq!(parse_err(&["-s9"]), ParseError::FontSize("-s9".into()));
        assert_eq!(parse_err(&["-s1000"]), ParseError::FontSize("-s1000".into()));
        assert_eq!(parse_err(&["-s"]), ParseError::FontSize("-s".into()));
        assert_eq!(parse_err(&["-sabc"]), ParseError::FontSize("-sabc".into()));
        assert_eq!(parse_err(&["-s-24"]), ParseError::FontSize("-s-24".into()));
    }

    #[test]
    fn color_component_range() {
        assert_eq!(parsed(&["-p(255,255,255)"]).panel_color, Rgb::new(255, 255, 255));
        assert_eq!(
            parse_err(&["-p(256,0,0)"]),
            ParseError::BackgroundColor("-p(256,0,0)".into())
        );
        assert_eq!(
            parse_err(&["-t(0,0,9999)"]),
            ParseError::ForegroundColor("-t(0,0,9999)".into())
        );
    }

    #[test]
    fn color_syntax() {
        assert_eq!(
            parse_err(&["-p(1,2)"]),
            ParseError::BackgroundColor("-p(1,2)".into())
        );
        assert_eq!(
            parse_err(&["-p(a,b,c)"]),
            ParseError::BackgroundColor("-p(a,b,c)".into())
        );
        // nothing may follow the closing parenthesis
        assert_eq!(
            parse_err(&["-p(1,2,3)x"]),
            ParseError::BackgroundColor("-p(1,2,3)x".into())
        );
        assert_eq!(
            parse_err(&["-t(1,2,3,4)"]),
            ParseError::ForegroundColor("-t(1,2,3,4)".into())
        );
    }

    #[test]
    fn color_whitespace_and_digit_width() {
        assert_eq!(parsed(&["-p( 12 , 34 , 56 )"]).panel_color, Rgb::new(12, 34, 56));
        // up to four digits per field, value still range-checked
        assert_eq!(parsed(&["-p(0001,002,3)"]).panel_color, Rgb::new(1, 2, 3));
        assert_eq!(
            parse_err(&["-p(00001,0,0)"]),
            ParseError::BackgroundColor("-p(00001,0,0)".into())
        );
    }

    #[test]
    fn window_rect_minimum_size() {
        // height below the 50 minimum
        assert_eq!(
            parse_err(&["-w(50,50,49,500)"]),
            ParseError::WindowRect("-w(50,50,49,500)".into())
        );
        let config = parsed(&["-w(50,50,50,50)"]);
        assert_eq!(
            config.window,
            WindowRect {
                left: 50,
                top: 50,
                width: 50,
                height: 50,
            }
        );
    }

    #[test]
    fn window_rect_left_top_unchecked() {
        // left and top have no range check once the pattern matches
        assert_eq!(parsed(&["-w(0,0,50,50)"]).window.left, 0);
        let config = parsed(&["-w(99999,99999,50,50)"]);
        assert_eq!(config.window.left, 99999);
        assert_eq!(config.window.top, 99999);
        assert!(config.window.width >= MIN_FRAME);
    }

    #[test]
    fn window_rect_syntax() {
        assert_eq!(
            parse_err(&["-w(1,2,3)"]),
            ParseError::WindowRect("-w(1,2,3)".into())
        );
        assert_eq!(
            parse_err(&["-w(100000,0,50,50)"]),
            ParseError::WindowRect("-w(100000,0,50,50)".into())
        );
        assert_eq!(parse_err(&["-w"]), ParseError::WindowRect("-w".into()));
    }

    #[test]
    fn format_and_font_keep_original_case() {
        assert_eq!(parsed(&["-d%H:%M"]).format_pattern, "%H:%M");
        assert_eq!(parsed(&["-D%p today"]).format_pattern, "%p today");
        assert_eq!(parsed(&["-fVERDANA"]).font_name, "VERDANA");
        assert_eq!(parsed(&["-d"]).format_pattern, "");
    }

    #[test]
    fn option_letter_is_case_insensitive() {
        assert_eq!(parsed(&["-S24"]).font_size, 24);
        assert!(!parsed(&["-B0"]).show_borders);
        assert!(parsed(&["-X1"]).maximize);
        assert_eq!(parsed(&["-P(4,5,6)"]).panel_color, Rgb::new(4, 5, 6));
    }

    #[test]
    fn unrecognized_tokens() {
        assert_eq!(parse_err(&["-bogus"]), ParseError::Unrecognized("-bogus".into()));
        assert_eq!(parse_err(&["-z"]), ParseError::Unrecognized("-z".into()));
        assert_eq!(parse_err(&["-b2"]), ParseError::Unrecognized("-b2".into()));
        assert_eq!(parse_err(&["-x2"]), ParseError::Unrecognized("-x2".into()));
        assert_eq!(parse_err(&["plain"]), ParseError::Unrecognized("plain".into()));
        // position in the argument list does not matter
        assert_eq!(
            parse_err(&["-s24", "-z"]),
            ParseError::Unrecognized("-z".into())
        );
        assert_eq!(
            parse_err(&["-z", "-s24"]),
            ParseError::Unrecognized("-z".into())
        );
    }

    #[test]
    fn help_tokens() {
        for token in ["?", "-?", "/?", "-h", "-help", "-HELP", "-H"] {
            assert_eq!(
                parse_with_platform(&args(&[token]), false),
                Ok(Invocation::Help),
                "token {token:?}"
            );
        }
        // help wins over anything that follows it
        assert_eq!(
            parse_with_platform(&args(&["-?", "-bogus"]), false),
            Ok(Invocation::Help)
        );
    }

    #[test]
    fn windows_only_help_tokens() {
        for token in ["/h", "/help"] {
            assert_eq!(
                parse_with_platform(&args(&[token]), true),
                Ok(Invocation::Help)
            );
            assert_eq!(
                parse_with_platform(&args(&[token]), false),
                Err(ParseError::Unrecognized(token.into()))
            );
        }
    }

    #[test]
    fn slash_options_are_windows_only() {
        match parse_with_platform(&args(&["/b0", "/s24", "/x1"]), true) {
            Ok(Invocation::Run(config)) => {
                assert!(!config.show_borders);
                assert_eq!(config.font_size, 24);
                assert!(config.maximize);
            }
            other => panic!("expected configuration, got {:?}", other),
        }
        assert_eq!(
            parse_with_platform(&args(&["/b0"]), false),
            Err(ParseError::Unrecognized("/b0".into()))
        );
        assert_eq!(
            parse_with_platform(&args(&["/s24"]), false),
            Err(ParseError::Unrecognized("/s24".into()))
        );
    }

    #[test]
    fn diagnostics_quote_the_original_token() {
        assert_eq!(
            parse_err(&["-P(300,0,0)"]).to_string(),
            "Invalid background color: -P(300,0,0)"
        );
        assert_eq!(
            parse_err(&["-S5"]).to_string(),
            "Invalid font point size -S5"
        );
        assert_eq!(
            parse_err(&["-w(1,1,1,1)"]).to_string(),
            "Invalid window position or size: -w(1,1,1,1)"
        );
        assert_eq!(
            parse_err(&["-nope"]).to_string(),
            "Option not recognized: -nope"
        );
    }
}
