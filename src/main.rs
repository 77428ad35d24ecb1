use std::process::ExitCode;

use clockpane::{
    app::App,
    cli::{self, Invocation},
    clock::ClockFormatter,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match cli::parse_args(&args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            eprintln!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    // Enable UTF-8 output on Windows
    #[cfg(windows)]
    {
        enable_utf8_console();
    }

    // A pattern the formatting engine rejects never reaches the screen
    let formatter = match ClockFormatter::new(&config.format_pattern) {
        Ok(formatter) => formatter,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // The cell grid cannot honor font selection; record the request
    tracing::debug!(
        font = %config.font_name,
        size = config.font_size,
        "font request recorded, glyph rendering is up to the terminal emulator"
    );

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Run the app
    let mut terminal = ratatui::init();
    let mut app = App::new(config, formatter);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Enable UTF-8 console output on Windows
#[cfg(windows)]
fn enable_utf8_console() {
    use std::io::IsTerminal;
    if std::io::stdout().is_terminal() {
        unsafe {
            winapi::um::wincon::SetConsoleOutputCP(65001);
        }
    }
}
