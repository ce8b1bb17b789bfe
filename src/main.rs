use clap::Parser as ClapParser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::{
    io::{stdout, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use legal_lens::{
    app::{App, Focus},
    backend::{HttpBackend, DEFAULT_ENDPOINT},
    config::ClientConfig,
    controller::{Controller, RequestState},
    logging, report, ui,
};

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(100);

/// Guard struct that ensures terminal cleanup on all exit paths (including panics).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = stdout().execute(DisableBracketedPaste);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

#[derive(ClapParser)]
#[command(name = "legal-lens", version)]
#[command(about = "Check a Terms of Service agreement against a trust-scoring analysis service")]
struct Cli {
    /// File with the legal text to pre-fill (`-` reads stdin)
    file: Option<PathBuf>,

    /// Analysis endpoint
    #[arg(long, env = "LEGAL_LENS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Analyze FILE once and print a text report instead of opening the TUI
    #[arg(long, requires = "file")]
    print: bool,

    /// Like --print, but emit the report as JSON
    #[arg(long, requires = "file", conflicts_with = "print")]
    json: bool,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match ClientConfig::new(&cli.endpoint) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let one_shot = cli.print || cli.json;
    let logged = match (&cli.log_file, one_shot) {
        (Some(path), _) => logging::init_file(path),
        (None, true) => logging::init_stderr(),
        (None, false) => Ok(()),
    };
    if let Err(e) = logged {
        eprintln!("Warning: logging disabled: {e}");
    }

    let text = match &cli.file {
        Some(path) => match read_input(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => String::new(),
    };

    let mut controller = Controller::new(HttpBackend::new(&config)?);
    controller.set_text(text);

    if one_shot {
        run_once(&mut controller, cli.json)
    } else {
        run_tui(App::new(controller, config.endpoint_url))
    }
}

/// Single blocking analysis; exit status 1 on any failure.
fn run_once(controller: &mut Controller<HttpBackend>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = match controller.submit() {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match state {
        RequestState::Succeeded(result) => {
            if json {
                println!("{}", report::render_json(result)?);
            } else {
                print!("{}", report::render_text(result));
            }
            Ok(())
        }
        RequestState::Failed(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
        RequestState::Idle | RequestState::Loading => Ok(()),
    }
}

fn run_tui(mut app: App<HttpBackend>) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let _guard = TerminalGuard; // Cleanup guaranteed on drop
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(&mut app, key) {
                        break;
                    }
                }
                Event::Paste(data) if app.alert().is_none() => {
                    if app.focus() == Focus::Input {
                        app.insert_str(&data);
                    }
                }
                _ => {}
            }
        }

        app.poll();
        app.advance_tick();
    }

    Ok(())
}

/// Returns false when the app should quit.
fn handle_key(app: &mut App<HttpBackend>, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Handle Ctrl+C / Ctrl+Q globally
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return false;
    }

    // Alert is modal
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return true;
    }

    if app.show_help() {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            app.toggle_help();
        }
        return true;
    }

    match (app.focus(), key.code) {
        // Global
        (_, KeyCode::F(1)) => app.toggle_help(),
        (_, KeyCode::Tab) => app.toggle_focus(),
        (_, KeyCode::Char('s')) if ctrl => app.submit(),

        // Input
        (Focus::Input, KeyCode::Char('l')) if ctrl => app.clear_input(),
        (Focus::Input, KeyCode::Char(c)) if !ctrl => app.insert_char(c),
        (Focus::Input, KeyCode::Enter) => app.insert_char('\n'),
        (Focus::Input, KeyCode::Backspace) => app.backspace(),

        // Results
        (Focus::Results, KeyCode::Char('j') | KeyCode::Down) => app.scroll_down(),
        (Focus::Results, KeyCode::Char('k') | KeyCode::Up) => app.scroll_up(),
        (Focus::Results, KeyCode::Char('i')) => app.toggle_focus(),
        (Focus::Results, KeyCode::Esc | KeyCode::Char('q')) => return false,

        _ => {}
    }

    true
}
