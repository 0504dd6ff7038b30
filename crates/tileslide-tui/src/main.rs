mod app;
mod game;
mod input;
mod render;
mod theme;

use app::{App, AppAction};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::Game;
use input::{InputSource, TerminalInput};
use std::io::{self, Write};
use theme::Theme;

/// Classic 3x3 sliding-tile puzzle for the terminal
#[derive(Parser)]
#[command(name = "tileslide", version, about)]
struct Args {
    /// Number of random moves used to scramble the board
    #[arg(long, default_value_t = 100)]
    shuffle_moves: usize,

    /// Seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
    HighContrast,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::HighContrast => Theme::high_contrast(),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut app = App::new(
        Game::new(args.shuffle_moves, args.seed),
        args.theme.theme(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let mut input = TerminalInput;
    let result = run_app(&mut stdout, &mut app, &mut input);

    // Restore terminal
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<I: InputSource>(
    stdout: &mut io::Stdout,
    app: &mut App,
    input: &mut I,
) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        let command = input.next_command()?;
        match app.handle_command(command) {
            AppAction::Continue => {}
            AppAction::Quit => break,
        }
    }

    Ok(())
}
