use crate::app::{App, ScreenState};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io;
use tileslide_core::{Cell, Grid, Position, EMPTY_SYMBOL, SIZE};

/// Horizontal border line of the board
pub const BORDER: &str = "+---+---+---+";

/// Style class for one rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Tile sitting at its solved position
    Correct,
    /// Tile away from its solved position
    Misplaced,
    /// The empty slot
    Empty,
}

/// Describe one cell as a (text, style) pair. Pure function of the grid.
pub fn cell_span(grid: &Grid, pos: Position) -> (String, CellStyle) {
    match grid.cell(pos) {
        Cell::Empty => (format!(" {} ", EMPTY_SYMBOL), CellStyle::Empty),
        Cell::Tile(label) => {
            let style = if Grid::solved_label(pos) == Some(label) {
                CellStyle::Correct
            } else {
                CellStyle::Misplaced
            };
            (format!("{:>3}", label), style)
        }
    }
}

/// Describe the whole board as rows of styled cell spans. Pure function of
/// the grid; the painter below turns it into terminal commands.
pub fn board_spans(grid: &Grid) -> Vec<Vec<(String, CellStyle)>> {
    (0..SIZE)
        .map(|row| {
            (0..SIZE)
                .map(|col| cell_span(grid, Position::new(row, col)))
                .collect()
        })
        .collect()
}

/// Paint the current screen
pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    execute!(stdout, Clear(ClearType::All))?;

    let x = 2;
    let y = 1;
    render_board(stdout, app, x, y)?;

    let below = y + 1 + 2 * SIZE as u16;
    render_status(stdout, app, x, below + 1)?;

    Ok(())
}

fn render_board(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.border),
        Print(BORDER)
    )?;

    for (row, spans) in board_spans(app.game.grid()).into_iter().enumerate() {
        let line_y = y + 1 + 2 * row as u16;
        execute!(stdout, MoveTo(x, line_y))?;

        for (text, style) in spans {
            let color = match style {
                CellStyle::Correct => theme.correct,
                CellStyle::Misplaced => theme.misplaced,
                CellStyle::Empty => theme.empty,
            };
            execute!(
                stdout,
                SetForegroundColor(theme.border),
                Print("|"),
                SetForegroundColor(color),
                Print(text)
            )?;
        }

        execute!(
            stdout,
            SetForegroundColor(theme.border),
            Print("|"),
            MoveTo(x, line_y + 1),
            Print(BORDER)
        )?;
    }

    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    match app.screen_state {
        ScreenState::Ready => {
            execute!(
                stdout,
                MoveTo(x, y),
                SetForegroundColor(theme.info),
                Print("Press any key to shuffle the board.")
            )?;
        }
        ScreenState::Shuffled => {
            execute!(
                stdout,
                MoveTo(x, y),
                SetForegroundColor(theme.info),
                Print("Shuffling complete. Press any key to begin.")
            )?;
        }
        ScreenState::Playing => {
            execute!(
                stdout,
                MoveTo(x, y),
                SetForegroundColor(theme.key),
                Print("Move with WASD or the arrow keys"),
                SetForegroundColor(theme.info),
                Print("  (q quits)")
            )?;
            if let Some(ref message) = app.message {
                execute!(
                    stdout,
                    MoveTo(x, y + 2),
                    SetForegroundColor(theme.error),
                    Print(message)
                )?;
            }
        }
        ScreenState::Won => {
            execute!(
                stdout,
                MoveTo(x, y),
                SetForegroundColor(theme.success),
                Print("Congratulations! You solved the puzzle!"),
                MoveTo(x, y + 2),
                SetForegroundColor(theme.info),
                Print("Press any key to exit.")
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileslide_core::Direction;

    #[test]
    fn test_solved_board_renders_all_correct() {
        let grid = Grid::new();
        for row in board_spans(&grid) {
            for (_, style) in row {
                assert_ne!(style, CellStyle::Misplaced);
            }
        }
    }

    #[test]
    fn test_displaced_tile_renders_misplaced() {
        let mut grid = Grid::new();
        assert!(grid.slide(Direction::Up));

        // Tile 6 slid down to (2, 2); its solved position is (1, 2).
        let (text, style) = cell_span(&grid, Position::new(2, 2));
        assert_eq!(text, "  6");
        assert_eq!(style, CellStyle::Misplaced);

        let (text, style) = cell_span(&grid, Position::new(1, 2));
        assert_eq!(text, " * ");
        assert_eq!(style, CellStyle::Empty);
    }

    #[test]
    fn test_untouched_tiles_stay_correct() {
        let mut grid = Grid::new();
        assert!(grid.slide(Direction::Up));

        let (_, style) = cell_span(&grid, Position::new(0, 0));
        assert_eq!(style, CellStyle::Correct);
    }

    #[test]
    fn test_board_spans_shape() {
        let spans = board_spans(&Grid::new());
        assert_eq!(spans.len(), SIZE);
        for row in &spans {
            assert_eq!(row.len(), SIZE);
            for (text, _) in row {
                assert_eq!(text.chars().count(), 3);
            }
        }
    }
}
