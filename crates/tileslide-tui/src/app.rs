use crate::game::{Game, MoveOutcome};
use crate::input::Command;
use crate::theme::Theme;

/// Result of handling a command
pub enum AppAction {
    Continue,
    Quit,
}

/// Current program phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Solved board shown, waiting for a key to shuffle
    Ready,
    /// Board scrambled, waiting for a key to start play
    Shuffled,
    /// Accepting moves
    Playing,
    /// Puzzle restored; any key exits
    Won,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Color theme
    pub theme: Theme,
    /// Transient notice shown under the board
    pub message: Option<String>,
}

impl App {
    /// Create an app showing the solved board, ready to shuffle
    pub fn new(game: Game, theme: Theme) -> Self {
        Self {
            game,
            screen_state: ScreenState::Ready,
            theme,
            message: None,
        }
    }

    /// Feed one command through the program state machine
    pub fn handle_command(&mut self, command: Command) -> AppAction {
        if command == Command::Quit {
            return AppAction::Quit;
        }

        match self.screen_state {
            ScreenState::Ready => {
                // Any key shuffles
                self.game.shuffle();
                self.screen_state = ScreenState::Shuffled;
                AppAction::Continue
            }
            ScreenState::Shuffled => {
                // A zero-strength shuffle can leave the board solved
                self.screen_state = if self.game.is_solved() {
                    ScreenState::Won
                } else {
                    ScreenState::Playing
                };
                AppAction::Continue
            }
            ScreenState::Playing => self.handle_move(command),
            ScreenState::Won => AppAction::Quit,
        }
    }

    fn handle_move(&mut self, command: Command) -> AppAction {
        match command {
            Command::Move(direction) => {
                self.message = None;
                match self.game.slide(direction) {
                    MoveOutcome::Moved => {
                        if self.game.is_solved() {
                            self.screen_state = ScreenState::Won;
                        }
                    }
                    MoveOutcome::OutOfBounds => {
                        self.message = Some("OUT OF BOUNDS! TRY AGAIN.".to_string());
                    }
                }
                AppAction::Continue
            }
            // Unbound keys take no action; the loop just asks again
            Command::Other => AppAction::Continue,
            Command::Quit => AppAction::Quit,
        }
    }
}
