use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use tileslide_core::Direction;

/// A decoded player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the tile on this side of the empty slot
    Move(Direction),
    /// Leave the game
    Quit,
    /// A key with no binding
    Other,
}

/// Blocking source of player commands.
///
/// The terminal implementation blocks on a real key press; tests substitute
/// [`ScriptedInput`] to drive the game without a terminal.
pub trait InputSource {
    /// Block until the next command is available
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Reads commands from the terminal via crossterm
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Windows reports release events too
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
    }
}

/// Map a key event to a command. WASD and the arrow keys move; q, Esc and
/// Ctrl-C quit; everything else is unbound.
pub fn map_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => Command::Other,
    }
}

/// Queue-backed input source for tests and scripted play
pub struct ScriptedInput {
    queue: VecDeque<Command>,
}

impl ScriptedInput {
    /// Create a scripted source from a command sequence
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> io::Result<Command> {
        // An exhausted script quits rather than blocking forever
        Ok(self.queue.pop_front().unwrap_or(Command::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_maps_to_directions() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Command::Move(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Command::Move(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Command::Move(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Command::Move(Direction::Right));
    }

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Up)), Command::Move(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Down)), Command::Move(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Left)), Command::Move(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Right)), Command::Move(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), Command::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }

    #[test]
    fn test_unbound_key_is_other() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), Command::Other);
        assert_eq!(map_key(press(KeyCode::Tab)), Command::Other);
    }

    #[test]
    fn test_scripted_input_drains_then_quits() {
        let mut input = ScriptedInput::new([Command::Move(Direction::Up), Command::Other]);
        assert_eq!(input.next_command().unwrap(), Command::Move(Direction::Up));
        assert_eq!(input.next_command().unwrap(), Command::Other);
        assert_eq!(input.next_command().unwrap(), Command::Quit);
    }
}
