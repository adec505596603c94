use macroquad::prelude::KeyCode;
use microuav_core::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Action),
    Reset,
    TogglePause,
    Quit,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::W | KeyCode::Up => Command::Move(Action::Up),
        KeyCode::D | KeyCode::Right => Command::Move(Action::Right),
        KeyCode::S | KeyCode::Down => Command::Move(Action::Down),
        KeyCode::A | KeyCode::Left => Command::Move(Action::Left),
        KeyCode::R => Command::Reset,
        KeyCode::Space => Command::TogglePause,
        KeyCode::Q | KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Pause only blocks movement; reset and quit still work.
#[derive(Debug, Default)]
pub struct InputState {
    pub paused: bool,
}

impl InputState {
    /// Returns the action to apply this tick, if any, and whether to quit.
    pub fn handle(&mut self, command: Command) -> (Option<Command>, bool) {
        match command {
            Command::Quit => (None, true),
            Command::TogglePause => {
                self.paused = !self.paused;
                (None, false)
            }
            Command::Move(_) if self.paused => (None, false),
            other => (Some(other), false),
        }
    }
}
