use crate::error::ActionError;
use serde::{Deserialize, Serialize};

/// Discrete move. The integer convention `0=up 1=right 2=down 3=left` only
/// exists at the edges, through `index` and `TryFrom<i64>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    pub fn index(self) -> u8 {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
        }
    }

    /// Unit direction in image coordinates (y grows downwards).
    pub fn delta(self) -> (i64, i64) {
        match self {
            Action::Up => (0, -1),
            Action::Right => (1, 0),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
        }
    }

    /// WASD keys, case-insensitive, or the digits of the integer convention.
    pub fn from_key(key: char) -> Result<Self, ActionError> {
        match key.to_ascii_lowercase() {
            'w' => Ok(Action::Up),
            'd' => Ok(Action::Right),
            's' => Ok(Action::Down),
            'a' => Ok(Action::Left),
            digit @ '0'..='9' => Action::try_from(i64::from(digit as u8 - b'0'))
                .map_err(|_| ActionError::UnknownKey(key)),
            _ => Err(ActionError::UnknownKey(key)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = ActionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            other => Err(ActionError::Unknown(other)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an action script such as `"dddd s a"` or `"1,1,2"`. Whitespace and
/// commas separate nothing and are skipped.
pub fn parse_actions(script: &str) -> Result<Vec<Action>, ActionError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Action::from_key)
        .collect()
}
