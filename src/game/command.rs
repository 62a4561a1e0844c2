//! Turning a line of player input into an [`Action`].

use crate::game::world::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `move <direction>`; None when the word after `move` is not a direction.
    Move(Option<Direction>),
    Examine,
    Use(String),
    Hide,
    Unknown,
}

/// Parse an action line. Input is trimmed and lower-cased first.
pub fn parse_action(raw: &str) -> Action {
    let line = raw.trim().to_lowercase();
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Action::Unknown;
    };
    match verb {
        "move" => match tokens.next() {
            Some(word) => Action::Move(Direction::parse(word)),
            None => Action::Unknown,
        },
        "examine" if tokens.next().is_none() => Action::Examine,
        "hide" if tokens.next().is_none() => Action::Hide,
        "use" => {
            let item = tokens.collect::<Vec<_>>().join(" ");
            if item.is_empty() {
                Action::Unknown
            } else {
                Action::Use(item)
            }
        }
        _ => Action::Unknown,
    }
}
