/// Keys the editor reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    O,
    P,
    Up,
    Down,
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

impl Key {
    /// Parse a key name as typed on the command line ("w", "Up", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "w" => Self::W,
            "a" => Self::A,
            "s" => Self::S,
            "d" => Self::D,
            "q" => Self::Q,
            "e" => Self::E,
            "o" => Self::O,
            "p" => Self::P,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_case_insensitive() {
        assert_eq!(Key::from_name("W"), Some(Key::W));
        assert_eq!(Key::from_name("up"), Some(Key::Up));
        assert_eq!(Key::from_name(" Left "), Some(Key::Left));
    }

    #[test]
    fn unknown_key_name() {
        assert_eq!(Key::from_name("F13"), None);
        assert_eq!(Key::from_name("escape"), None);
    }
}
