use crate::navigation::{next_index, previous_index};

/// Arrow keys understood by a tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Previous,
    Next,
}

impl NavigationKey {
    /// Parse a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowUp" | "Left" | "Up" => Some(NavigationKey::Previous),
            "ArrowRight" | "ArrowDown" | "Right" | "Down" => Some(NavigationKey::Next),
            _ => None,
        }
    }

    /// Parse a legacy `KeyboardEvent.keyCode`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 | 38 => Some(NavigationKey::Previous),
            39 | 40 => Some(NavigationKey::Next),
            _ => None,
        }
    }

    pub fn target_index(&self, selected: usize, len: usize) -> usize {
        match self {
            NavigationKey::Previous => previous_index(selected, len),
            NavigationKey::Next => next_index(selected, len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(NavigationKey::from_key("ArrowLeft"), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key("ArrowUp"), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key("ArrowRight"), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key("ArrowDown"), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key("Enter"), None);
        assert_eq!(NavigationKey::from_key("a"), None);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(NavigationKey::from_key_code(37), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key_code(40), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key_code(13), None);
    }

    #[test]
    fn test_target_index() {
        assert_eq!(NavigationKey::Next.target_index(1, 2), 0);
        assert_eq!(NavigationKey::Previous.target_index(0, 2), 1);
    }
}
