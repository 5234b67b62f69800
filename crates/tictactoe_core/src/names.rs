//! Player display names.
//!
//! Names come from free-form user input. Angle brackets are stripped and
//! the result is capped at [`MAX_NAME_CHARS`] characters. An empty result
//! falls back to the seat's default name.

use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Maximum number of characters kept from a display name.
pub const MAX_NAME_CHARS: usize = 20;

/// Characters that never survive sanitization.
const DISALLOWED: [char; 2] = ['<', '>'];

/// Strips disallowed characters and truncates to [`MAX_NAME_CHARS`].
///
/// Stripping happens before truncation, so `"<<<<a"` keeps its `a`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !DISALLOWED.contains(c))
        .take(MAX_NAME_CHARS)
        .collect()
}

/// Returns the name used for `mark` when none was given.
pub fn default_name(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "Player 1",
        Mark::O => "Player 2",
    }
}

/// The display names of both seats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name of the player holding X.
    x: String,
    /// Name of the player holding O.
    o: String,
}

impl PlayerNames {
    /// Builds names from raw input, sanitizing each and substituting
    /// defaults for empty results.
    #[instrument(skip_all)]
    pub fn from_raw(raw_x: &str, raw_o: &str) -> Self {
        let names = Self {
            x: resolve(raw_x, Mark::X),
            o: resolve(raw_o, Mark::O),
        };
        debug!(x = %names.x, o = %names.o, "Resolved player names");
        names
    }

    /// Returns the name for `mark`.
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: default_name(Mark::X).to_string(),
            o: default_name(Mark::O).to_string(),
        }
    }
}

fn resolve(raw: &str, mark: Mark) -> String {
    let clean = sanitize(raw);
    if clean.is_empty() {
        default_name(mark).to_string()
    } else {
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_angle_brackets() {
        assert_eq!(sanitize("<script>"), "script");
        assert_eq!(sanitize("a<b>c"), "abc");
    }

    #[test]
    fn test_truncates_to_twenty() {
        let raw = "a".repeat(25);
        assert_eq!(sanitize(&raw), "a".repeat(20));
    }

    #[test]
    fn test_strip_before_truncate() {
        let raw = format!("{}{}", "<".repeat(10), "b".repeat(20));
        assert_eq!(sanitize(&raw), "b".repeat(20));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let raw = "é".repeat(30);
        assert_eq!(sanitize(&raw).chars().count(), 20);
    }

    #[test]
    fn test_empty_after_sanitize_uses_default() {
        let names = PlayerNames::from_raw("<>", "");
        assert_eq!(names.x(), "Player 1");
        assert_eq!(names.o(), "Player 2");
    }

    #[test]
    fn test_whitespace_is_kept() {
        let names = PlayerNames::from_raw("  ", "Bo");
        assert_eq!(names.get(Mark::X), "  ");
        assert_eq!(names.get(Mark::O), "Bo");
    }
}
