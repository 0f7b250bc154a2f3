// Shrthnd Key Types
// Canonical QWERTY key positions and raw hook events

use std::fmt;

/// Canonical key positions in row-major, left-to-right order.
///
/// Reverse lookups that could match several positions are resolved by
/// this enumeration order, first match wins.
pub const CANONICAL_POSITIONS: &[char] = &[
    // Row 1
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '[', ']', '\\',
    // Row 2
    'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\'',
    // Row 3
    'z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/',
];

/// A physical key slot, named by the glyph it carries on a US QWERTY board.
///
/// A position is independent of the glyph the active layout produces for
/// it. Non-printable keys (space, enter, backspace) are never positions;
/// they arrive as their own [`KeyEvent`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition(char);

impl KeyPosition {
    /// Look up the position whose canonical QWERTY glyph is `glyph`.
    ///
    /// Input is case-folded. Glyphs outside the canonical set (digits,
    /// most symbols, non-Latin characters) have no position.
    pub fn from_qwerty(glyph: char) -> Option<Self> {
        let folded = fold_char(glyph);
        if CANONICAL_POSITIONS.contains(&folded) {
            Some(Self(folded))
        } else {
            None
        }
    }

    /// The canonical QWERTY glyph printed on this key slot.
    pub fn qwerty_glyph(&self) -> char {
        self.0
    }
}

impl fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case-fold a character to its single lowercase form.
///
/// Characters whose lowercase expansion is not a single char are kept
/// as-is; none of those participate in the canonical position set.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// A raw event as delivered by a QWERTY-reporting global key hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character, spelled the way the OS reported it
    /// (QWERTY-positionally).
    Char(char),
    Space,
    Enter,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_qwerty_letter() {
        let pos = KeyPosition::from_qwerty('y').unwrap();
        assert_eq!(pos.qwerty_glyph(), 'y');
    }

    #[test]
    fn test_position_case_folds() {
        assert_eq!(
            KeyPosition::from_qwerty('Y'),
            KeyPosition::from_qwerty('y')
        );
    }

    #[test]
    fn test_position_for_punctuation_keys() {
        assert!(KeyPosition::from_qwerty(';').is_some());
        assert!(KeyPosition::from_qwerty('\'').is_some());
        assert!(KeyPosition::from_qwerty('[').is_some());
    }

    #[test]
    fn test_no_position_for_unknown_glyphs() {
        assert!(KeyPosition::from_qwerty('1').is_none());
        assert!(KeyPosition::from_qwerty('ü').is_none());
        assert!(KeyPosition::from_qwerty(' ').is_none());
    }

    #[test]
    fn test_canonical_positions_are_unique() {
        for (i, a) in CANONICAL_POSITIONS.iter().enumerate() {
            assert!(!CANONICAL_POSITIONS[i + 1..].contains(a));
        }
    }
}
