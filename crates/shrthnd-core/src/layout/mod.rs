// Shrthnd Layout Tables
// Immutable per-layout position->glyph maps with precomputed inverse index

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::key::{fold_char, KeyPosition, CANONICAL_POSITIONS};

/// Name of the layout assumed when nothing else is configured or detected.
pub const DEFAULT_LAYOUT: &str = "qwerty";

/// Errors from the layout selection surface
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
}

/// An immutable keyboard layout: what glyph each physical position produces.
///
/// Positions missing from the table resolve to their own canonical QWERTY
/// character. The reverse index is built once at construction so per-keystroke
/// lookups stay O(1).
#[derive(Debug)]
pub struct LayoutTable {
    name: &'static str,
    keys: HashMap<KeyPosition, char>,
    inverse: HashMap<char, KeyPosition>,
    score: Option<f64>,
}

impl LayoutTable {
    fn from_builtin(builtin: &tables::BuiltinLayout) -> Self {
        let mut keys = HashMap::with_capacity(builtin.keys.len());
        for (position, glyph) in builtin.keys {
            let position = KeyPosition::from_qwerty(*position)
                .unwrap_or_else(|| panic!("layout {}: bad position {position:?}", builtin.name));
            keys.insert(position, *glyph);
        }

        // Inverse index over the full canonical set (identity fallback
        // included), in row-major order so ties go to the first position.
        let mut inverse = HashMap::with_capacity(CANONICAL_POSITIONS.len());
        for glyph in CANONICAL_POSITIONS {
            let position = KeyPosition::from_qwerty(*glyph)
                .unwrap_or_else(|| panic!("canonical glyph {glyph:?} has no position"));
            let produced = keys.get(&position).copied().unwrap_or(*glyph);
            inverse.entry(produced).or_insert(position);
        }

        Self {
            name: builtin.name,
            keys,
            inverse,
            score: builtin.score,
        }
    }

    /// The layout's registry name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Efficiency score, if one was ever computed for this layout.
    ///
    /// `None` means unscored; a layout scored at exactly 0.0 stays `Some`.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Glyph this layout produces for `position`.
    ///
    /// Positions the table does not mention fall back to their own
    /// canonical character.
    pub fn resolve(&self, position: KeyPosition) -> char {
        self.keys
            .get(&position)
            .copied()
            .unwrap_or_else(|| position.qwerty_glyph())
    }

    /// Position that produces `glyph` under this layout, if any.
    ///
    /// When several positions produce the same glyph, the first in
    /// canonical row-major order wins.
    pub fn position_of(&self, glyph: char) -> Option<KeyPosition> {
        self.inverse.get(&fold_char(glyph)).copied()
    }
}

fn registry() -> &'static Vec<LayoutTable> {
    static REGISTRY: OnceLock<Vec<LayoutTable>> = OnceLock::new();
    REGISTRY.get_or_init(|| tables::BUILTINS.iter().map(LayoutTable::from_builtin).collect())
}

/// Look up a layout by name (case-insensitive).
pub fn get(name: &str) -> Result<&'static LayoutTable, LayoutError> {
    registry()
        .iter()
        .find(|table| table.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LayoutError::UnknownLayout(name.to_string()))
}

/// Stable, enumerable set of layout names accepted by `set_layout`.
pub fn available_layouts() -> impl Iterator<Item = &'static str> {
    registry().iter().map(LayoutTable::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least_seven_layouts() {
        assert!(available_layouts().count() >= 7);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get("QWERTZ").unwrap().name(), "qwertz");
    }

    #[test]
    fn test_unknown_layout() {
        assert_eq!(
            get("neo2").unwrap_err(),
            LayoutError::UnknownLayout("neo2".to_string())
        );
    }

    #[test]
    fn test_qwertz_swaps_y_and_z() {
        let qwertz = get("qwertz").unwrap();
        let y = KeyPosition::from_qwerty('y').unwrap();
        let z = KeyPosition::from_qwerty('z').unwrap();
        assert_eq!(qwertz.resolve(y), 'z');
        assert_eq!(qwertz.resolve(z), 'y');
    }

    #[test]
    fn test_unmapped_position_resolves_to_identity() {
        // Hamlak defines no bracket keys; they keep their canonical glyph.
        let hamlak = get("hamlak").unwrap();
        let bracket = KeyPosition::from_qwerty('[').unwrap();
        assert_eq!(hamlak.resolve(bracket), '[');
    }

    #[test]
    fn test_position_of_inverts_resolve() {
        let qwertz = get("qwertz").unwrap();
        let pos = qwertz.position_of('ö').unwrap();
        assert_eq!(pos.qwerty_glyph(), ';');
        assert_eq!(qwertz.resolve(pos), 'ö');
    }

    #[test]
    fn test_position_of_tie_break_is_row_major() {
        // Hamlak produces 'y' at the position labeled 'h' (row 2) while the
        // canonical 'y' position produces 'j'; row-major order decides.
        let hamlak = get("hamlak").unwrap();
        assert_eq!(hamlak.position_of('y').unwrap().qwerty_glyph(), 'h');
    }

    #[test]
    fn test_scores_distinguish_unscored() {
        assert_eq!(get("qwertz").unwrap().score(), Some(525.23));
        assert_eq!(get("hamlak").unwrap().score(), None);
        assert_eq!(get("programmer_dvorak").unwrap().score(), None);
    }

    #[test]
    fn test_qwerty_is_identity() {
        let qwerty = get("qwerty").unwrap();
        for glyph in crate::key::CANONICAL_POSITIONS {
            let pos = KeyPosition::from_qwerty(*glyph).unwrap();
            assert_eq!(qwerty.resolve(pos), *glyph);
        }
    }
}
