// Shrthnd Layout Transcoder
// QWERTY-positional spelling -> intended-layout spelling

use crate::key::KeyPosition;
use crate::layout::{self, LayoutError, LayoutTable, DEFAULT_LAYOUT};

/// Translates between what a QWERTY-reporting OS says was pressed and the
/// glyph the user intends under the active layout.
///
/// Transcoding is a pure function of (active layout, input); it carries no
/// per-call state, and a layout switch applies to all subsequent calls.
#[derive(Debug)]
pub struct LayoutTranscoder {
    table: &'static LayoutTable,
}

impl LayoutTranscoder {
    /// Create a transcoder for the named layout.
    pub fn new(layout_name: &str) -> Result<Self, LayoutError> {
        Ok(Self {
            table: layout::get(layout_name)?,
        })
    }

    /// Switch the active layout. Invalid names leave the state unchanged.
    pub fn set_layout(&mut self, layout_name: &str) -> Result<(), LayoutError> {
        self.table = layout::get(layout_name)?;
        Ok(())
    }

    /// Name of the currently active layout.
    pub fn layout_name(&self) -> &'static str {
        self.table.name()
    }

    /// The active layout table.
    pub fn table(&self) -> &'static LayoutTable {
        self.table
    }

    /// Map one QWERTY-reported glyph to the glyph intended under the
    /// active layout.
    ///
    /// Glyphs with no QWERTY key position (digits, control characters,
    /// already-layout-specific or non-Latin input) pass through unchanged.
    /// Case is preserved: uppercase input uppercases the resolved glyph,
    /// except where no single-char uppercase exists (ß stays ß).
    pub fn transcode_char(&self, c: char) -> char {
        if c.is_control() {
            return c;
        }
        let Some(position) = KeyPosition::from_qwerty(c) else {
            return c;
        };
        let resolved = self.table.resolve(position);
        if c.is_uppercase() {
            upper_single(resolved)
        } else {
            resolved
        }
    }

    /// Apply [`transcode_char`](Self::transcode_char) to every character.
    pub fn transcode_text(&self, text: &str) -> String {
        text.chars().map(|c| self.transcode_char(c)).collect()
    }
}

impl Default for LayoutTranscoder {
    fn default() -> Self {
        Self {
            table: layout::get(DEFAULT_LAYOUT).expect("default layout must exist"),
        }
    }
}

/// Uppercase a glyph when a single-char uppercase form exists,
/// otherwise keep it as-is.
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::CANONICAL_POSITIONS;

    #[test]
    fn test_qwerty_is_noop() {
        let t = LayoutTranscoder::new("qwerty").unwrap();
        assert_eq!(t.transcode_text("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn test_qwertz_swaps_y_z() {
        let t = LayoutTranscoder::new("qwertz").unwrap();
        assert_eq!(t.transcode_char('y'), 'z');
        assert_eq!(t.transcode_char('z'), 'y');
    }

    #[test]
    fn test_resolve_matches_transcode_for_every_position() {
        // For all layouts L and positions P, transcoding the canonical
        // glyph of P equals L.resolve(P).
        for name in layout::available_layouts() {
            let t = LayoutTranscoder::new(name).unwrap();
            let table = layout::get(name).unwrap();
            for glyph in CANONICAL_POSITIONS {
                let pos = KeyPosition::from_qwerty(*glyph).unwrap();
                assert_eq!(t.transcode_char(*glyph), table.resolve(pos), "layout {name}");
            }
        }
    }

    #[test]
    fn test_case_preserved() {
        let t = LayoutTranscoder::new("qwertz").unwrap();
        assert_eq!(t.transcode_char('Y'), 'Z');
        assert_eq!(t.transcode_char('Z'), 'Y');
    }

    #[test]
    fn test_uppercase_matches_upper_of_lowercase() {
        for name in layout::available_layouts() {
            let t = LayoutTranscoder::new(name).unwrap();
            for glyph in CANONICAL_POSITIONS {
                if !glyph.is_alphabetic() {
                    continue;
                }
                let upper_in = upper_single(*glyph);
                let expected = upper_single(t.transcode_char(*glyph));
                assert_eq!(t.transcode_char(upper_in), expected, "layout {name}");
            }
        }
    }

    #[test]
    fn test_unknown_glyphs_pass_through() {
        let t = LayoutTranscoder::new("qwertz").unwrap();
        assert_eq!(t.transcode_char('5'), '5');
        assert_eq!(t.transcode_char('ü'), 'ü');
        assert_eq!(t.transcode_char('é'), 'é');
        assert_eq!(t.transcode_char(' '), ' ');
    }

    #[test]
    fn test_control_chars_pass_through() {
        let t = LayoutTranscoder::new("adnw").unwrap();
        assert_eq!(t.transcode_text("a\nb\tc"), "h\np\tq");
    }

    #[test]
    fn test_switch_layout_applies_immediately() {
        let mut t = LayoutTranscoder::new("qwerty").unwrap();
        assert_eq!(t.transcode_char('y'), 'y');
        t.set_layout("qwertz").unwrap();
        assert_eq!(t.transcode_char('y'), 'z');
    }

    #[test]
    fn test_bad_layout_leaves_state_unchanged() {
        let mut t = LayoutTranscoder::new("workman").unwrap();
        let err = t.set_layout("bogus").unwrap_err();
        assert_eq!(err, LayoutError::UnknownLayout("bogus".to_string()));
        assert_eq!(t.layout_name(), "workman");
    }
}
