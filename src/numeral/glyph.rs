//! Text forms of digit symbols

/// The flat-text form of a digit symbol
///
/// A numeral system whose symbol type implements this trait can parse
/// digits out of strings and render digit sequences back to strings.
/// Systems over other symbol types still work through the sequence
/// interfaces, using symbol equality alone.
pub trait Glyph {
    /// Canonical text of this symbol
    fn glyph(&self) -> String;
}

impl Glyph for char {
    fn glyph(&self) -> String {
        String::from(*self)
    }
}

/// Bytes render as the Unicode scalar of the same value
impl Glyph for u8 {
    fn glyph(&self) -> String {
        String::from(char::from(*self))
    }
}

impl Glyph for String {
    fn glyph(&self) -> String {
        self.clone()
    }
}

impl Glyph for &str {
    fn glyph(&self) -> String {
        (*self).to_string()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn char_glyph() {
        assert_eq!('7'.glyph(), "7");
        assert_eq!('ß'.glyph(), "ß");
    }

    #[test]
    fn byte_glyph_is_unicode_scalar() {
        assert_eq!(65u8.glyph(), "A");
        assert_eq!(0xFFu8.glyph(), "\u{00FF}");
    }

    #[test]
    fn string_glyphs() {
        assert_eq!(String::from("#042").glyph(), "#042");
        assert_eq!("ab".glyph(), "ab");
    }
}
