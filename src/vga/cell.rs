//! One 16-bit text-mode cell: character code in bits 0-7, attribute in 8-15.

use super::color::ColorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScreenChar(u16);

impl ScreenChar {
    /// Space on the default attribute.
    pub const BLANK: ScreenChar = ScreenChar::new(b' ', ColorCode::DEFAULT);

    #[inline]
    pub const fn new(character: u8, color: ColorCode) -> Self {
        Self((character as u16) | (color.raw() as u16) << 8)
    }

    /// Encode a `char`, keeping only the low byte of its scalar value.
    #[inline]
    pub const fn from_char(c: char, color: ColorCode) -> Self {
        Self::new(c as u32 as u8, color)
    }

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn character(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn color(self) -> ColorCode {
        ColorCode::from_raw((self.0 >> 8) as u8)
    }
}

impl Default for ScreenChar {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Free-function form of [`ScreenChar::new`].
#[inline]
pub const fn encode_cell(character: u8, color: ColorCode) -> ScreenChar {
    ScreenChar::new(character, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga::color::Color;

    #[test]
    fn bit_layout_matches_hardware() {
        let cell = encode_cell(b'A', ColorCode::new(Color::Red, Color::Blue));
        // 'A' = 0x41, fg red = 0x4, bg blue = 0x1
        assert_eq!(cell.raw(), 0x1441);
        assert_eq!(cell.raw() & 0x00ff, 0x41);
        assert_eq!((cell.raw() >> 8) & 0x0f, 0x4);
        assert_eq!((cell.raw() >> 12) & 0x0f, 0x1);
    }

    #[test]
    fn decodes_every_byte_and_pair() {
        for c in 0..=u8::MAX {
            for fg in Color::ALL {
                for bg in Color::ALL {
                    let cell = encode_cell(c, ColorCode::new(fg, bg));
                    assert_eq!(cell.character(), c);
                    assert_eq!(cell.color().foreground(), fg);
                    assert_eq!(cell.color().background(), bg);
                }
            }
        }
    }

    #[test]
    fn wide_chars_truncate_to_low_byte() {
        let color = ColorCode::DEFAULT;
        assert_eq!(ScreenChar::from_char('\u{0141}', color).character(), 0x41);
        assert_eq!(ScreenChar::from_char('é', color).character(), 0xe9);
        assert_eq!(ScreenChar::from_char('\u{1f600}', color).character(), 0x00);
    }

    #[test]
    fn blank_is_space_on_default() {
        assert_eq!(ScreenChar::BLANK.raw(), 0x0720);
        assert_eq!(ScreenChar::default(), ScreenChar::BLANK);
    }
}
