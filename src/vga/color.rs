//! Text-mode color attributes.
//!
//! One attribute byte per cell: foreground index in bits 0-3, background
//! index in bits 4-7. Indices are never validated at runtime; an index above
//! 15 bleeds into the neighbouring nibble.

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// All sixteen palette entries, ordered by index.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightBrown,
        Color::White,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Palette entry for the low nibble of `index`.
    #[inline]
    pub const fn from_nibble(index: u8) -> Self {
        Self::ALL[(index & 0x0f) as usize]
    }
}

/// Packed foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Light grey on black, the power-on default of the text console.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGrey, Color::Black);

    pub const fn new(fg: Color, bg: Color) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    /// Combine raw palette indices without range checks.
    ///
    /// Both indices must be in `0..=15`. Larger values are shifted and OR-ed
    /// as-is, so a large foreground corrupts the background nibble and the
    /// high bits of a large background are lost.
    #[inline]
    pub fn from_indices(fg: u8, bg: u8) -> Self {
        debug_assert!(fg <= 0x0f, "foreground index {} out of range", fg);
        debug_assert!(bg <= 0x0f, "background index {} out of range", bg);
        Self(fg | bg << 4)
    }

    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn foreground_index(self) -> u8 {
        self.0 & 0x0f
    }

    #[inline]
    pub const fn background_index(self) -> u8 {
        self.0 >> 4
    }

    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.foreground_index())
    }

    pub const fn background(self) -> Color {
        Color::from_nibble(self.background_index())
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Free-function form of [`ColorCode::new`].
#[inline]
pub const fn encode_color(fg: Color, bg: Color) -> ColorCode {
    ColorCode::new(fg, bg)
}
