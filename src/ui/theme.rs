use crossterm::style::Color;

/// Design tokens for the datehist CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - Every glyph has an ASCII fallback in `glyphs_ascii`
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod glyphs {
    /// Histogram bar segment
    pub const BAR: &str = "█";
    /// Separator between the summary fields
    pub const SEPARATOR: &str = "·";
}

pub mod glyphs_ascii {
    pub const BAR: &str = "#";
    pub const SEPARATOR: &str = "|";
}

/// Bar glyph for the detected terminal.
pub fn bar_glyph(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        glyphs::BAR
    } else {
        glyphs_ascii::BAR
    }
}

/// Summary separator for the detected terminal.
pub fn separator_glyph(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        glyphs::SEPARATOR
    } else {
        glyphs_ascii::SEPARATOR
    }
}
