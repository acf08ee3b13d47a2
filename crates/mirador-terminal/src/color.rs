//! Terminal color capability detection and conversion.

use mirador_core::Color;

/// How colors are emitted to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit RGB escape sequences.
    TrueColor,
    /// 256-color palette approximation.
    Ansi256,
    /// No color output at all.
    Mono,
}

impl ColorMode {
    /// Detect the terminal's color capability from the environment.
    ///
    /// `NO_COLOR` forces mono; `COLORTERM=truecolor|24bit` enables RGB;
    /// anything else falls back to the 256-color palette.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Mono;
        }
        match std::env::var("COLORTERM") {
            Ok(v) if v.contains("truecolor") || v.contains("24bit") => Self::TrueColor,
            _ => Self::Ansi256,
        }
    }
}

/// Convert a core color into a crossterm color under `mode`.
///
/// Returns `None` in mono mode; the renderer then skips color sequences
/// entirely.
#[must_use]
pub fn to_crossterm(color: Color, mode: ColorMode) -> Option<crossterm::style::Color> {
    let (r, g, b) = (
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
    );
    match mode {
        ColorMode::TrueColor => Some(crossterm::style::Color::Rgb { r, g, b }),
        ColorMode::Ansi256 => Some(crossterm::style::Color::AnsiValue(nearest_ansi256(r, g, b))),
        ColorMode::Mono => None,
    }
}

/// Nearest entry in the xterm 256-color palette.
fn nearest_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // Grayscale ramp (232-255) when the channels are close together.
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < 10 {
        let gray = u16::from(r) + u16::from(g) + u16::from(b);
        let level = (gray / 3) as u8;
        if level < 8 {
            return 16; // black corner of the cube
        }
        if level > 248 {
            return 231; // white corner of the cube
        }
        return 232 + (level - 8) / 10;
    }
    // 6x6x6 color cube (16-231).
    let quantize = |c: u8| -> u8 {
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    };
    16 + 36 * quantize(r) + 6 * quantize(g) + quantize(b)
}
