//! Display colors authored as sRGB hex and converted to linear for shading.

use glam::Vec4;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color `{0}` must be #rgb or #rrggbb")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// An opaque 8-bit-per-channel sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`. At most one leading `#`.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(s.to_string()));
        match digits.len() {
            6 => Ok(Self::hex(packed?)),
            3 => {
                let v = packed?;
                let expand = |nibble: u32| (nibble * 0x11) as u8;
                Ok(Self {
                    r: expand((v >> 8) & 0xf),
                    g: expand((v >> 4) & 0xf),
                    b: expand(v & 0xf),
                })
            }
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }

    /// Linear-light RGBA with alpha 1, ready for a shader uniform.
    pub fn to_linear(self) -> Vec4 {
        Vec4::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        )
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
