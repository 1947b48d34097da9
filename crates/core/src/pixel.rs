//! The RGBA pixel value type and its integer alpha-over blend.
//!
//! All four channels are 8-bit; a pixel with zero alpha is fully transparent
//! regardless of its color channels. Hex parsing accepts `#RRGGBB` (implies
//! full opacity) and `#RRGGBBAA`, case insensitive, leading `#` optional.

use crate::error::CanvasError;

/// A straight (non-premultiplied) sRGB pixel with an alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the cleared state of every grid cell.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    /// Opaque white, the default draw color.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    /// Creates a pixel from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }

    /// Creates a fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::new(r, g, b, 255)
    }

    /// Parses a hex color code like `#ff0000` or `#ff000080` (case
    /// insensitive, leading `#` optional). The 6-digit form implies full
    /// opacity.
    ///
    /// Returns `CanvasError::InvalidColor` for any other input.
    pub fn from_hex(code: &str) -> Result<Pixel, CanvasError> {
        let hex = code.strip_prefix('#').unwrap_or(code);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(CanvasError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {code:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| CanvasError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Pixel { r, g, b, a })
    }

    /// Formats the pixel as a lowercase `#rrggbbaa` hex code.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Alpha-over blend of `self` (source) onto `dst` (destination) using
    /// truncating integer arithmetic:
    ///
    /// ```text
    /// outA = (255*srcA + (255-srcA)*dstA) / 255
    /// outC = outA == 0 ? 0 : ((srcC*srcA*255 + dstC*(255-srcA)*dstA) / outA) / 255
    /// ```
    ///
    /// A fully opaque source replaces the destination exactly; a fully
    /// transparent source leaves it exactly unchanged.
    pub fn over(self, dst: Pixel) -> Pixel {
        let sa = u32::from(self.a);
        let da = u32::from(dst.a);
        let out_a = (255 * sa + (255 - sa) * da) / 255;
        if out_a == 0 {
            return Pixel::TRANSPARENT;
        }
        let channel = |sc: u8, dc: u8| {
            let blended =
                (u32::from(sc) * sa * 255 + u32::from(dc) * (255 - sa) * da) / out_a / 255;
            blended as u8
        };
        Pixel {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: out_a as u8,
        }
    }
}
