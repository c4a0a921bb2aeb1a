use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA8 color, laid out as `[r, g, b, a]` bytes.
///
/// `#[repr(C)]` + `Pod` so a pixel slice can be viewed as raw RGBA8 bytes
/// without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates an opaque color from `0xRRGGBB`.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composites `self` over `dst` (source-over, straight alpha).
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => self,
            0 => dst,
            sa => {
                let sa = sa as u16;
                let da = dst.a as u16;
                // out_a = sa + da * (1 - sa), all in 0..=255 fixed point.
                let out_a = sa + div255(da * (255 - sa));
                if out_a == 0 {
                    return Color::TRANSPARENT;
                }
                let channel = |s: u8, d: u8| -> u8 {
                    let num = s as u32 * sa as u32 * 255 + d as u32 * da as u32 * (255 - sa as u32);
                    (num / (out_a as u32 * 255)).min(255) as u8
                };
                Color::rgba(
                    channel(self.r, dst.r),
                    channel(self.g, dst.g),
                    channel(self.b, dst.b),
                    out_a.min(255) as u8,
                )
            }
        }
    }
}

/// Rounded `x / 255` for `x` in `0..=255*255`.
#[inline]
fn div255(x: u16) -> u16 {
    let x = x as u32 + 128;
    ((x + (x >> 8)) >> 8) as u16
}
