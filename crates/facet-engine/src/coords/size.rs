use super::IRect;

/// Pixel extent of a buffer or canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Width as a signed pixel count, saturating at `i32::MAX`.
    #[inline]
    pub fn w(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height as a signed pixel count, saturating at `i32::MAX`.
    #[inline]
    pub fn h(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    /// The rectangle `(0, 0, width, height)`.
    #[inline]
    pub fn to_rect(self) -> IRect {
        IRect::new(0, 0, self.w(), self.h())
    }
}

impl From<(u32, u32)> for Size {
    #[inline]
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
