use anyhow::{Result, ensure};

use crate::coords::{IRect, Point, Size};
use crate::paint::Color;

use super::Canvas;

/// Owned RGBA8 software image, row-major, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    size: Size,
    /// Union of regions passed to `Canvas::present` since the last drain.
    presented: Option<IRect>,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(Size::new(width, height), Color::TRANSPARENT)
    }

    pub fn filled(size: Size, color: Color) -> Self {
        Self {
            pixels: vec![color; size.area()],
            size,
            presented: None,
        }
    }

    /// Wraps raw RGBA8 bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let size = Size::new(width, height);
        let expected = size.area().checked_mul(4);
        ensure!(
            expected == Some(bytes.len()),
            "pixel data is {} bytes, expected {}x{}x4",
            bytes.len(),
            width,
            height
        );
        Ok(Self {
            pixels: bytemuck::cast_slice::<u8, Color>(bytes).to_vec(),
            size,
            presented: None,
        })
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel storage viewed as `[r, g, b, a, r, g, b, a, ...]`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.size.to_rect().contains(Point::new(x, y)) {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites one pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Overwrites `rect` with `color`, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: IRect, color: Color) {
        let Some(rect) = rect.intersect(self.size.to_rect()) else {
            return;
        };
        let stride = self.size.width as usize;
        for y in rect.y..rect.bottom() {
            let row = y as usize * stride;
            self.pixels[row + rect.x as usize..row + rect.right() as usize].fill(color);
        }
    }

    /// Composites pixels from `src` onto this buffer.
    ///
    /// The copied extent is `min(src_rect, dst_rect)` per axis, read from
    /// `src_rect`'s origin and written at `dst_rect`'s origin. Whatever falls
    /// outside either buffer is dropped.
    pub fn blit_from(&mut self, src: &PixelBuffer, src_rect: IRect, dst_rect: IRect) {
        let w = src_rect.w.min(dst_rect.w);
        let h = src_rect.h.min(dst_rect.h);
        if w <= 0 || h <= 0 {
            return;
        }

        // Clip the read window against the source, then shift the write origin
        // by however much the read origin moved.
        let Some(read) = IRect::new(src_rect.x, src_rect.y, w, h).intersect(src.size.to_rect())
        else {
            return;
        };
        let shifted = IRect::new(
            dst_rect.x.saturating_add(read.x - src_rect.x),
            dst_rect.y.saturating_add(read.y - src_rect.y),
            read.w,
            read.h,
        );
        let Some(write) = shifted.intersect(self.size.to_rect()) else {
            return;
        };

        let sx = read.x + (write.x - shifted.x);
        let sy = read.y + (write.y - shifted.y);
        let src_stride = src.size.width as usize;
        let dst_stride = self.size.width as usize;

        for row in 0..write.h {
            let s = (sy + row) as usize * src_stride + sx as usize;
            let d = (write.y + row) as usize * dst_stride + write.x as usize;
            let src_row = &src.pixels[s..s + write.w as usize];
            let dst_row = &mut self.pixels[d..d + write.w as usize];
            for (dst, &px) in dst_row.iter_mut().zip(src_row) {
                *dst = px.over(*dst);
            }
        }
    }

    /// Drains the region accumulated by `Canvas::present` calls.
    pub fn take_presented(&mut self) -> Option<IRect> {
        self.presented.take()
    }
}

impl Canvas for PixelBuffer {
    #[inline]
    fn size(&self) -> Size {
        self.size
    }

    #[inline]
    fn blit(&mut self, src: &PixelBuffer, src_rect: IRect, dst_rect: IRect) {
        self.blit_from(src, src_rect, dst_rect);
    }

    #[inline]
    fn fill(&mut self, rect: IRect, color: Color) {
        self.fill_rect(rect, color);
    }

    fn present(&mut self, region: IRect) {
        let Some(region) = region.intersect(self.size.to_rect()) else {
            return;
        };
        self.presented = Some(match self.presented {
            Some(prev) => prev.union(region),
            None => region,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn r(x: i32, y: i32, w: i32, h: i32) -> IRect {
        IRect::new(x, y, w, h)
    }

    /// Counts pixels equal to `color`.
    fn count(buf: &PixelBuffer, color: Color) -> usize {
        buf.pixels().iter().filter(|&&p| p == color).count()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_is_transparent() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.size(), Size::new(3, 2));
        assert_eq!(count(&buf, Color::TRANSPARENT), 6);
    }

    #[test]
    fn from_rgba8_round_trips_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let buf = PixelBuffer::from_rgba8(2, 1, &bytes).unwrap();
        assert_eq!(buf.pixel(1, 0), Some(Color::rgba(5, 6, 7, 8)));
        assert_eq!(buf.as_bytes(), &bytes);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        let err = PixelBuffer::from_rgba8(2, 2, &[0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 2x2x4"));
    }

    // ── pixel access ──────────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set_pixel(-1, 0, RED);
        buf.set_pixel(2, 0, RED);
        assert_eq!(buf.pixel(0, 2), None);
        assert_eq!(count(&buf, RED), 0);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(r(2, 2, 10, 10), RED);
        assert_eq!(count(&buf, RED), 4);
        assert_eq!(buf.pixel(3, 3), Some(RED));
        assert_eq!(buf.pixel(1, 1), Some(Color::TRANSPARENT));
    }

    // ── blit ──────────────────────────────────────────────────────────────

    #[test]
    fn blit_copies_smaller_extent_from_source_origin() {
        let mut src = PixelBuffer::filled(Size::new(10, 10), BLUE);
        src.set_pixel(0, 0, RED);
        let mut dst = PixelBuffer::filled(Size::new(8, 8), Color::BLACK);

        dst.blit_from(&src, r(0, 0, 10, 10), r(5, 5, 3, 3));

        assert_eq!(dst.pixel(5, 5), Some(RED));
        assert_eq!(count(&dst, BLUE) + count(&dst, RED), 9);
        assert_eq!(dst.pixel(4, 4), Some(Color::BLACK));
    }

    #[test]
    fn blit_negative_destination_drops_offscreen_part() {
        let mut src = PixelBuffer::filled(Size::new(4, 4), BLUE);
        src.set_pixel(2, 2, RED);
        let mut dst = PixelBuffer::filled(Size::new(4, 4), Color::BLACK);

        dst.blit_from(&src, r(0, 0, 4, 4), r(-2, -2, 4, 4));

        // Source (2,2) lands on (0,0).
        assert_eq!(dst.pixel(0, 0), Some(RED));
        assert_eq!(count(&dst, BLUE) + count(&dst, RED), 4);
    }

    #[test]
    fn blit_source_window_outside_source_is_clipped() {
        let src = PixelBuffer::filled(Size::new(2, 2), BLUE);
        let mut dst = PixelBuffer::filled(Size::new(6, 6), Color::BLACK);

        dst.blit_from(&src, r(1, 1, 4, 4), r(0, 0, 4, 4));

        assert_eq!(count(&dst, BLUE), 1);
        assert_eq!(dst.pixel(0, 0), Some(BLUE));
    }

    #[test]
    fn blit_wholly_outside_is_a_no_op() {
        let src = PixelBuffer::filled(Size::new(2, 2), BLUE);
        let mut dst = PixelBuffer::filled(Size::new(4, 4), Color::BLACK);
        dst.blit_from(&src, r(0, 0, 2, 2), r(10, 10, 2, 2));
        dst.blit_from(&src, r(0, 0, 2, 2), r(1, 1, 0, 2));
        dst.blit_from(&src, r(0, 0, 2, 2), r(i32::MAX, 0, 2, 2));
        assert_eq!(count(&dst, Color::BLACK), 16);
    }

    #[test]
    fn blit_skips_transparent_source_pixels() {
        let mut src = PixelBuffer::new(2, 1);
        src.set_pixel(1, 0, RED);
        let mut dst = PixelBuffer::filled(Size::new(2, 1), BLUE);
        dst.blit_from(&src, r(0, 0, 2, 1), r(0, 0, 2, 1));
        assert_eq!(dst.pixels(), &[BLUE, RED]);
    }

    // ── present ───────────────────────────────────────────────────────────

    #[test]
    fn present_accumulates_until_drained() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.present(r(0, 0, 2, 2));
        buf.present(r(4, 4, 2, 2));
        assert_eq!(buf.take_presented(), Some(r(0, 0, 6, 6)));
        assert_eq!(buf.take_presented(), None);
    }

    #[test]
    fn present_is_clipped_to_buffer() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.present(r(-5, -5, 100, 100));
        assert_eq!(buf.take_presented(), Some(r(0, 0, 8, 8)));
    }
}
