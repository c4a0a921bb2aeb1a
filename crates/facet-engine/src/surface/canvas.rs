use crate::coords::{IRect, Size};
use crate::paint::Color;

use super::PixelBuffer;

/// Draw target contract.
///
/// Implementors must accept any rectangles, including ones that lie partly or
/// wholly outside either surface, without panicking.
pub trait Canvas {
    /// Target extent in pixels.
    fn size(&self) -> Size;

    /// Copies pixels from `src` into this canvas.
    ///
    /// Reads start at `src_rect`'s origin and writes at `dst_rect`'s origin. The
    /// copied extent is the smaller of the two rectangles on each axis; no
    /// resampling happens.
    fn blit(&mut self, src: &PixelBuffer, src_rect: IRect, dst_rect: IRect);

    /// Fills `rect` with `color`, clipped to the canvas.
    fn fill(&mut self, rect: IRect, color: Color);

    /// Marks `region` as ready to be shown.
    fn present(&mut self, region: IRect);
}
