//! Destination/source rectangle planning for scene compositing.
//!
//! Kept free of any surface so the clip arithmetic is testable on its own.

use crate::coords::{IRect, Point, Size, Vec2};

/// One planned copy: read `src` from the image, write `dst` on the target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blit {
    pub src: IRect,
    pub dst: IRect,
}

/// Background placement: native size at the top-left corner, with the copy
/// extent clamped to the target. No scaling, no centering.
pub fn background_blit(image: Size, target: Size) -> Blit {
    Blit {
        src: image.to_rect(),
        dst: IRect::new(0, 0, image.w().min(target.w()), image.h().min(target.h())),
    }
}

/// Entity placement, or `None` when the entity is not visible.
///
/// - size is the surface size times `scale`, truncated toward zero
/// - visible only if `0 < x < target.w` and `0 < y < target.h`; an entity
///   sitting exactly on row or column 0 is skipped
/// - width/height are cut so the rectangle ends at the right/bottom edge
/// - the source always starts at the surface origin with its native size
pub fn entity_blit(position: Point, surface: Size, scale: Vec2, target: Size) -> Option<Blit> {
    let (tw, th) = (target.w(), target.h());
    let Point { x, y } = position;

    if !(x > 0 && x < tw && y > 0 && y < th) {
        return None;
    }

    // `as` saturates and maps NaN to 0, which is the truncation we want.
    let mut w = (surface.w() as f32 * scale.x) as i32;
    let mut h = (surface.h() as f32 * scale.y) as i32;

    if x.saturating_add(w) > tw {
        w = tw - x;
    }
    if y.saturating_add(h) > th {
        h = th - y;
    }

    Some(Blit {
        src: surface.to_rect(),
        dst: IRect::new(x, y, w, h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sz(w: u32, h: u32) -> Size {
        Size::new(w, h)
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── background ────────────────────────────────────────────────────────

    #[test]
    fn background_smaller_than_target_keeps_native_size() {
        let b = background_blit(sz(4, 3), sz(8, 8));
        assert_eq!(b.src, IRect::new(0, 0, 4, 3));
        assert_eq!(b.dst, IRect::new(0, 0, 4, 3));
    }

    #[test]
    fn background_larger_than_target_is_clamped() {
        let b = background_blit(sz(20, 5), sz(8, 8));
        assert_eq!(b.src, IRect::new(0, 0, 20, 5));
        assert_eq!(b.dst, IRect::new(0, 0, 8, 5));
    }

    // ── entity visibility ─────────────────────────────────────────────────

    #[test]
    fn entity_inside_target_is_unclipped() {
        let b = entity_blit(p(2, 3), sz(4, 4), Vec2::ONE, sz(16, 16)).unwrap();
        assert_eq!(b.src, IRect::new(0, 0, 4, 4));
        assert_eq!(b.dst, IRect::new(2, 3, 4, 4));
    }

    #[test]
    fn entity_on_origin_row_or_column_is_skipped() {
        // Boundary quirk: the visibility test is strict, so coordinate 0 is
        // treated as outside.
        assert!(entity_blit(p(0, 0), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
        assert!(entity_blit(p(0, 3), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
        assert!(entity_blit(p(3, 0), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
        assert!(entity_blit(p(1, 1), sz(4, 4), Vec2::ONE, sz(8, 8)).is_some());
    }

    #[test]
    fn entity_at_or_past_far_edge_is_skipped() {
        assert!(entity_blit(p(8, 3), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
        assert!(entity_blit(p(3, 8), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
        assert!(entity_blit(p(-2, 3), sz(4, 4), Vec2::ONE, sz(8, 8)).is_none());
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn entity_crossing_bottom_right_is_clipped_to_edge() {
        let b = entity_blit(p(5, 5), sz(10, 10), Vec2::ONE, sz(8, 8)).unwrap();
        assert_eq!(b.dst, IRect::new(5, 5, 3, 3));
        assert_eq!(b.src, IRect::new(0, 0, 10, 10));
    }

    #[test]
    fn entity_crossing_one_edge_only_clips_that_axis() {
        let b = entity_blit(p(6, 1), sz(4, 4), Vec2::ONE, sz(8, 8)).unwrap();
        assert_eq!(b.dst, IRect::new(6, 1, 2, 4));
    }

    // ── scaling ───────────────────────────────────────────────────────────

    #[test]
    fn scale_truncates_toward_zero() {
        let b = entity_blit(p(1, 1), sz(10, 10), Vec2::new(0.55, 1.99), sz(100, 100)).unwrap();
        assert_eq!(b.dst, IRect::new(1, 1, 5, 19));
        assert_eq!(b.src, IRect::new(0, 0, 10, 10));
    }

    #[test]
    fn scaled_entity_is_clipped_after_scaling() {
        let b = entity_blit(p(4, 4), sz(4, 4), Vec2::splat(2.0), sz(10, 10)).unwrap();
        assert_eq!(b.dst, IRect::new(4, 4, 6, 6));
    }

    #[test]
    fn nan_scale_collapses_to_empty_destination() {
        let b = entity_blit(p(1, 1), sz(4, 4), Vec2::new(f32::NAN, 1.0), sz(8, 8)).unwrap();
        assert!(b.dst.is_empty());
    }
}
