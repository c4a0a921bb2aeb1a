//! Falling-jewel demo content.

use facet_engine::coords::{IRect, Point, Size, Vec2};
use facet_engine::paint::Color;
use facet_engine::scene::{Entity, SceneCtx, ZIndex};
use facet_engine::surface::PixelBuffer;

/// Jewel kinds. `Empty` marks a board cell with no jewel and has no sprite.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JewelType {
    Empty,
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
}

impl JewelType {
    /// Every kind that has a sprite, in spawn rotation order.
    pub const DRAWABLE: [JewelType; 5] = [
        JewelType::Blue,
        JewelType::Green,
        JewelType::Purple,
        JewelType::Red,
        JewelType::Yellow,
    ];

    pub fn color(self) -> Option<Color> {
        match self {
            JewelType::Empty => None,
            JewelType::Blue => Some(Color::from_hex(0x2f6fde)),
            JewelType::Green => Some(Color::from_hex(0x2fbf4f)),
            JewelType::Purple => Some(Color::from_hex(0x9a3fd1)),
            JewelType::Red => Some(Color::from_hex(0xd8323a)),
            JewelType::Yellow => Some(Color::from_hex(0xf2c518)),
        }
    }

    /// Square sprite: solid body, darker rim, transparent corners.
    pub fn sprite(self, side: u32) -> Option<PixelBuffer> {
        let body = self.color()?;
        let rim = Color::rgb(body.r / 2, body.g / 2, body.b / 2);
        let s = side as i32;

        let mut buf = PixelBuffer::filled(Size::new(side, side), rim);
        buf.fill_rect(IRect::new(1, 1, s - 2, s - 2), body);
        for (x, y) in [(0, 0), (s - 1, 0), (0, s - 1), (s - 1, s - 1)] {
            buf.set_pixel(x, y, Color::TRANSPARENT);
        }
        Some(buf)
    }
}

/// A jewel falling at constant speed. Removes itself once it leaves the
/// bottom of the play field.
pub struct Jewel {
    kind: JewelType,
    sprite: Option<PixelBuffer>,
    x: i32,
    y: f32,
    speed: f32,
    floor: i32,
    z: ZIndex,
    scale: Vec2,
}

impl Jewel {
    pub fn new(kind: JewelType, column_x: i32, speed: f32, floor: i32, z: ZIndex) -> Self {
        Self {
            kind,
            sprite: kind.sprite(JEWEL_SIDE),
            x: column_x,
            y: 1.0,
            speed,
            floor,
            z,
            scale: Vec2::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}

impl Entity for Jewel {
    fn update(&mut self, dt: f32, ctx: &mut SceneCtx<'_>) {
        self.y += self.speed * dt;
        if self.y as i32 >= self.floor {
            log::trace!("{} {:?} left the field", ctx.id(), self.kind);
            ctx.remove_self();
        }
    }

    fn surface(&self) -> Option<&PixelBuffer> {
        self.sprite.as_ref()
    }

    fn z_index(&self) -> ZIndex {
        self.z
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y as i32)
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }
}

pub const JEWEL_SIDE: u32 = 16;

/// Invisible entity that drops a new jewel every `interval` seconds, cycling
/// through columns and kinds.
pub struct Spawner {
    field: Size,
    interval: f32,
    elapsed: f32,
    spawned: u32,
}

impl Spawner {
    /// Shortest accepted spawn interval, in seconds.
    pub const MIN_INTERVAL: f32 = 0.001;

    /// `interval` is raised to `MIN_INTERVAL` (NaN included) so the spawn loop
    /// always terminates.
    pub fn new(field: Size, interval: f32) -> Self {
        let interval = if interval >= Self::MIN_INTERVAL {
            interval
        } else {
            Self::MIN_INTERVAL
        };
        Self { field, interval, elapsed: 0.0, spawned: 0 }
    }

    fn columns(&self) -> u32 {
        (self.field.width / JEWEL_SIDE).max(1)
    }
}

impl Entity for Spawner {
    fn update(&mut self, dt: f32, ctx: &mut SceneCtx<'_>) {
        if !dt.is_finite() {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;

            let n = self.spawned;
            self.spawned += 1;

            let kind = JewelType::DRAWABLE[n as usize % JewelType::DRAWABLE.len()];
            // Stride 7 is coprime with typical column counts, so drops spread out.
            let column = (n * 7) % self.columns();
            let x = (column * JEWEL_SIDE) as i32 + 1;
            let speed = 40.0 + (n % 4) as f32 * 15.0;
            // Every fifth jewel is drawn at double size on a higher layer.
            let (z, scale) = if n % 5 == 4 {
                (ZIndex(1_000 + n as i32), Vec2::splat(2.0))
            } else {
                (ZIndex(n as i32 % 16), Vec2::ONE)
            };

            let jewel = Jewel::new(kind, x, speed, self.field.h(), z).with_scale(scale);
            let id = ctx.add_entity(jewel);
            log::trace!("{} spawned {id} ({kind:?}) at column {column}", ctx.id());
        }
    }

    fn surface(&self) -> Option<&PixelBuffer> {
        None
    }

    fn z_index(&self) -> ZIndex {
        ZIndex::default()
    }

    fn position(&self) -> Point {
        Point::ORIGIN
    }
}

/// Two-tone checkerboard used as the demo backdrop.
pub fn checkerboard(size: Size, cell: u32, a: Color, b: Color) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(size, a);
    let cell = cell.max(1) as i32;
    for cy in (0..size.h()).step_by(cell as usize) {
        for cx in (0..size.w()).step_by(cell as usize) {
            if (cx / cell + cy / cell) % 2 == 1 {
                buf.fill_rect(IRect::new(cx, cy, cell, cell), b);
            }
        }
    }
    buf
}
