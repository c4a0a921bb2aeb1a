//! Headless driver: runs a falling-jewel scene for a fixed number of frames and
//! writes the last composited frame to a PNG.

mod config;
mod jewel;

use anyhow::{Context, Result};
use facet_engine::logging::{LoggingConfig, init_logging};
use facet_engine::paint::Color;
use facet_engine::scene::Scene;
use facet_engine::surface::PixelBuffer;
use facet_engine::time::FrameClock;

use config::{DemoConfig, Step};
use jewel::{Spawner, checkerboard};

/// Frames between progress log lines.
const REPORT_EVERY: u32 = 60;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = DemoConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "running {} frames on a {}x{} canvas",
        cfg.frames,
        cfg.canvas.width,
        cfg.canvas.height
    );

    let mut scene = Scene::new();
    scene.set_background(Some(checkerboard(
        cfg.canvas,
        16,
        Color::from_hex(0x1b1d2b),
        Color::from_hex(0x23263a),
    )));
    scene.add_entity(Spawner::new(cfg.canvas, 0.2));

    let mut canvas = PixelBuffer::new(cfg.canvas.width, cfg.canvas.height);
    let mut clock = FrameClock::new();
    let mut wall = 0.0f32;

    let full = cfg.canvas.to_rect();

    for frame in 0..cfg.frames {
        let time = clock.tick();
        let dt = match cfg.step {
            Step::Fixed(step) => step,
            Step::RealTime => time.dt,
        };

        let updated = scene.update(dt);
        let drawn = scene.draw(&mut canvas);

        let presented = canvas.take_presented();
        debug_assert_eq!(presented, Some(full), "draw must present the whole canvas");
        log::trace!("frame {} presented {presented:?}", time.frame_index);

        wall += time.dt;
        if (frame + 1) % REPORT_EVERY == 0 {
            log::info!(
                "frame {}: {} active, {} pending, {} drawn, {} skipped, {} destroyed ({:.1} fps)",
                frame + 1,
                scene.active_len(),
                scene.pending_len(),
                drawn.drawn,
                drawn.skipped,
                updated.destroyed,
                REPORT_EVERY as f32 / wall.max(f32::EPSILON),
            );
            wall = 0.0;
        }
    }

    image::save_buffer(
        &cfg.output,
        canvas.as_bytes(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("failed to write {}", cfg.output.display()))?;

    log::info!("wrote {}", cfg.output.display());
    Ok(())
}
