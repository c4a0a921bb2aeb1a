use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use facet_engine::coords::Size;

const USAGE: &str = "usage: facet-demo [--realtime] [frames] [output.png]";

/// How much time each `Scene::update` advances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Step {
    /// Constant step in seconds; output is deterministic.
    Fixed(f32),
    /// Clamped wall time measured by `FrameClock`.
    RealTime,
}

/// Demo run settings.
///
/// Command line: `facet-demo [--realtime] [frames] [output.png]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub frames: u32,
    pub canvas: Size,
    pub output: PathBuf,
    pub step: Step,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            canvas: Size::new(320, 240),
            output: PathBuf::from("facet-frame.png"),
            step: Step::Fixed(1.0 / 60.0),
        }
    }
}

impl DemoConfig {
    /// Parses positional arguments (program name already stripped).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let (flags, positional): (Vec<String>, Vec<String>) =
            args.into_iter().partition(|a| a.starts_with("--"));

        for flag in flags {
            match flag.as_str() {
                "--realtime" => cfg.step = Step::RealTime,
                other => bail!("unknown flag {other:?}; {USAGE}"),
            }
        }

        let mut args = positional.into_iter();

        if let Some(frames) = args.next() {
            cfg.frames = frames
                .parse()
                .with_context(|| format!("frame count {frames:?} is not a number"))?;
        }
        if let Some(output) = args.next() {
            cfg.output = PathBuf::from(output);
        }
        ensure!(args.next().is_none(), USAGE);

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(DemoConfig::from_args(args(&[])).unwrap(), DemoConfig::default());
    }

    #[test]
    fn positional_frames_and_output() {
        let cfg = DemoConfig::from_args(args(&["12", "out/x.png"])).unwrap();
        assert_eq!(cfg.frames, 12);
        assert_eq!(cfg.output, PathBuf::from("out/x.png"));
    }

    #[test]
    fn bad_frame_count_is_reported() {
        let err = DemoConfig::from_args(args(&["lots"])).unwrap_err();
        assert!(err.to_string().contains("\"lots\""));
    }

    #[test]
    fn realtime_flag_switches_step() {
        let cfg = DemoConfig::from_args(args(&["30", "--realtime"])).unwrap();
        assert_eq!(cfg.step, Step::RealTime);
        assert_eq!(cfg.frames, 30);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = DemoConfig::from_args(args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }

    #[test]
    fn extra_args_are_rejected() {
        assert!(DemoConfig::from_args(args(&["1", "a.png", "b"])).is_err());
    }
}
