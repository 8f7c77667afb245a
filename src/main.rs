//! Demo driver: replays a scripted gesture sequence through the pipeline
//! and logs the actions it produces. Useful for eyeballing dispatcher
//! behavior without a camera.

use anyhow::Result;
use clap::Parser;
use gesture_combat::{
    config::Config,
    landmark::{indices::*, HandFrame},
    pipeline::GesturePipeline,
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Frame interval in milliseconds
    #[arg(long, default_value = "33.0")]
    frame_ms: f64,

    /// Render surface width in pixels
    #[arg(long, default_value = "800")]
    width: f32,

    /// Render surface height in pixels
    #[arg(long, default_value = "600")]
    height: f32,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Gesture Combat - input engine demo");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let mut pipeline = GesturePipeline::new(config, args.width, args.height)?;
    let mut now_ms = 0.0;

    // Scripted session: point and sweep (slashes), charge a fist and
    // release to a palm, then gather with two fingers and let go
    let script: Vec<(&str, f64, Pose)> = vec![
        ("pointing sweep", 1000.0, Pose::PointingSweep),
        ("fist hold", 3300.0, Pose::Fist),
        ("palm release", 300.0, Pose::Palm),
        ("two-finger hold", 3300.0, Pose::TwoFingers),
        ("fist (sword rain)", 300.0, Pose::Fist),
        ("hand withdrawn", 300.0, Pose::Absent),
    ];

    for (label, duration_ms, pose) in script {
        info!("--- {label} ({duration_ms}ms)");
        let end = now_ms + duration_ms;
        while now_ms < end {
            let phase = now_ms / 1000.0;
            let frame = pose.frame(phase);
            for event in pipeline.process_frame(frame.as_ref(), now_ms) {
                info!("t={now_ms:>7.0}ms  {event:?}");
            }
            now_ms += args.frame_ms;
        }
    }

    Ok(())
}

/// Synthetic hand poses for the scripted demo
enum Pose {
    PointingSweep,
    Fist,
    Palm,
    TwoFingers,
    Absent,
}

impl Pose {
    fn frame(&self, phase: f64) -> Option<HandFrame> {
        // Sweep the hand horizontally so the pointing pose produces
        // enough velocity to slash
        let x = 0.5 + 0.3 * (phase * 8.0).sin() as f32;

        match self {
            Self::PointingSweep => {
                let mut coords = curled_hand(x);
                extend_finger(&mut coords, INDEX_TIP);
                Some(HandFrame::from_coords(&coords, 0.95))
            }
            Self::Fist => Some(HandFrame::from_coords(&curled_hand(0.5), 0.95)),
            Self::Palm => {
                let mut coords = curled_hand(0.5);
                for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
                    extend_finger(&mut coords, tip);
                }
                coords[THUMB_TIP] = (0.25, 0.70);
                Some(HandFrame::from_coords(&coords, 0.95))
            }
            Self::TwoFingers => {
                let mut coords = curled_hand(0.5);
                extend_finger(&mut coords, INDEX_TIP);
                extend_finger(&mut coords, MIDDLE_TIP);
                Some(HandFrame::from_coords(&coords, 0.95))
            }
            Self::Absent => None,
        }
    }
}

fn curled_hand(x: f32) -> Vec<(f32, f32)> {
    let mut coords = vec![(x, 0.8); 21];
    coords[WRIST] = (x, 0.9);
    coords[THUMB_MCP] = (x - 0.05, 0.8);
    coords[THUMB_TIP] = (x - 0.03, 0.78);
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        coords[pip_of(tip)] = (x, 0.62);
        coords[tip] = (x, 0.65);
    }
    coords
}

fn extend_finger(coords: &mut [(f32, f32)], tip: usize) {
    let x = coords[tip].0;
    coords[pip_of(tip)] = (x, 0.55);
    coords[tip] = (x, 0.40);
}
