//! Terrain flight demo
//!
//! Loads a `.terra` map, flies the autopilot camera over it for a number of
//! frames through the threaded frame loop, and writes the last frame as a
//! PPM image. Frame pacing is synthetic: one nominal frame duration per
//! tick, so a run is deterministic for a given map.
//!
//! For example:
//! `cargo run --release --bin terra_app -- --map maps/island.terra`

use clap::ArgMatches;
use nalgebra::vector;
use voxelspace_lib::{
    camera::FRAME_TIME_MS,
    premade::parse,
    render::{FrameLoopThread, LoopMessage, RenderOptions, RendererFront, ShadingPolicy},
    Autopilot, FlightCamera, PixelLayout, Raycaster,
};

mod args;
mod sink;

pub fn main() {
    let cmd = args::get_command();
    let matches = cmd.get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    // Unwraps safe, the args are required or have default values
    let map_path = matches.value_of("map").unwrap();
    let frames: u32 = matches.value_of("frames").unwrap().parse().unwrap();
    let out_path = matches.value_of("output-file").unwrap();
    let width: usize = matches.value_of("width").unwrap().parse().unwrap();
    let height: usize = matches.value_of("height").unwrap().parse().unwrap();
    let max_depth: f32 = matches.value_of("max-depth").unwrap().parse().unwrap();
    let shading = match matches.value_of("shading").unwrap() {
        "texture" => ShadingPolicy::TextureColored,
        "distance" => ShadingPolicy::DistanceShaded,
        _ => ShadingPolicy::HeightTinted,
    };

    let layout = PixelLayout::detect();
    let map = parse::from_file(map_path, &layout).map_err(|e| e.to_string())?;
    println!("Map {}x{}, colors: {}", map.width(), map.height(), map.has_colors());

    let camera = FlightCamera::new(map.width() as f32 * 0.5, map.height() as f32 * 0.5, 250.0);
    let resolution = vector![width, height];
    let options = RenderOptions {
        resolution,
        max_depth,
        shading,
        ..RenderOptions::default()
    };
    let raycaster = Raycaster::new(map, layout, options).map_err(|e| e.to_string())?;

    let runner = FrameLoopThread::new(raycaster, Autopilot::default(), camera);
    let mut front = RendererFront::new();
    front.start_loop(runner);
    let buffer_handle = front
        .get_buffer_handle()
        .ok_or("Frame loop did not start")?;

    println!("Flying {frames} frames...");
    for frame in 0..frames {
        front.send_message(LoopMessage::Advance {
            time_ms: frame as f32 * FRAME_TIME_MS,
        });
        front.receive_message();
    }

    {
        let buffer = buffer_handle.lock();
        sink::write_ppm(out_path, resolution, &buffer, &layout)
            .map_err(|e| format!("Cannot write frame: {e}"))?;
    }

    front.send_message(LoopMessage::ShutDown);
    front.finish();

    println!("Wrote {out_path}");
    Ok(())
}
