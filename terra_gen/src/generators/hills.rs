//! Smooth hills scattered over a flat plain

use indicatif::ProgressBar;
use nalgebra::Vector2;
use rayon::prelude::*;

struct Hill {
    cx: f32,
    cy: f32,
    radius: f32,
    peak: f32,
}

pub fn generate(dims: Vector2<usize>, count: u32, radius: f32, seed: u64) -> Vec<u8> {
    let rng = fastrand::Rng::with_seed(seed);
    let hills: Vec<Hill> = (0..count)
        .map(|_| Hill {
            cx: rng.f32() * dims.x as f32,
            cy: rng.f32() * dims.y as f32,
            // between half and one-and-a-half of the mean radius
            radius: radius * (0.5 + rng.f32()),
            peak: 40.0 + rng.f32() * 180.0,
        })
        .collect();

    let progress = ProgressBar::new(dims.y as u64);
    let rows: Vec<Vec<u8>> = (0..dims.y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(dims.x);
            for x in 0..dims.x {
                let mut elevation = 0.0f32;
                for hill in &hills {
                    let dx = x as f32 - hill.cx;
                    let dy = y as f32 - hill.cy;
                    let falloff = 1.0 - (dx * dx + dy * dy) / (hill.radius * hill.radius);
                    if falloff > 0.0 {
                        elevation += hill.peak * falloff * falloff;
                    }
                }
                row.push(elevation.clamp(0.0, 255.0) as u8);
            }
            progress.inc(1);
            row
        })
        .collect();
    progress.finish();

    rows.concat()
}
