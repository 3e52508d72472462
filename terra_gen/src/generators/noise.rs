//! Seeded fractal value noise terrain

use indicatif::ProgressBar;
use nalgebra::Vector2;
use rayon::prelude::*;

fn noise_hash(x: i32, y: i32, seed: u32) -> f32 {
    let mut h = seed.wrapping_add(x as u32).wrapping_mul(374_761_393);
    h = h.wrapping_add(y as u32).wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    (h & 0x7fff) as f32 / 0x7fff as f32
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Bilinear value noise in [0, 1]
pub fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = smoothstep(x - ix as f32);
    let fy = smoothstep(y - iy as f32);

    let c00 = noise_hash(ix, iy, seed);
    let c10 = noise_hash(ix + 1, iy, seed);
    let c01 = noise_hash(ix, iy + 1, seed);
    let c11 = noise_hash(ix + 1, iy + 1, seed);

    let x0 = c00 + (c10 - c00) * fx;
    let x1 = c01 + (c11 - c01) * fx;

    x0 + (x1 - x0) * fy
}

/// Fractal sum of `octaves` noise layers, roughly [0, 1]
pub fn fbm(x: f32, y: f32, octaves: u32, seed: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for _ in 0..octaves {
        value += amplitude * value_noise(x * frequency, y * frequency, seed);
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

pub fn generate(dims: Vector2<usize>, feature_scale: f32, octaves: u32, seed: u64) -> Vec<u8> {
    let seed = seed as u32;
    let progress = ProgressBar::new(dims.y as u64);

    let rows: Vec<Vec<u8>> = (0..dims.y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(dims.x);
            for x in 0..dims.x {
                let n = fbm(
                    x as f32 / feature_scale,
                    y as f32 / feature_scale,
                    octaves,
                    seed,
                );
                row.push((n.clamp(0.0, 1.0) * 255.0) as u8);
            }
            progress.inc(1);
            row
        })
        .collect();
    progress.finish();

    rows.concat()
}
