//! Colormap derivation: elevation bands with slope shading
//!
//! Texels go out as R,G,B,A byte quadruples, the order the `.terra` format
//! stores them in.

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::generators::value_noise;

/// Palette band for an elevation
fn base_color(elevation: u8) -> [f32; 3] {
    match elevation {
        0..=39 => {
            // water, deeper is darker
            let t = elevation as f32 / 40.0;
            [20.0 + 20.0 * t, 60.0 + 40.0 * t, 130.0 + 60.0 * t]
        }
        40..=139 => {
            let t = (elevation - 40) as f32 / 100.0;
            [50.0 + 80.0 * t, 140.0 - 30.0 * t, 50.0]
        }
        140..=199 => {
            let t = (elevation - 140) as f32 / 60.0;
            [120.0 + 30.0 * t, 105.0 + 40.0 * t, 90.0 + 50.0 * t]
        }
        _ => [235.0, 240.0, 245.0], // snow
    }
}

pub fn derive_colors(heights: &[u8], dims: Vector2<usize>, seed: u64) -> Vec<u8> {
    let seed = seed as u32;
    let rows: Vec<Vec<u8>> = (0..dims.y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(dims.x * 4);
            for x in 0..dims.x {
                let elevation = heights[x + y * dims.x];
                // east-facing slopes catch the light, toroidal neighbor
                let east = heights[(x + 1) % dims.x + y * dims.x];
                let slope = east as f32 - elevation as f32;
                let light = (1.0 + slope * 0.02).clamp(0.7, 1.3);
                // a touch of dither breaks up the bands
                let dither = 0.9 + 0.2 * value_noise(x as f32 * 0.7, y as f32 * 0.7, seed);

                let rgb = base_color(elevation);
                for channel in rgb {
                    row.push((channel * light * dither).clamp(0.0, 255.0) as u8);
                }
                row.push(0xFF);
            }
            row
        })
        .collect();

    rows.concat()
}
