//! Module with helper constructors
//! Saves repetition in unit tests

use nalgebra::{vector, Vector2};

use crate::{
    common::PixelLayout,
    render::{RenderOptions, ShadingPolicy},
    terrain::HeightColorMap,
};

/// Map with the same elevation everywhere
pub fn flat_map(width: usize, height: usize, elevation: u8) -> HeightColorMap {
    HeightColorMap::from_parts(vector![width, height], vec![elevation; width * height], None)
        .expect("flat map")
}

/// Flat map of elevation 0 with one cell raised to `spike_elevation`
pub fn spike_map(
    width: usize,
    height: usize,
    spike: Vector2<usize>,
    spike_elevation: u8,
) -> HeightColorMap {
    let mut heights = vec![0u8; width * height];
    heights[spike.x + spike.y * width] = spike_elevation;
    HeightColorMap::from_parts(vector![width, height], heights, None).expect("spike map")
}

/// Flat map carrying a colormap with one uniform texel
pub fn colored_flat_map(
    width: usize,
    height: usize,
    elevation: u8,
    texel: [u8; 4],
    layout: &PixelLayout,
) -> HeightColorMap {
    let packed = layout.pack(texel[0], texel[1], texel[2], texel[3]);
    HeightColorMap::from_parts(
        vector![width, height],
        vec![elevation; width * height],
        Some(vec![packed; width * height]),
    )
    .expect("colored map")
}

/// Render options scaled down for unit tests, height-tinted shading
pub fn small_options(width: usize, height: usize, max_depth: f32) -> RenderOptions {
    RenderOptions {
        resolution: vector![width, height],
        max_depth,
        shading: ShadingPolicy::HeightTinted,
        ..RenderOptions::default()
    }
}
