use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::vector;
use voxelspace_lib::{
    render::{RenderOptions, ShadingPolicy},
    terrain::HeightColorMap,
    FlightCamera, PixelLayout, Raycaster,
};

pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;
const MAP_SIDE: usize = 1024;

/// Rolling sine hills with a colormap, deterministic
fn get_map(layout: &PixelLayout) -> HeightColorMap {
    let mut heights = Vec::with_capacity(MAP_SIDE * MAP_SIDE);
    let mut colors = Vec::with_capacity(MAP_SIDE * MAP_SIDE);
    for y in 0..MAP_SIDE {
        for x in 0..MAP_SIDE {
            let h = 96.0 + 80.0 * (x as f32 * 0.05).sin() * (y as f32 * 0.05).cos();
            heights.push(h as u8);
            colors.push(layout.pack(h as u8, 128, 64, 255));
        }
    }
    HeightColorMap::from_parts(vector![MAP_SIDE, MAP_SIDE], heights, Some(colors)).unwrap()
}

fn get_raycaster(shading: ShadingPolicy, max_depth: f32) -> Raycaster {
    let layout = PixelLayout::detect();
    let options = RenderOptions {
        resolution: vector![WIDTH, HEIGHT],
        max_depth,
        shading,
        ..RenderOptions::default()
    };
    Raycaster::new(get_map(&layout), layout, options).unwrap()
}

fn bench_shading(c: &mut Criterion, name: &str, shading: ShadingPolicy) {
    let mut raycaster = get_raycaster(shading, 512.0);
    let camera = FlightCamera::new(128.0, 128.0, 250.0);
    let mut buffer = vec![0u32; raycaster.buffer_len()];

    c.bench_function(name, |b| {
        b.iter(|| raycaster.render(&camera, &mut buffer));
    });
}

fn render_height_tinted(c: &mut Criterion) {
    bench_shading(c, "render height tinted", ShadingPolicy::HeightTinted);
}

fn render_texture_colored(c: &mut Criterion) {
    bench_shading(c, "render texture colored", ShadingPolicy::TextureColored);
}

fn render_distance_shaded(c: &mut Criterion) {
    bench_shading(c, "render distance shaded", ShadingPolicy::DistanceShaded);
}

fn render_deep(c: &mut Criterion) {
    let mut raycaster = get_raycaster(ShadingPolicy::TextureColored, 1024.0);
    let camera = FlightCamera::new(128.0, 128.0, 250.0);
    let mut buffer = vec![0u32; raycaster.buffer_len()];

    c.bench_function("render max depth 1024", |b| {
        b.iter(|| raycaster.render(&camera, &mut buffer));
    });
}

criterion_group! {
    name = shading;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = render_height_tinted, render_texture_colored, render_distance_shaded
}

criterion_group! {
    name = depth;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = render_deep
}

criterion_main!(shading, depth);
