mod hills;
mod noise;
mod solid;

use std::io::{BufWriter, Write};

use nalgebra::{vector, Vector2};

use crate::{
    colormap::derive_colors,
    config::{Config, GeneratorConfig},
    file::open_create_file,
    header::generate_header,
};

pub use noise::{fbm, value_noise};

/// Generate the configured terrain and write the `.terra` file
pub fn generate_map(cfg: Config) -> Result<(), String> {
    let dims = vector![cfg.dims.x as usize, cfg.dims.y as usize];
    let seed = cfg.seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Seed: {seed}");

    let heights = generate_heights(dims, cfg.generator, seed);

    let file = open_create_file(&cfg.file_name)
        .map_err(|e| format!("Cannot open output file: {e}"))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(&generate_header(&cfg))
        .map_err(|e| format!("Write failed: {e}"))?;
    writer
        .write_all(&heights)
        .map_err(|e| format!("Write failed: {e}"))?;

    if cfg.emit_colors {
        let colors = derive_colors(&heights, dims, seed);
        writer
            .write_all(&colors)
            .map_err(|e| format!("Write failed: {e}"))?;
    }

    writer.flush().map_err(|e| format!("Write failed: {e}"))?;
    println!("Done: {:?}", cfg.file_name);
    Ok(())
}

pub fn generate_heights(dims: Vector2<usize>, generator: GeneratorConfig, seed: u64) -> Vec<u8> {
    match generator {
        GeneratorConfig::Noise {
            feature_scale,
            octaves,
        } => noise::generate(dims, feature_scale, octaves, seed),
        GeneratorConfig::Hills { count, radius } => hills::generate(dims, count, radius, seed),
        GeneratorConfig::Solid { elevation } => solid::generate(dims, elevation),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generators_fill_the_whole_grid() {
        let dims = vector![32, 16];
        for generator in [
            GeneratorConfig::Noise {
                feature_scale: 8.0,
                octaves: 3,
            },
            GeneratorConfig::Hills {
                count: 4,
                radius: 6.0,
            },
            GeneratorConfig::Solid { elevation: 17 },
        ] {
            let heights = generate_heights(dims, generator, 1);
            assert_eq!(heights.len(), 32 * 16);
        }
    }

    #[test]
    fn same_seed_reproduces_the_terrain() {
        let dims = vector![64, 64];
        let generator = GeneratorConfig::Noise {
            feature_scale: 16.0,
            octaves: 4,
        };

        let a = generate_heights(dims, generator, 42);
        let b = generate_heights(dims, generator, 42);
        let c = generate_heights(dims, generator, 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
