use std::{ffi::OsString, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector2};

/// Transform `Values` into `Vector`
fn values_to_vector2<T>(args: &ArgMatches, key: &str) -> Vector2<T>
where
    T: FromStr + Copy,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    let vals: Vec<T> = args
        .values_of(key)
        .unwrap()
        .into_iter()
        .map(|v| v.parse::<T>().expect("Parse error"))
        .collect();
    vector![vals[0], vals[1]]
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of the map grid
    pub dims: Vector2<u32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Derive a colormap alongside the heights
    pub emit_colors: bool,
    /// Output file name
    pub file_name: OsString,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        // Dims
        let dims = values_to_vector2(&args, "dims");
        // Generator
        let generator = GeneratorConfig::from_args(&args)?;
        // Colormap
        let emit_colors = args.is_present("colors");
        // File name
        let file_name = args.value_of_os("output-file").unwrap().into(); // Unwrap safe, has default value
                                                                         // Seed
        let seed = args.value_of("seed").map(|s| s.parse().unwrap());

        Ok(Config {
            dims,
            generator,
            emit_colors,
            file_name,
            seed,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy)]
pub enum GeneratorConfig {
    /// Fractal value noise terrain
    Noise {
        /// Cells per noise feature
        feature_scale: f32,
        octaves: u32,
    },
    /// Smooth hills scattered over a flat plain
    Hills { count: u32, radius: f32 },
    /// Uniform elevation everywhere
    Solid { elevation: u8 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name = args.value_of("generator").unwrap(); // required arg
        let generator = match name {
            "noise" => GeneratorConfig::Noise {
                feature_scale: args.value_of("feature-scale").unwrap().parse().unwrap(),
                octaves: args.value_of("octaves").unwrap().parse().unwrap(),
            },
            "hills" => GeneratorConfig::Hills {
                count: args.value_of("n-of-hills").unwrap().parse().unwrap(),
                radius: args.value_of("hill-radius").unwrap().parse().unwrap(),
            },
            "solid" => {
                let sample = args
                    .value_of("sample")
                    .ok_or("Solid generator needs --sample")?;
                GeneratorConfig::Solid {
                    elevation: sample.parse().unwrap(),
                }
            }
            _ => return Err(format!("Unknown generator {name}")),
        };
        Ok(generator)
    }
}
