//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command, ValueHint};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn can_fit_u8(num: &str) -> Result<(), String> {
    let n = num.parse::<u8>();
    match n {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <0;255>".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n > 0.0 {
                Ok(())
            } else {
                Err("Number must be greater than 0.0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

const GENERATOR_NAMES: &[&str] = &["noise", "hills", "solid"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Terra-gen")
        .version("0.1.0")
        .about("Terrain map generator")
        .arg(
            Arg::new("dims")
                .help("Dimensions of map grid")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(2)
                .value_names(&["X", "Y"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .requires_ifs(&[
                    ("solid", "sample"), // if solid is set, require option sample
                ])
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("colors")
                .help("Also derive a colormap from the terrain")
                .long("colors")
                .short('c'),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("sample")
                .help("Elevation of a solid map")
                .long("sample")
                .value_name("BYTE")
                .validator(can_fit_u8),
        )
        .arg(
            Arg::new("feature-scale")
                .help("Noise feature scale, larger means smoother terrain")
                .long("feature-scale")
                .value_name("CELLS")
                .default_value("64")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("octaves")
                .help("Number of noise octaves")
                .long("octaves")
                .value_name("N")
                .default_value("4")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("n-of-hills")
                .help("Number of hills to scatter")
                .long("n-of-hills")
                .value_name("N")
                .default_value("64")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("hill-radius")
                .help("Mean hill radius, cells")
                .long("hill-radius")
                .value_name("CELLS")
                .default_value("24")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("output-file")
                .help("Name of output file")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .value_hint(ValueHint::FilePath)
                .default_value("map.terra"),
        )
}
