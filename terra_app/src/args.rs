//! Argument parsing
//! Uses library `clap`

use clap::{Arg, Command, ValueHint};

pub fn is_positive_number(num: &str) -> Result<(), String> {
    match num.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        Ok(_) => Err("Number must be greater than 0".into()),
        Err(_) => Err("Number required".into()),
    }
}

const SHADING_NAMES: &[&str] = &["height", "texture", "distance"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Terra-app")
        .version("0.1.0")
        .about("Voxel-space terrain flight demo")
        .arg(
            Arg::new("map")
                .help("Path to a .terra map asset")
                .long("map")
                .short('m')
                .required(true)
                .takes_value(true)
                .value_name("FILE")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("frames")
                .help("Number of frames to fly")
                .long("frames")
                .short('f')
                .value_name("N")
                .default_value("300")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("shading")
                .help("Shading policy")
                .long("shading")
                .short('s')
                .value_name("NAME")
                .default_value("height")
                .possible_values(SHADING_NAMES),
        )
        .arg(
            Arg::new("width")
                .help("Frame width, pixels")
                .long("width")
                .value_name("PX")
                .default_value("640")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("height")
                .help("Frame height, pixels")
                .long("height")
                .value_name("PX")
                .default_value("480")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("max-depth")
                .help("Ray depth cap, map cells")
                .long("max-depth")
                .value_name("CELLS")
                .default_value("512")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("output-file")
                .help("Where to write the final frame (PPM)")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .value_hint(ValueHint::FilePath)
                .default_value("frame.ppm"),
        )
}
