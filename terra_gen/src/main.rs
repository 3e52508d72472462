use config::Config;

mod args;
mod colormap;
mod config;
mod file;
mod generators;
mod header;

use crate::{args::get_command, generators::generate_map};

pub fn main() {
    let cmd = get_command();

    let args = cmd.get_matches();

    let cfg = Config::from_args(args);

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    println!("Generating map...");
    println!("{:?}", cfg);

    if let Err(e) = generate_map(cfg) {
        eprintln!("Error: {e}");
    }
}
