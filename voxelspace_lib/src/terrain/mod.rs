mod height_map;
mod map_builder;

pub use height_map::HeightColorMap;
pub use map_builder::{build_map, DataSource, MapMetadata};
