use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};
use nalgebra::Vector2;

use crate::common::PixelLayout;

use super::HeightColorMap;

/// Bytes backing a map asset, either owned or memory mapped
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource, &'static str>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err("Path does not lead to a file");
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return Err("Cannot open file"),
        };

        let mmap = unsafe { MmapOptions::new().map(&file) };
        let mmap = match mmap {
            Ok(mmap) => mmap,
            Err(_) => return Err("Cannot create memory map"),
        };

        Ok(DataSource::Mmap(mmap))
    }
}

/// What a map parser extracted from an asset, input to [`build_map`]
pub struct MapMetadata {
    /// Grid dimensions
    pub size: Option<Vector2<usize>>,
    /// Byte offset of the height grid inside `data`
    pub heights_offset: Option<usize>,
    /// Byte offset of the R,G,B,A texel grid, `None` when the asset has none
    pub colors_offset: Option<usize>,
    /// Raw asset bytes
    pub data: Option<DataSource>,
}

/// Assemble a [`HeightColorMap`] from parsed metadata.
///
/// Texels are stored in the asset as R,G,B,A byte quadruples; they get
/// repacked here for the active pixel layout, so the renderer can copy them
/// into the frame buffer untouched.
pub fn build_map(
    metadata: MapMetadata,
    layout: &PixelLayout,
) -> Result<HeightColorMap, &'static str> {
    let size = metadata.size.ok_or("No map dimensions passed")?;
    let heights_offset = metadata.heights_offset.ok_or("No height data offset")?;
    let data = metadata.data.ok_or("No map data passed")?;
    let slice = data.get_slice();

    let cells = size.x * size.y;
    if cells == 0 {
        return Err("Map has zero area");
    }

    let heights_end = heights_offset + cells;
    if slice.len() < heights_end {
        return Err("Map file too short for its height grid");
    }
    let heights = slice[heights_offset..heights_end].to_vec();

    let colors = match metadata.colors_offset {
        Some(offset) => {
            let end = offset + cells * 4;
            if slice.len() < end {
                return Err("Map file too short for its color grid");
            }
            let packed = slice[offset..end]
                .chunks_exact(4)
                .map(|texel| layout.pack(texel[0], texel[1], texel[2], texel[3]))
                .collect();
            Some(packed)
        }
        None => None,
    };

    HeightColorMap::from_parts(size, heights, colors)
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn builds_heights_and_repacked_colors() {
        let layout = PixelLayout::detect();
        let mut bytes = vec![7u8, 8, 9, 10];
        for texel in [[1u8, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]] {
            bytes.extend_from_slice(&texel);
        }
        let metadata = MapMetadata {
            size: Some(vector![2, 2]),
            heights_offset: Some(0),
            colors_offset: Some(4),
            data: Some(DataSource::from_vec(bytes)),
        };

        let map = build_map(metadata, &layout).unwrap();
        assert_eq!(map.sample_height(0.0, 0.0), 7);
        assert_eq!(map.sample_height(1.0, 1.0), 10);
        assert_eq!(map.sample_color(1.0, 0.0), Some(layout.pack(5, 6, 7, 8)));
    }

    #[test]
    fn truncated_file_rejected() {
        let layout = PixelLayout::detect();
        let metadata = MapMetadata {
            size: Some(vector![4, 4]),
            heights_offset: Some(0),
            colors_offset: None,
            data: Some(DataSource::from_vec(vec![0u8; 10])),
        };

        assert!(build_map(metadata, &layout).is_err());
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        assert!(DataSource::from_file("does/not/exist.terra").is_err());
    }
}
