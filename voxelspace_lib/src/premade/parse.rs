use std::path::Path;

use nalgebra::vector;
use nom::{
    bytes::complete::tag,
    number::complete::{le_u32, u8 as byte},
    sequence::tuple,
    IResult,
};

use crate::{
    common::PixelLayout,
    terrain::{build_map, DataSource, HeightColorMap, MapMetadata},
};

/// `.terra` map asset
///
/// Little endian, header length 13B:
/// 1. magic -- `TERA`
/// 2. width, height -- 2x 32bit ints
/// 3. flags -- 1 byte, bit 0 set when a colormap follows the heights
/// 4. heights -- width*height 8bit samples, row-major
/// 5. colors (optional) -- width*height texels, 4 bytes each, R,G,B,A order
pub const TERRA_MAGIC: &[u8; 4] = b"TERA";
pub const TERRA_HEADER_LEN: usize = 13;
pub const TERRA_FLAG_COLORS: u8 = 0b0000_0001;

/// Load a map from a `.terra` file
///
/// Common pattern: mmap the file, parse the header, repack texels for
/// `layout`. Any failure aborts before a partial map can escape.
pub fn from_file<P>(path: P, layout: &PixelLayout) -> Result<HeightColorMap, &'static str>
where
    P: AsRef<Path>,
{
    let ds = DataSource::from_file(path)?;
    let metadata = terra_parser(ds)?;
    build_map(metadata, layout)
}

pub fn terra_parser(data_source: DataSource) -> Result<MapMetadata, &'static str> {
    let (size, flags) = {
        let slice = data_source.get_slice();
        let parse_res: IResult<_, _> = terra_header(slice);
        match parse_res {
            Ok((_rest, (width, height, flags))) => {
                (vector![width as usize, height as usize], flags)
            }
            Err(_) => return Err("Parse error"),
        }
    };

    let cells = size.x * size.y;
    let colors_offset = if flags & TERRA_FLAG_COLORS != 0 {
        Some(TERRA_HEADER_LEN + cells)
    } else {
        None
    };

    Ok(MapMetadata {
        size: Some(size),
        heights_offset: Some(TERRA_HEADER_LEN),
        colors_offset,
        data: Some(data_source),
    })
}

fn terra_header(s: &[u8]) -> IResult<&[u8], (u32, u32, u8)> {
    let (s, _) = tag(&TERRA_MAGIC[..])(s)?;
    let (s, (width, height, flags)) = tuple((le_u32, le_u32, byte))(s)?;
    Ok((s, (width, height, flags)))
}
