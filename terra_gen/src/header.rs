use byteorder::{ByteOrder, LittleEndian};
use voxelspace_lib::premade::parse::{TERRA_FLAG_COLORS, TERRA_HEADER_LEN, TERRA_MAGIC};

use crate::config::Config;

/// `.terra` header
/// little-endian, total length 13B
/// 1. magic -- `TERA`
/// 2. dimensions -- 2x 32bit ints (x,y)
/// 3. flags -- 1 byte, bit 0 marks a trailing colormap
/// 4. data -- x*y 8bit heights, then optionally x*y R,G,B,A texels
pub fn generate_header(cfg: &Config) -> Vec<u8> {
    let mut vec = vec![0; TERRA_HEADER_LEN];
    let slice = &mut vec[..];

    slice[0..4].copy_from_slice(TERRA_MAGIC);
    LittleEndian::write_u32(&mut slice[4..8], cfg.dims.x);
    LittleEndian::write_u32(&mut slice[8..12], cfg.dims.y);
    slice[12] = if cfg.emit_colors { TERRA_FLAG_COLORS } else { 0 };

    vec
}
