//! Presentation sink: binary PPM frames on disk

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use nalgebra::Vector2;
use voxelspace_lib::PixelLayout;

/// Write one packed frame as a P6 PPM image
pub fn write_ppm<P>(
    path: P,
    resolution: Vector2<usize>,
    buffer: &[u32],
    layout: &PixelLayout,
) -> std::io::Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write!(writer, "P6\n{} {}\n255\n", resolution.x, resolution.y)?;
    for &word in buffer {
        let [r, g, b, _a] = layout.unpack(word);
        writer.write_all(&[r, g, b])?;
    }
    writer.flush()
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn ppm_header_and_payload_size() {
        let layout = PixelLayout::detect();
        let buffer = vec![layout.pack(1, 2, 3, 255); 6];
        let path = std::env::temp_dir().join("terra_app_sink_test.ppm");

        write_ppm(&path, vector![3, 2], &buffer, &layout).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 6 * 3);
        assert_eq!(&bytes[bytes.len() - 3..], &[1, 2, 3]);

        std::fs::remove_file(path).ok();
    }
}
