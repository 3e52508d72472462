/// Bit shifts placing the logical R, G, B, A channels into a packed 32-bit
/// pixel word.
///
/// The frame buffer is presented as raw bytes in R, G, B, A order, but the
/// renderer writes whole `u32` words, so the shift of each channel depends
/// on the byte order of the platform. Rather than hard-coding it, probe: put
/// a marker byte into each byte position, reinterpret as a word and locate
/// the lowest set bit.
///
/// Detect once at startup and pass by reference into the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub red_shift: u32,
    pub green_shift: u32,
    pub blue_shift: u32,
    pub alpha_shift: u32,
}

impl PixelLayout {
    pub fn detect() -> PixelLayout {
        let mut shifts = [0u32; 4];
        for (position, shift) in shifts.iter_mut().enumerate() {
            let mut bytes = [0u8; 4];
            bytes[position] = 1;
            let word = u32::from_ne_bytes(bytes);
            // trailing_zeros == log2(word & -word), the rightmost set bit
            *shift = word.trailing_zeros();
        }
        PixelLayout {
            red_shift: shifts[0],
            green_shift: shifts[1],
            blue_shift: shifts[2],
            alpha_shift: shifts[3],
        }
    }

    pub fn pack(&self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << self.red_shift)
            | ((g as u32) << self.green_shift)
            | ((b as u32) << self.blue_shift)
            | ((a as u32) << self.alpha_shift)
    }

    pub fn unpack(&self, word: u32) -> [u8; 4] {
        [
            (word >> self.red_shift) as u8,
            (word >> self.green_shift) as u8,
            (word >> self.blue_shift) as u8,
            (word >> self.alpha_shift) as u8,
        ]
    }

    /// Frame clear value, opaque white in any byte order
    pub fn clear_color(&self) -> u32 {
        0xFFFF_FFFF
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shifts_cover_all_byte_positions() {
        let layout = PixelLayout::detect();
        let mut shifts = [
            layout.red_shift,
            layout.green_shift,
            layout.blue_shift,
            layout.alpha_shift,
        ];
        shifts.sort_unstable();
        assert_eq!(shifts, [0, 8, 16, 24]);
    }

    #[test]
    fn pack_unpack_roundtrip() {
        let layout = PixelLayout::detect();
        let word = layout.pack(1, 2, 3, 255);
        assert_eq!(layout.unpack(word), [1, 2, 3, 255]);
    }

    #[test]
    fn packed_word_has_rgba_byte_order() {
        let layout = PixelLayout::detect();
        let word = layout.pack(10, 20, 30, 40);
        assert_eq!(word.to_ne_bytes(), [10, 20, 30, 40]);
    }
}
