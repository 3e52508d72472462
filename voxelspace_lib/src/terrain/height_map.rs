use nalgebra::Vector2;

/// Terrain asset: a height grid and an optional matching color grid.
///
/// Both grids are row-major, `size.x * size.y` cells. Addressing is
/// toroidal: any finite coordinate wraps onto the grid on both axes,
/// negative values included. Built once at startup, read-only afterwards.
pub struct HeightColorMap {
    size: Vector2<usize>,
    heights: Vec<u8>,
    colors: Option<Vec<u32>>,
}

impl std::fmt::Debug for HeightColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeightColorMap")
            .field("size", &self.size)
            .field("colors", &self.colors.is_some())
            .finish()
    }
}

impl HeightColorMap {
    /// Build from already decoded grids.
    ///
    /// Color texels must already be packed for the active pixel layout.
    pub fn from_parts(
        size: Vector2<usize>,
        heights: Vec<u8>,
        colors: Option<Vec<u32>>,
    ) -> Result<HeightColorMap, &'static str> {
        let cells = size.x * size.y;
        if cells == 0 {
            return Err("Map has zero area");
        }
        if heights.len() != cells {
            return Err("Height grid does not match map dimensions");
        }
        if let Some(ref colors) = colors {
            if colors.len() != cells {
                return Err("Color grid does not match map dimensions");
            }
        }
        Ok(HeightColorMap {
            size,
            heights,
            colors,
        })
    }

    pub fn size(&self) -> Vector2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Wrap a fractional coordinate onto an axis of `dim` cells.
    ///
    /// Explicit floor before the modulo; a negative remainder gets the
    /// dimension added back. Truncation instead of floor would fold the
    /// (-1, 0) range onto cell 0 and break toroidal addressing.
    fn wrap_axis(coord: f32, dim: usize) -> usize {
        let dim = dim as i64;
        let mut wrapped = (coord.floor() as i64) % dim;
        if wrapped < 0 {
            wrapped += dim;
        }
        wrapped as usize
    }

    /// Flat index of the cell containing `(x, y)`, after wraparound
    pub fn cell_index(&self, x: f32, y: f32) -> usize {
        Self::wrap_axis(x, self.size.x) + Self::wrap_axis(y, self.size.y) * self.size.x
    }

    /// Ground elevation under `(x, y)`
    pub fn sample_height(&self, x: f32, y: f32) -> u8 {
        self.heights[self.cell_index(x, y)]
    }

    /// Packed texel under `(x, y)`, `None` when the asset has no colormap
    pub fn sample_color(&self, x: f32, y: f32) -> Option<u32> {
        let index = self.cell_index(x, y);
        self.colors.as_ref().map(|colors| colors[index])
    }

    pub fn height_at(&self, index: usize) -> u8 {
        self.heights[index]
    }

    pub fn color_at(&self, index: usize) -> Option<u32> {
        self.colors.as_ref().map(|colors| colors[index])
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    fn ramp_map() -> HeightColorMap {
        // 4x3, heights equal to the flat index
        let heights = (0u8..12).collect();
        HeightColorMap::from_parts(vector![4, 3], heights, None).unwrap()
    }

    #[test]
    fn zero_area_rejected() {
        assert!(HeightColorMap::from_parts(vector![0, 4], vec![], None).is_err());
        assert!(HeightColorMap::from_parts(vector![4, 0], vec![], None).is_err());
    }

    #[test]
    fn mismatched_grids_rejected() {
        assert!(HeightColorMap::from_parts(vector![2, 2], vec![0; 3], None).is_err());
        assert!(HeightColorMap::from_parts(vector![2, 2], vec![0; 4], Some(vec![0; 5])).is_err());
    }

    #[test]
    fn wraparound_is_toroidal() {
        let map = ramp_map();

        assert_eq!(map.sample_height(1.0, 2.0), 9);
        // full turns on either axis land on the same cell
        for k in [-3.0f32, -1.0, 1.0, 2.0] {
            assert_eq!(map.sample_height(1.0 + k * 4.0, 2.0), 9);
            assert_eq!(map.sample_height(1.0, 2.0 + k * 3.0), 9);
        }
    }

    #[test]
    fn negative_coordinates_wrap_without_clamping() {
        let map = ramp_map();

        // -0.5 floors to -1, which wraps to the last column
        assert_eq!(map.sample_height(-0.5, 0.0), 3);
        assert_eq!(map.sample_height(0.0, -0.5), 8);
        assert_eq!(map.sample_height(-4.5, -3.5), 11);
    }

    #[test]
    fn fractional_coordinates_share_their_cell() {
        let map = ramp_map();

        assert_eq!(map.cell_index(1.0, 1.0), map.cell_index(1.9, 1.9));
        assert_ne!(map.cell_index(1.9, 1.0), map.cell_index(2.0, 1.0));
    }

    #[test]
    fn colors_follow_the_same_indexing() {
        let colors = (0u32..4).collect();
        let map = HeightColorMap::from_parts(vector![2, 2], vec![0; 4], Some(colors)).unwrap();

        assert_eq!(map.sample_color(1.0, 1.0), Some(3));
        assert_eq!(map.sample_color(-1.0, -1.0), Some(3));
        assert_eq!(map.sample_color(3.0, 0.0), Some(1));
    }
}
