use nalgebra::Vector2;

/// Precomputed angular offsets for every screen column and row.
///
/// `column_angle` spreads the horizontal field of view across the columns,
/// `row_angle` spreads the vertical field of view across the rows. The row
/// table is oriented so row 0 (top of the screen) gets the highest angle,
/// i.e. looks up.
///
/// Built once per resolution, read-only afterwards.
pub struct ProjectionTable {
    resolution: Vector2<usize>,
    column: Vec<f32>,
    row: Vec<f32>,
}

impl ProjectionTable {
    /// Vertical field of view as a fraction of the horizontal one
    pub const YFOV_RATIO: f32 = 0.75;

    pub fn new(resolution: Vector2<usize>, xfov: f32) -> ProjectionTable {
        let yfov = xfov * Self::YFOV_RATIO;
        let (width, height) = (resolution.x, resolution.y);

        let mut column = Vec::with_capacity(width);
        for c in 0..width {
            column.push(xfov * (c as f32 / width as f32) - xfov * 0.5);
        }

        let mut row = Vec::with_capacity(height);
        for r in 0..height {
            row.push(yfov * ((height - r) as f32 / height as f32) - yfov * 0.5);
        }

        ProjectionTable {
            resolution,
            column,
            row,
        }
    }

    pub fn resolution(&self) -> Vector2<usize> {
        self.resolution
    }

    /// Yaw offset of screen column `c` from the camera's forward direction
    pub fn column_angle(&self, c: usize) -> f32 {
        self.column[c]
    }

    /// Declination offset of screen row `r`
    pub fn row_angle(&self, r: usize) -> f32 {
        self.row[r]
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    const XFOV: f32 = 0.3 * std::f32::consts::PI;

    #[test]
    fn column_table_spans_fov() {
        let table = ProjectionTable::new(vector![640, 480], XFOV);

        assert!((table.column_angle(0) + XFOV * 0.5).abs() < 1e-6);
        assert!((table.column_angle(320)).abs() < 1e-6);
        // last column stops one step short of +xfov/2
        assert!(table.column_angle(639) < XFOV * 0.5);
        assert!(table.column_angle(639) > XFOV * 0.4);
    }

    #[test]
    fn row_table_top_looks_up() {
        let table = ProjectionTable::new(vector![640, 480], XFOV);
        let yfov = XFOV * ProjectionTable::YFOV_RATIO;

        assert!((table.row_angle(0) - yfov * 0.5).abs() < 1e-6);
        for r in 1..480 {
            assert!(table.row_angle(r) < table.row_angle(r - 1));
        }
        assert!(table.row_angle(479) > -yfov * 0.5);
    }
}
