use nalgebra::{point, vector, Vector2};

use crate::{
    camera::FlightCamera,
    common::{PixelLayout, ProjectionTable},
    terrain::HeightColorMap,
};

use super::{RenderOptions, ShadingPolicy};

/// The voxel-space renderer.
///
/// For every screen column a ray fan is marched front to back through the
/// heightmap. Each row band walks the ray forward until its height dips
/// below the terrain; the first hit wins, tracked by a per-pixel depth
/// buffer. Columns abort once the accumulated distance reaches the depth
/// cap, leaving the remaining rows as sky.
pub struct Raycaster {
    map: HeightColorMap,
    projection: ProjectionTable,
    layout: PixelLayout,
    options: RenderOptions,
    depth: Vec<f32>,
}

impl Raycaster {
    pub fn new(
        map: HeightColorMap,
        layout: PixelLayout,
        options: RenderOptions,
    ) -> Result<Raycaster, &'static str> {
        if options.resolution.x == 0 || options.resolution.y == 0 {
            return Err("Render resolution has zero area");
        }
        if options.shading == ShadingPolicy::TextureColored && !map.has_colors() {
            return Err("Texture shading needs a map with a colormap");
        }
        let projection = ProjectionTable::new(options.resolution, options.xfov);
        let depth = vec![options.max_depth; options.resolution.x * options.resolution.y];
        Ok(Raycaster {
            map,
            projection,
            layout,
            options,
            depth,
        })
    }

    pub fn resolution(&self) -> Vector2<usize> {
        self.options.resolution
    }

    /// Frame buffer length in pixels
    pub fn buffer_len(&self) -> usize {
        self.options.resolution.x * self.options.resolution.y
    }

    pub fn map(&self) -> &HeightColorMap {
        &self.map
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Nearest hit distance per pixel of the last rendered frame
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Render one frame into `buffer` (row-major, `buffer_len()` words).
    ///
    /// Both the frame and the depth buffer are fully rewritten; nothing
    /// survives from the previous frame.
    pub fn render(&mut self, camera: &FlightCamera, buffer: &mut [u32]) {
        let width = self.options.resolution.x;
        let height = self.options.resolution.y;
        let max_depth = self.options.max_depth;

        assert_eq!(buffer.len(), width * height);
        debug_assert!(camera.is_finite());

        self.depth.fill(max_depth);
        buffer.fill(self.layout.clear_color());

        for c in 0..width {
            let theta = self.projection.column_angle(c) + camera.theta;
            let step_dir = vector![theta.cos(), theta.sin()];
            // start one unit step ahead of the camera
            let mut ray = point![camera.x, camera.y] + step_dir;
            let mut distance = 1.0f32;

            'rows: for r in (0..height).rev() {
                if distance >= max_depth {
                    // rows above are sky and already clear-colored
                    break 'rows;
                }
                let decline = self.projection.row_angle(r) + camera.pitch;
                let step_z = decline.sin();
                let mut rz = camera.z + distance * step_z;

                while distance < max_depth {
                    let cell = self.map.cell_index(ray.x, ray.y);
                    let ground = self.map.height_at(cell);
                    if rz < ground as f32 {
                        let pixel = c + r * width;
                        // front-to-back march makes the first hit the
                        // nearest one, the depth test guards reordering
                        if distance < self.depth[pixel] {
                            buffer[pixel] = self.shade(cell, ground, distance);
                            self.depth[pixel] = distance;
                        }
                        continue 'rows;
                    }
                    let step = self.options.schedule.step_at(distance, max_depth);
                    distance += step;
                    ray += step_dir * step;
                    rz += step_z * step;
                }
            }
        }
    }

    fn shade(&self, cell: usize, ground: u8, distance: f32) -> u32 {
        match self.options.shading {
            ShadingPolicy::HeightTinted => self.layout.pack(0xFF, ground, 0xFF - ground, 0xFF),
            ShadingPolicy::TextureColored => self
                .map
                .color_at(cell)
                // colormap presence is validated at construction
                .unwrap_or_else(|| self.layout.clear_color()),
            ShadingPolicy::DistanceShaded => {
                let v = ((512.0 - distance) * 0.5).clamp(0.0, 255.0) as u8;
                self.layout.pack(v, v, v, 0xFF)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use crate::test_helpers::{colored_flat_map, flat_map, small_options, spike_map};

    use super::*;

    const CLEAR: u32 = 0xFFFF_FFFF;

    fn render_once(raycaster: &mut Raycaster, camera: &FlightCamera) -> Vec<u32> {
        let mut buffer = vec![0u32; raycaster.buffer_len()];
        raycaster.render(camera, &mut buffer);
        buffer
    }

    #[test]
    fn flat_map_splits_into_terrain_and_sky() {
        let layout = PixelLayout::detect();
        let map = flat_map(64, 64, 0);
        let mut raycaster = Raycaster::new(map, layout, small_options(64, 48, 128.0)).unwrap();
        let camera = FlightCamera::new(8.0, 8.0, 10.0);

        let buffer = render_once(&mut raycaster, &camera);
        let ground_color = layout.pack(0xFF, 0, 0xFF, 0xFF);

        for c in 0..64 {
            // per column: sky on top, one contiguous terrain band below
            let first_hit = (0..48).find(|&r| buffer[c + r * 64] != CLEAR);
            let first_hit = first_hit.expect("column should reach the terrain");
            assert!(first_hit > 0, "top row must stay sky");
            for r in 0..48 {
                let pixel = c + r * 64;
                if r < first_hit {
                    assert_eq!(buffer[pixel], CLEAR);
                    assert_eq!(raycaster.depth_buffer()[pixel], 128.0);
                } else {
                    assert_eq!(buffer[pixel], ground_color);
                    assert!(raycaster.depth_buffer()[pixel] < 128.0);
                }
            }
        }
    }

    #[test]
    fn spike_ahead_writes_near_depth() {
        let layout = PixelLayout::detect();
        let map = spike_map(16, 16, vector![6, 4], 255);
        let mut raycaster = Raycaster::new(map, layout, small_options(17, 12, 128.0)).unwrap();
        // facing +x, spike two cells ahead
        let camera = FlightCamera::new(4.5, 4.5, 100.0);

        let buffer = render_once(&mut raycaster, &camera);
        let spike_color = layout.pack(0xFF, 0xFF, 0, 0xFF);
        let center = 17 / 2;

        for r in 0..12 {
            assert_eq!(buffer[center + r * 17], spike_color);
            assert!(raycaster.depth_buffer()[center + r * 17] < 5.0);
        }
        // leftmost column looks past the spike at empty terrain
        for r in 0..12 {
            assert_eq!(buffer[r * 17], CLEAR);
            assert_eq!(raycaster.depth_buffer()[r * 17], 128.0);
        }
    }

    #[test]
    fn buffers_reset_between_frames() {
        let layout = PixelLayout::detect();
        let map = spike_map(16, 16, vector![6, 4], 255);
        let mut raycaster = Raycaster::new(map, layout, small_options(17, 12, 128.0)).unwrap();

        let mut camera = FlightCamera::new(4.5, 4.5, 100.0);
        let first = render_once(&mut raycaster, &camera);
        assert!(first.iter().any(|&px| px != CLEAR));

        // turn around: the spike is behind, nothing in view, so any spike
        // pixel or depth surviving would be frame leakage
        camera.theta = std::f32::consts::PI;
        let second = render_once(&mut raycaster, &camera);
        assert!(second.iter().all(|&px| px == CLEAR));
        assert!(raycaster.depth_buffer().iter().all(|&d| d == 128.0));
    }

    #[test]
    fn texture_shading_copies_map_texels() {
        let layout = PixelLayout::detect();
        let texel = [10, 200, 30, 255];
        let map = colored_flat_map(32, 32, 50, texel, &layout);
        let options = RenderOptions {
            shading: ShadingPolicy::TextureColored,
            ..small_options(16, 12, 64.0)
        };
        let mut raycaster = Raycaster::new(map, layout, options).unwrap();
        let camera = FlightCamera::new(8.0, 8.0, 60.0);

        let buffer = render_once(&mut raycaster, &camera);
        let expected = layout.pack(texel[0], texel[1], texel[2], texel[3]);

        assert!(buffer.iter().any(|&px| px != CLEAR));
        for &px in buffer.iter().filter(|&&px| px != CLEAR) {
            assert_eq!(px, expected);
        }
    }

    #[test]
    fn texture_shading_requires_a_colormap() {
        let layout = PixelLayout::detect();
        let map = flat_map(8, 8, 0);
        let options = RenderOptions {
            shading: ShadingPolicy::TextureColored,
            ..small_options(16, 12, 64.0)
        };

        assert!(Raycaster::new(map, layout, options).is_err());
    }

    #[test]
    fn distance_shading_darkens_uniformly() {
        let layout = PixelLayout::detect();
        let map = flat_map(32, 32, 50);
        let options = RenderOptions {
            shading: ShadingPolicy::DistanceShaded,
            ..small_options(16, 12, 64.0)
        };
        let mut raycaster = Raycaster::new(map, layout, options).unwrap();
        let camera = FlightCamera::new(8.0, 8.0, 60.0);

        let buffer = render_once(&mut raycaster, &camera);

        assert!(buffer.iter().any(|&px| px != CLEAR));
        for &px in buffer.iter().filter(|&&px| px != CLEAR) {
            let [r, g, b, a] = layout.unpack(px);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 0xFF);
        }
    }

    #[test]
    fn high_camera_over_flat_ground_terminates_with_empty_frame() {
        let layout = PixelLayout::detect();
        let map = flat_map(64, 64, 0);
        let mut raycaster = Raycaster::new(map, layout, small_options(32, 24, 512.0)).unwrap();
        // too high for any ray to dip below elevation 0 within the cap
        let camera = FlightCamera::new(8.0, 8.0, 300.0);

        let buffer = render_once(&mut raycaster, &camera);

        assert!(buffer.iter().all(|&px| px == CLEAR));
        assert!(raycaster.depth_buffer().iter().all(|&d| d == 512.0));
    }
}

