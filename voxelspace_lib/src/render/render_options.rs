use nalgebra::{vector, Vector2};

/// How the color of a terrain hit is produced.
///
/// Picked once at renderer setup; the march loop never branches on dead
/// policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingPolicy {
    /// Height-based palette: full red, green rises with elevation, blue
    /// falls with it. Needs no color asset.
    HeightTinted,
    /// Texel of the map cell that produced the hit, independent of depth.
    /// Needs a map with a colormap.
    TextureColored,
    /// Uniform grey falling off with ray distance
    DistanceShaded,
}

/// Distance-adaptive step schedule for the ray march.
///
/// Far away a coarse step loses little accuracy and bounds the per-column
/// work; breakpoints are fractions of the maximum ray depth so one schedule
/// works for any depth cap. This is a quality/performance tradeoff knob,
/// not a semantic contract.
#[derive(Debug, Clone)]
pub struct StepSchedule {
    /// `(start fraction, step length)`, checked farthest band first
    bands: Vec<(f32, f32)>,
}

impl StepSchedule {
    pub fn new(mut bands: Vec<(f32, f32)>) -> StepSchedule {
        bands.sort_by(|a, b| b.0.total_cmp(&a.0));
        StepSchedule { bands }
    }

    /// Step length to take at `distance` under a `max_depth` cap.
    /// Unit steps near the camera.
    pub fn step_at(&self, distance: f32, max_depth: f32) -> f32 {
        for &(start, step) in &self.bands {
            if distance > start * max_depth {
                return step;
            }
        }
        1.0
    }
}

impl Default for StepSchedule {
    /// Unit steps up close, 1.5 past 30% of max depth, 2 past half
    fn default() -> StepSchedule {
        StepSchedule::new(vec![(0.3, 1.5), (0.5, 2.0)])
    }
}

/// Renderer configuration, resolved once at setup
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub resolution: Vector2<usize>,
    /// Horizontal field of view, radians; vertical is derived from it
    pub xfov: f32,
    /// Hard cap on ray distance, in map cells
    pub max_depth: f32,
    pub shading: ShadingPolicy,
    pub schedule: StepSchedule,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            resolution: vector![640, 480],
            xfov: 0.3 * std::f32::consts::PI,
            max_depth: 512.0,
            shading: ShadingPolicy::HeightTinted,
            schedule: StepSchedule::default(),
        }
    }
}
