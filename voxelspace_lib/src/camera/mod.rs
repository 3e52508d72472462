mod autopilot;

pub use autopilot::{Autopilot, Steering, FRAME_TIME_MS};

/// Flight camera pose, in map-space units.
///
/// `x`/`y` always stay wrapped into the map's valid range; the autopilot
/// re-wraps them after every advance.
#[derive(Debug, Clone, Copy)]
pub struct FlightCamera {
    pub x: f32,
    pub y: f32,
    /// Elevation, same vertical unit as the heightmap samples
    pub z: f32,
    /// Vertical velocity, units per nominal frame
    pub dz: f32,
    /// Yaw, radians
    pub theta: f32,
    /// Fixed vertical look offset, radians, constant per run
    pub pitch: f32,
}

impl FlightCamera {
    pub fn new(x: f32, y: f32, z: f32) -> FlightCamera {
        FlightCamera {
            x,
            y,
            z,
            dz: 0.0,
            theta: 0.0,
            pitch: -std::f32::consts::PI * 0.05,
        }
    }

    /// A NaN in any field silently disables the depth compare, so the
    /// controller checks this before handing the camera to the renderer.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.dz.is_finite()
            && self.theta.is_finite()
            && self.pitch.is_finite()
    }
}
