use crate::terrain::HeightColorMap;

use super::FlightCamera;

/// Nominal frame duration the motion constants are tuned for, milliseconds
pub const FRAME_TIME_MS: f32 = 16.7;

/// How the autopilot turns the camera each frame
#[derive(Debug, Clone, Copy)]
pub enum Steering {
    /// `theta += rate * elapsed_frames`
    TurnRate(f32),
    /// `theta = center + amplitude * sin(time * rate)`, a scripted sweep
    Oscillate {
        center: f32,
        amplitude: f32,
        /// Radians per millisecond of scheduler time
        rate: f32,
    },
}

/// Terrain-hugging flight controller.
///
/// Runs once per frame before rendering: turns per the steering policy,
/// moves forward along `theta`, then corrects vertical velocity toward a
/// hover height above the ground. Two threshold bands give a stronger climb
/// when the camera gets close to the terrain.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub steering: Steering,
    /// Climb while closer than this above the ground
    pub band_high: f32,
    /// Strong-correction band
    pub band_low: f32,
    pub climb_rate: f32,
    pub strong_climb_rate: f32,
    pub sink_rate: f32,
    pub dz_min: f32,
    pub dz_max: f32,
    /// Hard floor clamp margin above the terrain
    pub floor_margin: f32,
    /// Absolute minimum altitude
    pub min_altitude: f32,
}

impl Default for Autopilot {
    fn default() -> Autopilot {
        Autopilot {
            steering: Steering::Oscillate {
                center: std::f32::consts::PI * 0.6,
                amplitude: 0.5,
                rate: 0.0001,
            },
            band_high: 80.0,
            band_low: 40.0,
            climb_rate: 0.03,
            strong_climb_rate: 0.06,
            sink_rate: 0.01,
            dz_min: -0.2,
            dz_max: 0.5,
            floor_margin: 20.0,
            min_altitude: 64.0,
        }
    }
}

impl Autopilot {
    /// Advance the camera by one frame.
    ///
    /// `time_ms` is the scheduler timestamp; `elapsed_frames` is elapsed
    /// wall time over [`FRAME_TIME_MS`], making motion frame-rate
    /// independent. A non-finite or negative factor (first frame, clock
    /// hiccup) counts as one nominal frame instead of poisoning the pose.
    pub fn advance(
        &self,
        camera: &mut FlightCamera,
        map: &HeightColorMap,
        time_ms: f32,
        elapsed_frames: f32,
    ) {
        let scale = if elapsed_frames.is_finite() && elapsed_frames >= 0.0 {
            elapsed_frames
        } else {
            1.0
        };

        match self.steering {
            Steering::TurnRate(rate) => camera.theta += rate * scale,
            Steering::Oscillate {
                center,
                amplitude,
                rate,
            } => {
                let t = if time_ms.is_finite() { time_ms } else { 0.0 };
                camera.theta = center + amplitude * (t * rate).sin();
            }
        }

        camera.x = wrap_coord(camera.x + camera.theta.cos() * scale, map.width());
        camera.y = wrap_coord(camera.y + camera.theta.sin() * scale, map.height());

        let ground = map.sample_height(camera.x, camera.y) as f32;
        camera.z = camera
            .z
            .max(ground + self.floor_margin)
            .max(self.min_altitude);

        if camera.z < ground + self.band_high {
            camera.dz += self.climb_rate * scale;
        }
        if camera.z < ground + self.band_low {
            camera.dz += self.strong_climb_rate * scale;
        } else {
            camera.dz -= self.sink_rate * scale;
        }
        camera.dz = camera.dz.clamp(self.dz_min, self.dz_max);
        camera.z += camera.dz * scale;

        debug_assert!(camera.is_finite());
    }
}

fn wrap_coord(coord: f32, dim: usize) -> f32 {
    let dim = dim as f32;
    let mut wrapped = coord % dim;
    if wrapped < 0.0 {
        wrapped += dim;
    }
    wrapped
}
