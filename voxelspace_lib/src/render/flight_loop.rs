use crate::camera::{Autopilot, FlightCamera, FRAME_TIME_MS};

use super::Raycaster;

/// Single-threaded frame loop: one advance + render cycle per scheduler
/// tick.
///
/// The host calls [`tick`](FrameLoop::tick) once per display refresh with a
/// monotonically increasing timestamp; elapsed wall time is converted into
/// the frame-rate independent scale factor the autopilot expects. The first
/// tick counts as one nominal frame.
pub struct FrameLoop {
    raycaster: Raycaster,
    autopilot: Autopilot,
    camera: FlightCamera,
    last_time_ms: Option<f32>,
}

impl FrameLoop {
    pub fn new(raycaster: Raycaster, autopilot: Autopilot, camera: FlightCamera) -> FrameLoop {
        FrameLoop {
            raycaster,
            autopilot,
            camera,
            last_time_ms: None,
        }
    }

    pub fn camera(&self) -> &FlightCamera {
        &self.camera
    }

    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    /// Advance the camera and render one frame into `buffer`
    pub fn tick(&mut self, time_ms: f32, buffer: &mut [u32]) {
        let elapsed_frames = match self.last_time_ms {
            Some(last) => (time_ms - last) / FRAME_TIME_MS,
            None => 1.0,
        };
        self.autopilot
            .advance(&mut self.camera, self.raycaster.map(), time_ms, elapsed_frames);
        self.raycaster.render(&self.camera, buffer);
        self.last_time_ms = Some(time_ms);
    }
}

#[cfg(test)]
mod test {
    use crate::{
        camera::Steering,
        common::PixelLayout,
        test_helpers::{flat_map, small_options},
    };

    use super::*;

    #[test]
    fn tick_advances_camera_and_renders() {
        let layout = PixelLayout::detect();
        let map = flat_map(32, 32, 0);
        let raycaster = Raycaster::new(map, layout, small_options(16, 12, 64.0)).unwrap();
        let autopilot = Autopilot {
            steering: Steering::TurnRate(0.0),
            ..Autopilot::default()
        };
        let camera = FlightCamera::new(4.0, 4.0, 250.0);
        let mut frame_loop = FrameLoop::new(raycaster, autopilot, camera);
        let mut buffer = vec![0u32; frame_loop.raycaster().buffer_len()];

        let x0 = frame_loop.camera().x;
        frame_loop.tick(0.0, &mut buffer);
        let x1 = frame_loop.camera().x;
        assert!((x1 - x0 - 1.0).abs() < 1e-4);

        // two nominal frames of elapsed time move twice as far
        frame_loop.tick(2.0 * FRAME_TIME_MS, &mut buffer);
        assert!((frame_loop.camera().x - x1 - 2.0).abs() < 1e-4);
    }
}
