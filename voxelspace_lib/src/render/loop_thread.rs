use std::{sync::Arc, thread::JoinHandle};

use crossbeam::channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};

use crate::camera::{Autopilot, FlightCamera, FRAME_TIME_MS};

use super::{render_front::RenderThread, LoopMessage, Raycaster};

/// Frame loop behind a [`RendererFront`](super::RendererFront).
///
/// The loop runs on its own thread but each frame is fully synchronous:
/// receive an `Advance`, lock buffer and camera, advance + render, signal
/// the host. The camera lives behind a `RwLock` so the host can inspect or
/// reposition it between frames.
pub struct FrameLoopThread {
    raycaster: Raycaster,
    autopilot: Autopilot,
    shared_buffer: Arc<Mutex<Vec<u32>>>,
    camera: Arc<RwLock<FlightCamera>>,
    communication: (Sender<()>, Receiver<LoopMessage>),
}

impl RenderThread for FrameLoopThread {
    fn get_shared_buffer(&self) -> Arc<Mutex<Vec<u32>>> {
        self.shared_buffer.clone()
    }

    fn get_camera(&self) -> Arc<RwLock<FlightCamera>> {
        self.camera.clone()
    }

    fn start(self) -> JoinHandle<()> {
        self.start_loop()
    }

    fn set_communication(&mut self, communication: (Sender<()>, Receiver<LoopMessage>)) {
        self.communication = communication;
    }
}

impl FrameLoopThread {
    pub fn new(raycaster: Raycaster, autopilot: Autopilot, camera: FlightCamera) -> Self {
        let buffer = Arc::new(Mutex::new(vec![0; raycaster.buffer_len()]));

        // Dummy channels
        // Replaced once started
        let (sender_void, _) = crossbeam::channel::unbounded();
        let never = crossbeam::channel::never();
        let communication = (sender_void, never);

        Self {
            raycaster,
            autopilot,
            shared_buffer: buffer,
            camera: Arc::new(RwLock::new(camera)),
            communication,
        }
    }

    pub fn start_loop(mut self) -> JoinHandle<()> {
        std::thread::spawn(move || {
            let mut last_time_ms: Option<f32> = None;
            // Master loop
            loop {
                // Gather input
                let time_ms = match self.communication.1.recv() {
                    Ok(LoopMessage::Advance { time_ms }) => time_ms,
                    Ok(LoopMessage::ShutDown) | Err(_) => break,
                };

                {
                    // Lock buffer for the whole frame
                    let mut buffer = self.shared_buffer.lock();

                    // Lock camera
                    let mut camera = self.camera.write();

                    let elapsed_frames = match last_time_ms {
                        Some(last) => (time_ms - last) / FRAME_TIME_MS,
                        None => 1.0,
                    };
                    self.autopilot.advance(
                        &mut camera,
                        self.raycaster.map(),
                        time_ms,
                        elapsed_frames,
                    );
                    self.raycaster.render(&camera, &mut buffer[..]);
                    last_time_ms = Some(time_ms);
                }

                // Send result
                if self.communication.0.send(()).is_err() {
                    break;
                }
            }
        })
    }
}
