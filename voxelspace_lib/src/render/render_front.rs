use std::{sync::Arc, thread::JoinHandle};

use crossbeam::channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};

use crate::FlightCamera;

/// Messages to the frame loop thread
///
/// Messages queue up and one is read after each frame is done.
pub enum LoopMessage {
    /// Run one frame at the given scheduler timestamp, milliseconds
    Advance { time_ms: f32 },
    /// Stop, thread will get ready to be joined
    ShutDown,
}

/// Interface for frame loops running in a different thread
///
/// Must be implemented by loop runners that wish to communicate using
/// [`RendererFront`].
pub trait RenderThread {
    /// Get reference to the shared frame buffer
    fn get_shared_buffer(&self) -> Arc<Mutex<Vec<u32>>>;

    /// Get reference to the camera
    ///
    /// A write lock allows changing the camera pose between frames.
    fn get_camera(&self) -> Arc<RwLock<FlightCamera>>;

    /// Spawn the loop thread
    ///
    /// The loop waits for messages, it does _not_ start rendering on its
    /// own. Returns a handle which can be used to sync with the parent
    /// thread.
    fn start(self) -> JoinHandle<()>;

    /// Communication setter
    fn set_communication(&mut self, communication: (Sender<()>, Receiver<LoopMessage>));
}

/// Host-side handle for a frame loop thread
///
/// Can be active or inactive. `ShutDown` doubles as the explicit
/// cancellation token of the loop.
pub struct RendererFront {
    handle: Option<JoinHandle<()>>,
    buffer: Option<Arc<Mutex<Vec<u32>>>>,
    camera: Option<Arc<RwLock<FlightCamera>>>,
    communication_in: (Sender<LoopMessage>, Receiver<LoopMessage>),
    communication_out: (Sender<()>, Receiver<()>),
}

impl RendererFront {
    /// Create inactive front
    pub fn new() -> Self {
        let communication_in = crossbeam::channel::bounded(100); // host -> loop
        let communication_out = crossbeam::channel::bounded(100); // loop -> host
        Self {
            handle: None,
            buffer: None,
            camera: None,
            communication_in,
            communication_out,
        }
    }

    /// Getter for sender
    /// Returned handle can be used to drive the loop from any thread
    pub fn get_sender(&self) -> Sender<LoopMessage> {
        self.communication_in.0.clone()
    }

    /// Send a message to the loop thread
    pub fn send_message(&self, msg: LoopMessage) {
        self.communication_in.0.send(msg).unwrap()
    }

    /// Getter for message receiver
    ///
    /// The only message from the loop means a new frame is ready and the
    /// shared buffer can be read.
    pub fn get_receiver(&self) -> Receiver<()> {
        self.communication_out.1.clone()
    }

    /// Wait for the frame in flight, blocking call
    pub fn receive_message(&self) {
        self.communication_out.1.recv().unwrap()
    }

    /// Getter for the shared frame buffer
    /// If front is inactive, returns `None`
    pub fn get_buffer_handle(&self) -> Option<Arc<Mutex<Vec<u32>>>> {
        self.buffer.as_ref().cloned()
    }

    /// Getter for the camera handle
    /// If front is inactive, returns `None`
    pub fn get_camera_handle(&self) -> Option<Arc<RwLock<FlightCamera>>> {
        self.camera.as_ref().cloned()
    }

    /// Start `runner`
    ///
    /// Front goes into active state. If the front was already active, the
    /// previous loop gets shut down first.
    pub fn start_loop<R: RenderThread>(&mut self, mut runner: R) {
        // Shutdown if needed
        if let Some(handle) = self.handle.take() {
            println!("Shutting down current frame loop");
            self.communication_in.0.send(LoopMessage::ShutDown).unwrap();
            handle.join().unwrap();
            self.buffer = None;
        }

        let communication = (
            self.communication_out.0.clone(),
            self.communication_in.1.clone(),
        );
        runner.set_communication(communication);
        let buffer = runner.get_shared_buffer();
        let camera = runner.get_camera();
        let handle = runner.start(); // thread waits for Advance messages
        self.buffer = Some(buffer);
        self.handle = Some(handle);
        self.camera = Some(camera);
    }

    /// Sync thread with parent
    ///
    /// `ShutDown` message must be sent first separately.
    /// Call is blocking until the thread is joined.
    /// Front goes into inactive state.
    pub fn finish(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
            self.buffer = None;
            self.handle = None;
            self.camera = None;
        }
    }
}

impl Default for RendererFront {
    fn default() -> Self {
        Self::new()
    }
}
