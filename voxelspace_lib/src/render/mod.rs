mod flight_loop;
mod loop_thread;
mod render_front;
mod render_options;
mod renderer;

pub use flight_loop::FrameLoop;
pub use loop_thread::FrameLoopThread;
pub use render_front::{LoopMessage, RenderThread, RendererFront};
pub use render_options::{RenderOptions, ShadingPolicy, StepSchedule};
pub use renderer::Raycaster;
