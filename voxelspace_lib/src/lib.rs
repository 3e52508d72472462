//! Software voxel-space terrain renderer
//!
//! A 2D heightmap (plus optional colormap) is rendered into a packed 32-bit
//! pixel buffer every frame by marching rays outward from a flight camera,
//! one ray fan per screen column. No GPU involved.

pub mod camera;
pub mod common;
pub mod premade;
pub mod render;
pub mod terrain;
pub mod test_helpers;

pub use camera::{Autopilot, FlightCamera};
pub use common::{PixelLayout, ProjectionTable};
pub use render::{FrameLoop, RenderOptions, Raycaster};
pub use terrain::HeightColorMap;
