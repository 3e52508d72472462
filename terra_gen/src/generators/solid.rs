//! Uniform elevation, mostly for testing renderers

use nalgebra::Vector2;

pub fn generate(dims: Vector2<usize>, elevation: u8) -> Vec<u8> {
    vec![elevation; dims.x * dims.y]
}
