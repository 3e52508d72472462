mod pixel_layout;
mod projection;

pub use pixel_layout::PixelLayout;
pub use projection::ProjectionTable;
