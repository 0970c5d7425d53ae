mod focus_ring;
pub use focus_ring::*;

mod visually_hidden;
pub use visually_hidden::*;
