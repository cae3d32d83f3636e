mod triangle;
pub use triangle::Triangle;
mod triangle_winding;
pub use triangle_winding::TriangleWinding;
