mod contour_set;
pub use contour_set::{ContourSet, Triangulate};
mod vertex;
pub use vertex::Vertex;
