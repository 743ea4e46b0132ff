pub mod container;
pub mod error;
pub mod geometry;

pub use container::{Container, Element};
pub use error::{EntityKind, ErrorKind, GeometryError};
pub use geometry::point::{FieldValue, Point};
pub use geometry::vector::Vector;
