// src/error.rs
// Crate-wide error type shared by the geometry and container modules.

use std::fmt;

/// The entity a format or attribute error is scoped to.
///
/// Nested parse failures are always rewrapped to the outermost entity, so a
/// broken Point inside a Vector JSON object reports as a Vector error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Point,
    Vector,
    Container,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Point => "Point",
            EntityKind::Vector => "Vector",
            EntityKind::Container => "Container",
        };
        f.write_str(name)
    }
}

/// Abstract category of a [`GeometryError`], independent of the concrete
/// variant. Useful when callers only care whether input was malformed text
/// versus a value breaking a domain rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value has the wrong shape for the operation (bad coordinate
    /// payload, underspecified constructor arguments).
    Validation,
    /// A string or JSON structure does not conform to the expected grammar
    /// or schema.
    Format,
    /// An attempt to set a field that does not exist on the entity.
    UnknownAttribute,
}

/// Errors produced by Point, Vector and Container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("Illegal coordinate: {value}")]
    IllegalCoordinate { value: String },

    #[error("Illegal Point: {value}")]
    IllegalPointValue { value: String },

    #[error("Can't create a Vector from provided args")]
    UnderspecifiedVector,

    #[error("Illegal {entity} string format")]
    IllegalStringFormat { entity: EntityKind },

    #[error("Illegal {entity} JSON format")]
    IllegalJsonFormat { entity: EntityKind },

    #[error("{entity} has no attribute {name}")]
    UnknownAttribute { entity: EntityKind, name: String },
}

impl GeometryError {
    /// Map the concrete variant onto its abstract category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::IllegalCoordinate { .. }
            | GeometryError::IllegalPointValue { .. }
            | GeometryError::UnderspecifiedVector => ErrorKind::Validation,
            GeometryError::IllegalStringFormat { .. }
            | GeometryError::IllegalJsonFormat { .. } => ErrorKind::Format,
            GeometryError::UnknownAttribute { .. } => ErrorKind::UnknownAttribute,
        }
    }
}
