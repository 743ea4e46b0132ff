// src/container.rs
// Ordered, type-constrained collection of Points and Vectors.

use std::fmt;
use std::slice;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{EntityKind, GeometryError};
use crate::geometry::point::Point;
use crate::geometry::vector::Vector;

/// One Container element: a Point or a Vector.
///
/// The closed union replaces open-ended runtime type inspection: the only
/// element kinds that exist are the two variants, and dispatch is an
/// explicit match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Point(Point),
    Vector(Vector),
}

impl Element {
    /// The `type` tag used in the JSON encoding.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Point(_) => "Point",
            Element::Vector(_) => "Vector",
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Element::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Element::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    /// Structured JSON form of the wrapped value.
    pub fn to_json_value(&self) -> Value {
        match self {
            Element::Point(point) => point.to_json_value(),
            Element::Vector(vector) => vector.to_json_value(),
        }
    }
}

impl From<Point> for Element {
    fn from(point: Point) -> Self {
        Element::Point(point)
    }
}

impl From<Vector> for Element {
    fn from(vector: Vector) -> Self {
        Element::Vector(vector)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Point(point) => write!(f, "{}", point),
            Element::Vector(vector) => write!(f, "{}", vector),
        }
    }
}

/// Ordered collection holding only Points and Vectors.
///
/// Wraps its element vector instead of exposing it, so every mutation goes
/// through the validated operations below.
///
/// ```
/// use punctum::{Container, Point, Vector};
///
/// let mut container = Container::new();
/// container.append(Point::new(1.0, 1.0, 1.0));
/// container.append(Vector::new(2.0, 2.0, 2.0));
/// assert_eq!(container.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    elements: Vec<Element>,
}

impl Container {
    /// Create an empty Container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Container from a sequence of elements, in the given order.
    pub fn from_elements<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Append an element at the end.
    pub fn append(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Append a sequence of elements, in order.
    pub fn extend<I, E>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.elements.extend(elements.into_iter().map(Into::into));
    }

    /// Insert an element at `index`; an out-of-range index clamps to the
    /// nearest end.
    pub fn insert(&mut self, index: usize, element: impl Into<Element>) {
        let index = index.min(self.elements.len());
        self.elements.insert(index, element.into());
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Build a Container from an already-parsed JSON value.
    ///
    /// The value must be an object whose `elements` key holds an array.
    /// Entries tagged `"Point"` or `"Vector"` are dispatched to the
    /// matching decoder; entries with any other `type` value are skipped
    /// without error. A missing `type`, a non-object entry or a nested
    /// decode failure surfaces as a Container-level error.
    pub fn from_json_value(value: &Value) -> Result<Self, GeometryError> {
        let error = || GeometryError::IllegalJsonFormat {
            entity: EntityKind::Container,
        };

        let entries = value
            .as_object()
            .and_then(|object| object.get("elements"))
            .and_then(Value::as_array)
            .ok_or_else(error)?;

        let mut container = Container::new();
        for entry in entries {
            let tag = entry.get("type").ok_or_else(error)?;
            match tag.as_str() {
                Some("Point") => {
                    container.append(Point::from_json_value(entry).map_err(|_| error())?)
                }
                Some("Vector") => {
                    container.append(Vector::from_json_value(entry).map_err(|_| error())?)
                }
                // unrecognized tags are dropped, not errors
                _ => {}
            }
        }

        Ok(container)
    }

    /// Build a Container from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, GeometryError> {
        let value: Value =
            serde_json::from_str(text).map_err(|_| GeometryError::IllegalJsonFormat {
                entity: EntityKind::Container,
            })?;
        Self::from_json_value(&value)
    }

    /// Structured JSON form: `{"elements": [...], "type": "Container"}`.
    pub fn to_json_value(&self) -> Value {
        let elements = self.elements.iter().map(Element::to_json_value).collect();

        let mut object = Map::new();
        object.insert("elements".to_string(), Value::Array(elements));
        object.insert("type".to_string(), Value::String("Container".to_string()));
        Value::Object(object)
    }

    /// Compact JSON text form.
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Container {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Container {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Container::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}
