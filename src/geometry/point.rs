// src/geometry/point.rs
// 3-dimensional geometric Point with text and JSON codecs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{EntityKind, GeometryError};
use crate::geometry::coord;

/// 3-dimensional geometric Point.
///
/// Coordinates are plain `f64` fields; the dynamic "must be numeric" checks
/// of the text and JSON boundaries live in [`coord`] and in the codec
/// methods below.
///
/// Text form is `(x;y;z)`:
///
/// ```
/// use punctum::Point;
///
/// let point = Point::new(1.0, 2.0, 3.0);
/// assert_eq!(point.to_string(), "(1;2;3)");
/// assert_eq!("(1;2;3)".parse::<Point>().unwrap(), point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Payload accepted by the by-name field setters on [`Point`] and
/// [`crate::geometry::vector::Vector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Point(Point),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Point> for FieldValue {
    fn from(value: Point) -> Self {
        FieldValue::Point(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(number) => write!(f, "{}", number),
            FieldValue::Point(point) => write!(f, "{}", point),
        }
    }
}

impl Point {
    /// Construct a new Point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The Point at `(0;0;0)`.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Set one coordinate by name.
    ///
    /// `name` must be one of `x`, `y`, `z` and `value` must carry a number;
    /// on failure the Point is left untouched.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), GeometryError> {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "z" => &mut self.z,
            _ => {
                return Err(GeometryError::UnknownAttribute {
                    entity: EntityKind::Point,
                    name: name.to_string(),
                })
            }
        };

        let FieldValue::Number(number) = value else {
            return Err(GeometryError::IllegalCoordinate {
                value: value.to_string(),
            });
        };

        *slot = number;
        Ok(())
    }

    /// Build a Point from an already-parsed JSON value.
    ///
    /// The value must be an object carrying `x`, `y` and `z` coercible to
    /// coordinates. A `type` key, if present, is not inspected here.
    pub fn from_json_value(value: &Value) -> Result<Self, GeometryError> {
        let error = || GeometryError::IllegalJsonFormat {
            entity: EntityKind::Point,
        };

        let object = value.as_object().ok_or_else(error)?;
        let coordinate = |key: &str| {
            object
                .get(key)
                .and_then(coord::coordinate_from_json)
                .ok_or_else(error)
        };

        Ok(Self::new(
            coordinate("x")?,
            coordinate("y")?,
            coordinate("z")?,
        ))
    }

    /// Build a Point from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, GeometryError> {
        let value: Value =
            serde_json::from_str(text).map_err(|_| GeometryError::IllegalJsonFormat {
                entity: EntityKind::Point,
            })?;
        Self::from_json_value(&value)
    }

    /// Structured JSON form: `{"x": _, "y": _, "z": _, "type": "Point"}`.
    pub fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("x".to_string(), Value::Number(coord::json_number(self.x)));
        object.insert("y".to_string(), Value::Number(coord::json_number(self.y)));
        object.insert("z".to_string(), Value::Number(coord::json_number(self.z)));
        object.insert("type".to_string(), Value::String("Point".to_string()));
        Value::Object(object)
    }

    /// Compact JSON text form.
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{};{})", self.x, self.y, self.z)
    }
}

impl FromStr for Point {
    type Err = GeometryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || GeometryError::IllegalStringFormat {
            entity: EntityKind::Point,
        };

        let body = text
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(error)?;

        let mut pieces = body.split(';');
        let mut coordinate = || {
            pieces
                .next()
                .and_then(coord::parse_coordinate)
                .ok_or_else(error)
        };

        let (x, y, z) = (coordinate()?, coordinate()?, coordinate()?);
        if pieces.next().is_some() {
            return Err(error());
        }

        Ok(Self::new(x, y, z))
    }
}

// Conversions between Point and tuples / arrays

impl From<(f64, f64, f64)> for Point {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<[f64; 3]> for Point {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y, point.z)
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        [point.x, point.y, point.z]
    }
}

// Serde impls delegate to the JSON value codec so the wire shape stays the
// documented one regardless of the serializer in use.

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Point::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}
