// src/geometry/vector.rs
// Directed segment between two Points, carrying its coordinate triple as
// derived state.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{EntityKind, GeometryError};
use crate::geometry::coord;
use crate::geometry::point::{FieldValue, Point};

/// 3-dimensional geometric Vector: a directed segment from `start_point` to
/// `end_point`, with the coordinate triple `(x, y, z)` always equal to
/// `end_point - start_point`.
///
/// Fields are private so every constructor and mutator can keep that
/// equality; reads go through the accessor methods.
///
/// ```
/// use punctum::{Point, Vector};
///
/// let v = Vector::new(2.0, 3.0, 2.0); // anchored at the origin
/// assert_eq!(v.end_point(), Point::new(2.0, 3.0, 2.0));
///
/// let w = Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0));
/// assert_eq!((w.x(), w.y(), w.z()), (1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
    start_point: Point,
    end_point: Point,
}

impl Vector {
    /// Construct from coordinates, anchored at the origin.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_start(x, y, z, Point::origin())
    }

    /// Construct from coordinates and an explicit start point; the end point
    /// is derived.
    pub fn with_start(x: f64, y: f64, z: f64, start_point: Point) -> Self {
        Self {
            x,
            y,
            z,
            start_point,
            end_point: Point::new(start_point.x + x, start_point.y + y, start_point.z + z),
        }
    }

    /// Construct from two endpoints; the coordinates are derived.
    pub fn between(start_point: Point, end_point: Point) -> Self {
        Self {
            x: end_point.x - start_point.x,
            y: end_point.y - start_point.y,
            z: end_point.z - start_point.z,
            start_point,
            end_point,
        }
    }

    /// Construct from optional parts, the dynamic-argument surface used by
    /// callers assembling a Vector piecemeal.
    ///
    /// A present `end_point` selects endpoint mode and any supplied
    /// coordinates are ignored. Without it, all three coordinates must be
    /// present and `start_point` defaults to the origin.
    pub fn from_parts(
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
        start_point: Option<Point>,
        end_point: Option<Point>,
    ) -> Result<Self, GeometryError> {
        let start_point = start_point.unwrap_or_default();
        match end_point {
            Some(end_point) => Ok(Self::between(start_point, end_point)),
            None => match (x, y, z) {
                (Some(x), Some(y), Some(z)) => Ok(Self::with_start(x, y, z, start_point)),
                _ => Err(GeometryError::UnderspecifiedVector),
            },
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    /// Scale by a factor: coordinates multiply, the start point stays, the
    /// end point is recomputed.
    pub fn scale(&self, factor: f64) -> Self {
        Self::with_start(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.start_point,
        )
    }

    /// Scalar (dot) product.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product of two Vectors, anchored at `first`'s start point.
    ///
    /// Note: the y component is `f.x*s.z - f.z*s.x`, the negation of the
    /// right-hand-rule value; kept for output compatibility.
    pub fn cross(first: &Vector, second: &Vector) -> Vector {
        Vector::with_start(
            first.y * second.z - first.z * second.y,
            first.x * second.z - first.z * second.x,
            first.x * second.y - first.y * second.x,
            first.start_point,
        )
    }

    /// Mixed (scalar triple) product: `cross(first, second) · third`.
    pub fn mixed(first: &Vector, second: &Vector, third: &Vector) -> f64 {
        Self::cross(first, second).dot(third)
    }

    /// Collinearity by direct ratio comparison, without a zero guard.
    ///
    /// A zero component in `second` makes the matching ratio infinite or
    /// NaN under IEEE-754 and the comparison comes out `false`; it does not
    /// trap.
    pub fn collinear(first: &Vector, second: &Vector) -> bool {
        first.x / second.x == first.y / second.y && first.y / second.y == first.z / second.z
    }

    /// Set one field by name.
    ///
    /// Coordinate writes (`x`, `y`, `z`) take a number and recompute the
    /// end point; `start_point` takes a Point and translates the segment
    /// (coordinates kept, end point recomputed); `end_point` takes a Point
    /// and recomputes the coordinates. On failure the Vector is left
    /// untouched.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), GeometryError> {
        match name {
            "x" | "y" | "z" => {
                let number = expect_number(value)?;
                match name {
                    "x" => self.x = number,
                    "y" => self.y = number,
                    _ => self.z = number,
                }
                self.sync_end_point();
            }
            "start_point" => {
                self.start_point = expect_point(value)?;
                self.sync_end_point();
            }
            "end_point" => {
                self.end_point = expect_point(value)?;
                self.sync_coordinates();
            }
            _ => {
                return Err(GeometryError::UnknownAttribute {
                    entity: EntityKind::Vector,
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    fn sync_end_point(&mut self) {
        self.end_point = Point::new(
            self.start_point.x + self.x,
            self.start_point.y + self.y,
            self.start_point.z + self.z,
        );
    }

    fn sync_coordinates(&mut self) {
        self.x = self.end_point.x - self.start_point.x;
        self.y = self.end_point.y - self.start_point.y;
        self.z = self.end_point.z - self.start_point.z;
    }

    /// Build a Vector from an already-parsed JSON value.
    ///
    /// The value must be an object carrying `start_point` and `end_point`,
    /// each a valid Point object. `x`/`y`/`z` keys in the input are ignored
    /// and recomputed from the endpoints. Nested Point failures surface as
    /// a Vector-level error.
    pub fn from_json_value(value: &Value) -> Result<Self, GeometryError> {
        let error = || GeometryError::IllegalJsonFormat {
            entity: EntityKind::Vector,
        };

        let object = value.as_object().ok_or_else(error)?;
        let endpoint = |key: &str| {
            let nested = object.get(key).ok_or_else(error)?;
            Point::from_json_value(nested).map_err(|_| error())
        };

        Ok(Self::between(endpoint("start_point")?, endpoint("end_point")?))
    }

    /// Build a Vector from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, GeometryError> {
        let value: Value =
            serde_json::from_str(text).map_err(|_| GeometryError::IllegalJsonFormat {
                entity: EntityKind::Vector,
            })?;
        Self::from_json_value(&value)
    }

    /// Structured JSON form: `{"start_point": _, "end_point": _, "x": _,
    /// "y": _, "z": _, "type": "Vector"}`.
    pub fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("start_point".to_string(), self.start_point.to_json_value());
        object.insert("end_point".to_string(), self.end_point.to_json_value());
        object.insert("x".to_string(), Value::Number(coord::json_number(self.x)));
        object.insert("y".to_string(), Value::Number(coord::json_number(self.y)));
        object.insert("z".to_string(), Value::Number(coord::json_number(self.z)));
        object.insert("type".to_string(), Value::String("Vector".to_string()));
        Value::Object(object)
    }

    /// Compact JSON text form.
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

fn expect_number(value: FieldValue) -> Result<f64, GeometryError> {
    match value {
        FieldValue::Number(number) => Ok(number),
        _ => Err(GeometryError::IllegalCoordinate {
            value: value.to_string(),
        }),
    }
}

fn expect_point(value: FieldValue) -> Result<Point, GeometryError> {
    match value {
        FieldValue::Point(point) => Ok(point),
        _ => Err(GeometryError::IllegalPointValue {
            value: value.to_string(),
        }),
    }
}

/// Equality compares the two endpoints pairwise; the stored coordinates are
/// derived and may differ bitwise after rounding even when the endpoints
/// match.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.start_point == other.start_point && self.end_point == other.end_point
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_point, self.end_point)
    }
}

impl FromStr for Vector {
    type Err = GeometryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || GeometryError::IllegalStringFormat {
            entity: EntityKind::Vector,
        };

        let (start_text, end_text) = text.split_once(':').ok_or_else(error)?;
        if end_text.contains(':') {
            return Err(error());
        }

        let start_point = start_text.parse().map_err(|_| error())?;
        let end_point = end_text.parse().map_err(|_| error())?;
        Ok(Self::between(start_point, end_point))
    }
}

// Operators: `*` with a number scales, `*` with a Vector is the dot
// product, `+`/`-` are coordinate-wise and anchored at the left operand's
// start point.

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Mul for Vector {
    type Output = f64;

    fn mul(self, other: Vector) -> f64 {
        self.dot(&other)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::with_start(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.start_point,
        )
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        self + -other
    }
}

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Vector::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn delta_invariant_holds(v: &Vector) -> bool {
        v.x() == v.end_point().x - v.start_point().x
            && v.y() == v.end_point().y - v.start_point().y
            && v.z() == v.end_point().z - v.start_point().z
    }

    #[test]
    fn test_coordinate_mode_derives_end_point() {
        let v = Vector::new(2.0, 3.0, 2.0);
        assert_eq!(v.start_point(), Point::origin());
        assert_eq!(v.end_point(), Point::new(2.0, 3.0, 2.0));
        assert!(delta_invariant_holds(&v));

        let anchored = Vector::with_start(2.0, 3.0, 2.0, Point::new(1.0, 1.0, 1.0));
        assert_eq!(anchored.end_point(), Point::new(3.0, 4.0, 3.0));
        assert!(delta_invariant_holds(&anchored));
    }

    #[test]
    fn test_endpoint_mode_derives_coordinates() {
        let v = Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0));
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 1.0, 1.0));
        assert!(delta_invariant_holds(&v));
    }

    #[test]
    fn test_from_parts_selects_endpoint_mode() {
        let v = Vector::from_parts(
            Some(9.0),
            Some(9.0),
            Some(9.0),
            Some(Point::new(1.0, 0.0, 0.0)),
            Some(Point::new(1.0, 2.0, 0.0)),
        )
        .unwrap();
        // supplied coordinates are ignored once an end point is present
        assert_eq!((v.x(), v.y(), v.z()), (0.0, 2.0, 0.0));
    }

    #[test]
    fn test_from_parts_requires_full_coordinate_set() {
        let error = Vector::from_parts(Some(1.0), None, Some(3.0), None, None).unwrap_err();
        assert_eq!(error.to_string(), "Can't create a Vector from provided args");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_display_and_parse_roundtrip() {
        let v = Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.5, 2.0));
        assert_eq!(v.to_string(), "(1;1;1):(2;2.5;2)");

        let reparsed: Vector = v.to_string().parse().unwrap();
        assert_eq!(reparsed, v);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for text in [
            "(1;1;1)",
            "(1;1;1):(2;2;2):(3;3;3)",
            "(1;1;1):(2;2)",
            "(1;1;1);(2;2;2)",
            "bad:(2;2;2)",
            "",
        ] {
            let error = text.parse::<Vector>().unwrap_err();
            assert_eq!(error.to_string(), "Illegal Vector string format");
            assert_eq!(error.kind(), ErrorKind::Format);
        }
    }

    #[test]
    fn test_equality_is_endpoint_based() {
        let a = Vector::new(1.0, 1.0, 1.0);
        let b = Vector::between(Point::origin(), Point::new(1.0, 1.0, 1.0));
        assert_eq!(a, b);

        // same delta, different anchor
        let c = Vector::with_start(1.0, 1.0, 1.0, Point::new(5.0, 0.0, 0.0));
        assert_ne!(a, c);
    }

    #[test]
    fn test_scale_keeps_start_point() {
        let v = Vector::with_start(2.0, 0.0, 0.0, Point::new(1.0, 1.0, 1.0));
        let scaled = v * 3.0;
        assert_eq!(scaled.start_point(), Point::new(1.0, 1.0, 1.0));
        assert_eq!((scaled.x(), scaled.y(), scaled.z()), (6.0, 0.0, 0.0));
        assert!(delta_invariant_holds(&scaled));
        assert_eq!(
            scaled,
            Vector::with_start(6.0, 0.0, 0.0, Point::new(1.0, 1.0, 1.0))
        );
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(Vector::new(1.0, 0.0, 0.0).dot(&Vector::new(0.0, 1.0, 0.0)), 0.0);
        assert_eq!(Vector::new(1.0, 2.0, 3.0) * Vector::new(4.0, 5.0, 6.0), 32.0);
    }

    #[test]
    fn test_add_sub_anchored_at_left_operand() {
        let a = Vector::with_start(1.0, 2.0, 3.0, Point::new(1.0, 0.0, 0.0));
        let b = Vector::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!((sum.x(), sum.y(), sum.z()), (5.0, 7.0, 9.0));
        assert_eq!(sum.start_point(), Point::new(1.0, 0.0, 0.0));

        let diff = sum - b;
        assert_eq!((diff.x(), diff.y(), diff.z()), (1.0, 2.0, 3.0));
        assert_eq!(diff, a);
    }

    #[test]
    fn test_cross_matches_documented_formula() {
        let result = Vector::cross(&Vector::new(1.0, 0.0, 0.0), &Vector::new(0.0, 1.0, 0.0));
        assert_eq!(result, Vector::new(0.0, 0.0, 1.0));

        // Pins every component, in particular the non-negated y.
        let first = Vector::new(1.0, 2.0, 3.0);
        let second = Vector::new(4.0, 5.0, 6.0);
        let product = Vector::cross(&first, &second);
        assert_eq!(product.x(), 2.0 * 6.0 - 3.0 * 5.0);
        assert_eq!(product.y(), 1.0 * 6.0 - 3.0 * 4.0);
        assert_eq!(product.z(), 1.0 * 5.0 - 2.0 * 4.0);
    }

    #[test]
    fn test_cross_anchors_at_first_operand() {
        let first = Vector::with_start(1.0, 0.0, 0.0, Point::new(7.0, 7.0, 7.0));
        let second = Vector::new(0.0, 1.0, 0.0);
        let product = Vector::cross(&first, &second);
        assert_eq!(product.start_point(), Point::new(7.0, 7.0, 7.0));
    }

    #[test]
    fn test_mixed_product_is_scalar() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let b = Vector::new(0.0, 1.0, 0.0);
        let c = Vector::new(0.0, 0.0, 1.0);
        assert_eq!(Vector::mixed(&a, &b, &c), 1.0);
        // degenerate: third lies in the plane of the first two
        assert_eq!(Vector::mixed(&a, &b, &a), 0.0);
    }

    #[test]
    fn test_collinear() {
        assert!(Vector::collinear(
            &Vector::new(1.0, 2.0, 3.0),
            &Vector::new(2.0, 4.0, 6.0)
        ));
        assert!(!Vector::collinear(
            &Vector::new(1.0, 2.0, 3.0),
            &Vector::new(1.0, 2.0, 4.0)
        ));
    }

    #[test]
    fn test_collinear_zero_component_is_false_not_a_trap() {
        // 0/0 is NaN, x/0 is inf; either way the unguarded ratio comparison
        // comes out false.
        assert!(!Vector::collinear(
            &Vector::new(1.0, 0.0, 0.0),
            &Vector::new(2.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_set_field_coordinate_recomputes_end_point() {
        let mut v = Vector::with_start(1.0, 1.0, 1.0, Point::new(1.0, 1.0, 1.0));
        v.set_field("x", 5.0.into()).unwrap();
        assert_eq!(v.end_point(), Point::new(6.0, 2.0, 2.0));
        assert!(delta_invariant_holds(&v));
    }

    #[test]
    fn test_set_field_start_point_translates() {
        let mut v = Vector::new(1.0, 2.0, 3.0);
        v.set_field("start_point", Point::new(1.0, 1.0, 1.0).into())
            .unwrap();
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
        assert_eq!(v.end_point(), Point::new(2.0, 3.0, 4.0));
        assert!(delta_invariant_holds(&v));
    }

    #[test]
    fn test_set_field_end_point_recomputes_coordinates() {
        let mut v = Vector::new(1.0, 1.0, 1.0);
        v.set_field("end_point", Point::new(3.0, 3.0, 3.0).into())
            .unwrap();
        assert_eq!((v.x(), v.y(), v.z()), (3.0, 3.0, 3.0));
        assert!(delta_invariant_holds(&v));
    }

    #[test]
    fn test_set_field_failures() {
        let mut v = Vector::new(1.0, 1.0, 1.0);
        let snapshot = v;

        let error = v.set_field("w", 1.0.into()).unwrap_err();
        assert_eq!(error.to_string(), "Vector has no attribute w");

        let error = v
            .set_field("x", Point::origin().into())
            .unwrap_err();
        assert_eq!(error.to_string(), "Illegal coordinate: (0;0;0)");

        let error = v.set_field("start_point", 5.0.into()).unwrap_err();
        assert_eq!(error.to_string(), "Illegal Point: 5");
        assert_eq!(error.kind(), ErrorKind::Validation);

        assert_eq!(v, snapshot);
    }

    #[test]
    fn test_from_json_value() {
        let v = Vector::from_json_value(&json!({
            "start_point": {"x": 1, "y": 1, "z": 1, "type": "Point"},
            "end_point": {"x": 2, "y": 2, "z": 2, "type": "Point"},
        }))
        .unwrap();
        assert_eq!(
            v,
            Vector::between(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0))
        );
    }

    #[test]
    fn test_from_json_recomputes_coordinates_from_endpoints() {
        // stale x/y/z keys in the input are ignored
        let v = Vector::from_json_value(&json!({
            "start_point": {"x": 0, "y": 0, "z": 0},
            "end_point": {"x": 2, "y": 2, "z": 2},
            "x": 99, "y": 99, "z": 99,
        }))
        .unwrap();
        assert_eq!((v.x(), v.y(), v.z()), (2.0, 2.0, 2.0));
    }

    #[test]
    fn test_from_json_rewraps_nested_point_errors() {
        for value in [
            json!({"end_point": {"x": 2, "y": 2, "z": 2}}),
            json!({"start_point": {"x": 1, "y": 1}, "end_point": {"x": 2, "y": 2, "z": 2}}),
            json!({"start_point": null, "end_point": null}),
            json!(["start_point", "end_point"]),
        ] {
            let error = Vector::from_json_value(&value).unwrap_err();
            assert_eq!(error.to_string(), "Illegal Vector JSON format");
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let v = Vector::with_start(1.5, -2.0, 0.0, Point::new(1.0, 1.0, 1.0));
        let reparsed = Vector::from_json_str(&v.to_json_string()).unwrap();
        assert_eq!(reparsed, v);
    }

    #[test]
    fn test_json_string_shape() {
        let v = Vector::new(2.0, 2.0, 2.0);
        assert_eq!(
            v.to_json_string(),
            concat!(
                r#"{"start_point":{"x":0,"y":0,"z":0,"type":"Point"},"#,
                r#""end_point":{"x":2,"y":2,"z":2,"type":"Point"},"#,
                r#""x":2,"y":2,"z":2,"type":"Vector"}"#
            )
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let v = Vector::with_start(1.0, 2.0, 3.0, Point::new(0.5, 0.5, 0.5));
        let text = serde_json::to_string(&v).unwrap();
        let reparsed: Vector = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, v);
    }
}
