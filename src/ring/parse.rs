use geo::Point;
use serde_json::{Value, json};

use crate::error::BoundaryError;

use super::BoundaryRing;

/// Parse a raw `boundaryCoordinates` payload into a typed ring.
///
/// The store sends `[[lat, lng], …]` pairs; `null` (a farm with no boundary)
/// yields an empty ring, not an error. Any element that is not a finite
/// 2-tuple of numbers fails with `MalformedCoordinate`. This is the single
/// validation boundary: everything downstream operates on `BoundaryRing`
/// only, never on raw store JSON.
pub fn parse_ring(raw: &Value) -> Result<BoundaryRing, BoundaryError> {
    let pairs = match raw {
        Value::Null => return Ok(BoundaryRing::new()),
        Value::Array(pairs) => pairs,
        _ => return Err(malformed("expected a coordinate array".into())),
    };

    let mut points = Vec::with_capacity(pairs.len());
    for (i, pair) in pairs.iter().enumerate() {
        let Value::Array(parts) = pair else {
            return Err(malformed(format!("element {i} is not a coordinate pair")));
        };
        if parts.len() != 2 {
            return Err(malformed(format!(
                "element {i} has {} components, expected 2",
                parts.len()
            )));
        }
        let (Some(lat), Some(lng)) = (parts[0].as_f64(), parts[1].as_f64()) else {
            return Err(malformed(format!("element {i} has a non-numeric component")));
        };
        if !lat.is_finite() || !lng.is_finite() {
            return Err(malformed(format!("element {i} has a non-finite component")));
        }
        points.push(Point::new(lng, lat));
    }

    Ok(BoundaryRing::from_points(points))
}

/// Inverse of `parse_ring`: emit the `[[lat, lng], …]` wire shape.
pub fn serialize_ring(ring: &BoundaryRing) -> Value {
    Value::Array(ring.iter().map(|p| json!([p.y(), p.x()])).collect())
}

fn malformed(detail: String) -> BoundaryError {
    BoundaryError::MalformedCoordinate { detail }
}

#[cfg(test)]
mod tests {
    use geo::Point;
    use serde_json::{Value, json};

    use crate::error::BoundaryError;

    use super::{parse_ring, serialize_ring};

    #[test]
    fn null_input_is_an_empty_ring() {
        let ring = parse_ring(&Value::Null).unwrap();
        assert!(ring.is_empty());
    }

    #[test]
    fn empty_array_is_an_empty_ring() {
        let ring = parse_ring(&json!([])).unwrap();
        assert!(ring.is_empty());
    }

    #[test]
    fn pairs_parse_in_order_as_lat_lng() {
        let ring = parse_ring(&json!([[7.25, -1.5], [7.5, -1.5], [7.5, -1.0]])).unwrap();
        // Internal order is (x = lng, y = lat).
        assert_eq!(ring.points()[0], Point::new(-1.5, 7.25));
        assert_eq!(ring.points()[2], Point::new(-1.0, 7.5));
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn integer_components_are_accepted() {
        let ring = parse_ring(&json!([[0, 0], [0, 1], [1, 1]])).unwrap();
        assert!(ring.is_complete());
    }

    #[test]
    fn non_array_input_is_malformed() {
        let err = parse_ring(&json!({"lat": 1.0, "lng": 2.0})).unwrap_err();
        assert!(matches!(err, BoundaryError::MalformedCoordinate { .. }));
    }

    #[test]
    fn wrong_arity_pair_is_malformed() {
        let err = parse_ring(&json!([[1.0, 2.0], [3.0]])).unwrap_err();
        assert!(matches!(err, BoundaryError::MalformedCoordinate { .. }));
    }

    #[test]
    fn non_numeric_component_is_malformed() {
        let err = parse_ring(&json!([[1.0, "2.0"]])).unwrap_err();
        assert!(matches!(err, BoundaryError::MalformedCoordinate { .. }));
    }

    #[test]
    fn nested_garbage_is_malformed() {
        let err = parse_ring(&json!([[[1.0, 2.0]]])).unwrap_err();
        assert!(matches!(err, BoundaryError::MalformedCoordinate { .. }));
    }

    #[test]
    fn serialize_then_parse_round_trips() {
        let ring = parse_ring(&json!([[7.25, -1.5], [7.5, -1.5], [7.5, -1.0], [7.25, -1.0]])).unwrap();
        let reparsed = parse_ring(&serialize_ring(&ring)).unwrap();
        assert_eq!(ring, reparsed);
    }

    #[test]
    fn serialize_emits_lat_lng_pairs() {
        let ring = parse_ring(&json!([[7.25, -1.5]])).unwrap();
        assert_eq!(serialize_ring(&ring), json!([[7.25, -1.5]]));
    }
}
