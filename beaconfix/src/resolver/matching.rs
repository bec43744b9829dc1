//! Region matching against the registry snapshot (stage 2).

use std::sync::Arc;

use crate::geometry::{GeometryError, Point, Polygon, PolygonId};

use super::error::ResolveError;

/// Outcome of matching a position against the registered regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionMatch {
    /// The position lies inside this region.
    Contained { id: PolygonId },
    /// No region contains the position; this one has the closest edge.
    Nearest { id: PolygonId, distance: f64 },
    /// No regions were registered.
    NoRegions,
}

/// Tag a geometry failure with the polygon it came from.
fn tagged<T>(id: PolygonId, result: Result<T, GeometryError>) -> Result<T, ResolveError> {
    result.map_err(|source| ResolveError::Geometry { id, source })
}

/// Match `position` against the polygon snapshot.
///
/// Containment wins: when several regions contain the position
/// (overlapping fences), the smallest area — the most specific region —
/// is chosen, with equal areas breaking the tie toward the smallest id so
/// the outcome is fully deterministic. With no containing region, the
/// region with the nearest edge is chosen instead (again id-tie-broken).
/// A malformed polygon anywhere in the snapshot aborts the match with
/// [`ResolveError::Geometry`]; bad registry data is surfaced, not skipped.
pub fn match_region(
    position: Point,
    polygons: &[Arc<Polygon>],
) -> Result<RegionMatch, ResolveError> {
    if polygons.is_empty() {
        return Ok(RegionMatch::NoRegions);
    }

    // Containment pass.
    let mut best_containing: Option<(f64, PolygonId)> = None;
    for polygon in polygons {
        let id = polygon.id();
        if tagged(id, polygon.contains(position))? {
            let area = tagged(id, polygon.area())?;
            let replace = match best_containing {
                None => true,
                Some((best_area, best_id)) => {
                    area < best_area || (area == best_area && id < best_id)
                }
            };
            if replace {
                best_containing = Some((area, id));
            }
        }
    }
    if let Some((_, id)) = best_containing {
        return Ok(RegionMatch::Contained { id });
    }

    // Fallback pass: nearest edge.
    let mut best_near: Option<(f64, PolygonId)> = None;
    for polygon in polygons {
        let id = polygon.id();
        let distance = tagged(id, polygon.nearest_distance(position))?;
        let replace = match best_near {
            None => true,
            Some((best_distance, best_id)) => {
                distance < best_distance || (distance == best_distance && id < best_id)
            }
        };
        if replace {
            best_near = Some((distance, id));
        }
    }

    match best_near {
        Some((distance, id)) => Ok(RegionMatch::Nearest { id, distance }),
        // Unreachable: polygons checked non-empty above.
        None => Ok(RegionMatch::NoRegions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: u64, min_x: f64, min_y: f64, side: f64) -> Arc<Polygon> {
        Arc::new(Polygon::new(
            PolygonId::new(id),
            vec![
                Point::new(min_x, min_y),
                Point::new(min_x + side, min_y),
                Point::new(min_x + side, min_y + side),
                Point::new(min_x, min_y + side),
            ],
        ))
    }

    fn rectangle(id: u64, min_x: f64, min_y: f64, width: f64, height: f64) -> Arc<Polygon> {
        Arc::new(Polygon::new(
            PolygonId::new(id),
            vec![
                Point::new(min_x, min_y),
                Point::new(min_x + width, min_y),
                Point::new(min_x + width, min_y + height),
                Point::new(min_x, min_y + height),
            ],
        ))
    }

    #[test]
    fn test_empty_snapshot_matches_nothing() {
        let result = match_region(Point::new(0.5, 0.5), &[]).expect("no geometry involved");
        assert_eq!(result, RegionMatch::NoRegions);
    }

    #[test]
    fn test_single_containing_region() {
        let polygons = vec![square(1, 0.0, 0.0, 1.0)];
        let result = match_region(Point::new(0.5, 0.5), &polygons).expect("well-formed");
        assert_eq!(
            result,
            RegionMatch::Contained {
                id: PolygonId::new(1)
            }
        );
    }

    #[test]
    fn test_overlap_resolves_to_smallest_area() {
        // A 10x10 floor with a 2x2 room inside it; a point in the room is
        // in both, and the room (most specific) wins.
        let polygons = vec![square(1, 0.0, 0.0, 10.0), square(2, 4.0, 4.0, 2.0)];
        let result = match_region(Point::new(5.0, 5.0), &polygons).expect("well-formed");
        assert_eq!(
            result,
            RegionMatch::Contained {
                id: PolygonId::new(2)
            }
        );

        // A point on the floor but outside the room goes to the floor.
        let result = match_region(Point::new(1.0, 1.0), &polygons).expect("well-formed");
        assert_eq!(
            result,
            RegionMatch::Contained {
                id: PolygonId::new(1)
            }
        );
    }

    #[test]
    fn test_equal_area_overlap_breaks_tie_on_smallest_id() {
        // Identical duplicate fences under two ids.
        let polygons = vec![square(5, 0.0, 0.0, 1.0), square(3, 0.0, 0.0, 1.0)];
        let result = match_region(Point::new(0.5, 0.5), &polygons).expect("well-formed");
        assert_eq!(
            result,
            RegionMatch::Contained {
                id: PolygonId::new(3)
            }
        );
    }

    #[test]
    fn test_no_containment_falls_back_to_nearest_edge() {
        // Two unit squares, point just right of the first.
        let polygons = vec![square(1, 0.0, 0.0, 1.0), square(2, 5.0, 0.0, 1.0)];
        let result = match_region(Point::new(1.5, 0.5), &polygons).expect("well-formed");
        match result {
            RegionMatch::Nearest { id, distance } => {
                assert_eq!(id, PolygonId::new(1));
                assert!((distance - 0.5).abs() < 1e-12);
            }
            other => panic!("expected nearest match, got {:?}", other),
        }
    }

    #[test]
    fn test_nearest_tie_breaks_on_smallest_id() {
        // Point equidistant (1.0) between two unit squares.
        let polygons = vec![square(8, 0.0, 0.0, 1.0), square(4, 3.0, 0.0, 1.0)];
        let result = match_region(Point::new(2.0, 0.5), &polygons).expect("well-formed");
        assert_eq!(
            result,
            RegionMatch::Nearest {
                id: PolygonId::new(4),
                distance: 1.0
            }
        );
    }

    #[test]
    fn test_nearest_uses_edge_distance_not_centroid() {
        // A long hall and a small closet. The point sits just off the
        // hall's long wall; the closet's centroid is closer than the
        // hall's, but the hall's edge is closer than the closet's.
        let polygons = vec![
            rectangle(1, 0.0, 0.0, 10.0, 1.0),
            square(2, 10.5, 2.0, 1.0),
        ];
        let result = match_region(Point::new(9.5, 1.2), &polygons).expect("well-formed");
        match result {
            RegionMatch::Nearest { id, distance } => {
                assert_eq!(id, PolygonId::new(1));
                assert!((distance - 0.2).abs() < 1e-9);
            }
            other => panic!("expected nearest match, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_polygon_surfaces_geometry_error() {
        let broken = Arc::new(Polygon::new(
            PolygonId::new(9),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        ));
        let polygons = vec![square(1, 0.0, 0.0, 1.0), broken];

        let err = match_region(Point::new(0.5, 0.5), &polygons).expect_err("bad ring");
        match err {
            ResolveError::Geometry { id, source } => {
                assert_eq!(id, PolygonId::new(9));
                assert_eq!(source, GeometryError::TooFewVertices { count: 2 });
            }
            other => panic!("expected geometry error, got {:?}", other),
        }
    }
}
