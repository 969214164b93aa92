use log::debug;

use crate::coords::chunk_coordinate::{AbsolutePosition, ChunkCoordinate, Containment};
use crate::coords::error::LayoutError;
use crate::coords::layout::WorldLayout;

/// Pulls an absolute point back inside the world.
///
/// Each axis is clamped into `[0, bound]`, where `bound` is
/// [`WorldLayout::to_absolute_bound`]. An axis past the far edge becomes
/// exactly `bound`; a negative axis becomes exactly `0`; every other axis is
/// left as it was. The result is always in bounds, so correcting twice
/// gives the same point as correcting once.
pub fn correct_out_of_bounds(point: AbsolutePosition, layout: &WorldLayout) -> Result<AbsolutePosition, LayoutError> {
    correct_with_containment(point, layout).map(|(corrected, _)| corrected)
}

/// Like [`correct_out_of_bounds`], but also reports how the original point
/// was classified against the layout boundary.
pub fn correct_with_containment(
    point: AbsolutePosition,
    layout: &WorldLayout,
) -> Result<(AbsolutePosition, Containment), LayoutError> {
    let max = layout.to_absolute_bound()?;
    let containment = match ChunkCoordinate::from_absolute(point, layout) {
        Ok(coord) => layout.classify(&coord),
        Err(LayoutError::OutOfRange { .. }) => beyond_coordinate_range(point),
        Err(err) => return Err(err),
    };
    let corrected = point.clamp(AbsolutePosition::ZERO, max);

    if corrected != point {
        debug!("clamped point {} into [0, {}], now {}", point, max, corrected);
    }
    Ok((corrected, containment))
}

// Points too far out for a chunk coordinate are past one edge or the other
fn beyond_coordinate_range(point: AbsolutePosition) -> Containment {
    if point.cmplt(AbsolutePosition::ZERO).any() {
        Containment::BelowOrigin
    } else {
        Containment::Above
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::{DVec3, IVec2, IVec3};

    fn layout() -> WorldLayout {
        // absolute bound (39, 29, 3)
        WorldLayout::new(IVec2::new(4, 3), IVec3::new(10, 10, 4))
    }

    #[test]
    fn in_bounds_point_is_unchanged() {
        let point = DVec3::new(12.0, 7.0, 2.0);
        assert_eq!(correct_out_of_bounds(point, &layout()).unwrap(), point);
        let max = layout().to_absolute_bound().unwrap();
        assert_eq!(correct_out_of_bounds(max, &layout()).unwrap(), max);
        assert_eq!(correct_out_of_bounds(DVec3::ZERO, &layout()).unwrap(), DVec3::ZERO);
    }

    #[test]
    fn far_axis_clamps_to_bound() {
        for overshoot in [1.0, 9.0, 39.0, 40.0, 1000.0] {
            let point = DVec3::new(39.0 + overshoot, 5.0, 1.0);
            let corrected = correct_out_of_bounds(point, &layout()).unwrap();
            assert_eq!(corrected, DVec3::new(39.0, 5.0, 1.0), "overshoot {overshoot}");
        }
        let corrected = correct_out_of_bounds(DVec3::new(3.0, 58.0, 9.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(3.0, 29.0, 3.0));
    }

    #[test]
    fn negative_axis_clamps_to_zero() {
        let corrected = correct_out_of_bounds(DVec3::new(-5.0, 8.0, 2.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(0.0, 8.0, 2.0));
        let corrected = correct_out_of_bounds(DVec3::new(4.0, -1.0, -7.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn mixed_directions_clamp_both() {
        let corrected = correct_out_of_bounds(DVec3::new(500.0, -3.0, 1.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(39.0, 0.0, 1.0));
    }

    #[test]
    fn correction_is_idempotent() {
        let points = [
            DVec3::new(-4.0, 100.0, 2.0),
            DVec3::new(40.0, 30.0, 4.0),
            DVec3::new(-0.5, 12.25, -3.0),
            DVec3::new(17.0, 3.0, 1.0),
        ];
        for point in points {
            let once = correct_out_of_bounds(point, &layout()).unwrap();
            let twice = correct_out_of_bounds(once, &layout()).unwrap();
            assert_eq!(once, twice);
            assert!(layout().contains(once).unwrap());
        }
    }

    #[test]
    fn reports_containment() {
        let (_, above) = correct_with_containment(DVec3::new(40.0, 0.0, 0.0), &layout()).unwrap();
        assert_eq!(above, Containment::Above);
        let (_, below) = correct_with_containment(DVec3::new(-1.0, 0.0, 0.0), &layout()).unwrap();
        assert_eq!(below, Containment::BelowOrigin);
        let (_, equal) = correct_with_containment(DVec3::new(39.0, 29.0, 3.0), &layout()).unwrap();
        assert_eq!(equal, Containment::Equal);
    }

    #[test]
    fn far_points_are_corrected_without_panicking() {
        let corrected = correct_out_of_bounds(DVec3::new(0.0, 0.0, 3.0e9), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(0.0, 0.0, 3.0));
        let corrected = correct_out_of_bounds(DVec3::new(-3.0e9, 0.0, 0.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::ZERO);
        let corrected = correct_out_of_bounds(DVec3::new(1.0e30, f64::INFINITY, 2.0), &layout()).unwrap();
        assert_eq!(corrected, DVec3::new(39.0, 29.0, 2.0));
    }

    #[test]
    fn far_points_still_report_containment() {
        let (_, above) = correct_with_containment(DVec3::new(0.0, 0.0, 3.0e9), &layout()).unwrap();
        assert_eq!(above, Containment::Above);
        let (_, below) = correct_with_containment(DVec3::new(5.0e9, -3.0e9, 0.0), &layout()).unwrap();
        assert_eq!(below, Containment::BelowOrigin);
    }

    #[test]
    fn fraction_past_last_tile_is_trimmed() {
        // still inside the last tile, so the chunk form is within bounds
        let (corrected, containment) = correct_with_containment(DVec3::new(39.5, 29.0, 3.0), &layout()).unwrap();
        assert_eq!(containment, Containment::Equal);
        assert_eq!(corrected, DVec3::new(39.0, 29.0, 3.0));
        let (corrected, containment) = correct_with_containment(DVec3::new(12.0, 29.75, 0.0), &layout()).unwrap();
        assert_eq!(containment, Containment::Within);
        assert_eq!(corrected, DVec3::new(12.0, 29.0, 0.0));
    }

    #[test]
    fn degenerate_layout_fails() {
        assert!(correct_out_of_bounds(DVec3::ONE, &WorldLayout::ZERO).is_err());
    }
}
