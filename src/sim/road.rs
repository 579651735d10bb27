//! Looping road
//!
//! Two segments of `road_length` leapfrog each other: whenever one falls a
//! full length behind the origin it jumps `2 * road_length` forward, so one
//! segment always covers the camera's near field.

/// Longitudinal start offsets of the two segments
pub fn canonical_offsets(road_length: f32) -> [f32; 2] {
    [0.0, road_length]
}

/// Scroll a segment back by `distance`, wrapping it forward once it reaches
/// `-road_length`. The result always lies in `(-road_length, road_length]`.
pub fn scroll(z: f32, distance: f32, road_length: f32) -> f32 {
    if !distance.is_finite() {
        return z;
    }
    let z = z - distance;
    if z > -road_length {
        return z;
    }
    // Closed form so arbitrarily long scrolls land in one step
    let period = 2.0 * road_length;
    let wrapped = (z + road_length).rem_euclid(period) - road_length;
    if wrapped <= -road_length {
        wrapped + period
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scroll_without_wrap() {
        assert_eq!(scroll(0.0, 2.0, 300.0), -2.0);
        assert_eq!(scroll(300.0, 1.0, 300.0), 299.0);
    }

    #[test]
    fn test_wrap_adds_two_lengths() {
        // Pre-tick z just above the edge, scroll pushes it past
        let z = scroll(-299.5, 1.0, 300.0);
        assert_eq!(z, -299.5 + 600.0 - 1.0);
        assert!(z > -300.0 && z <= 300.0);
    }

    #[test]
    fn test_exact_edge_wraps_to_front() {
        assert_eq!(scroll(-299.0, 1.0, 300.0), 300.0);
    }

    #[test]
    fn test_huge_distance_lands_in_window() {
        let z = scroll(0.0, 1.0e12, 300.0);
        assert!(z > -300.0 && z <= 300.0);
        assert_eq!(scroll(0.0, f32::INFINITY, 300.0), 0.0);
    }

    #[test]
    fn test_multiple_lengths_wrap() {
        // -1300 + 2 * 600
        assert_eq!(scroll(0.0, 1300.0, 300.0), -100.0);
    }

    proptest! {
        #[test]
        fn prop_segments_stay_in_window(
            steps in proptest::collection::vec(0.0f32..2.0, 1..2000),
        ) {
            let length = 300.0;
            let mut segments = canonical_offsets(length);
            for step in steps {
                for z in segments.iter_mut() {
                    *z = scroll(*z, step, length);
                    prop_assert!(*z > -length && *z <= length);
                }
                // Always exactly one length apart (mod 2L)
                let gap = (segments[1] - segments[0]).abs();
                prop_assert!((gap - length).abs() < 0.1);
            }
        }
    }
}
