//! Vehicle overlap test
//!
//! Vehicles are compared as axis-aligned boxes around their origins: two cars
//! collide when they are close both laterally and longitudinally. Height is
//! ignored.

use glam::Vec3;

use crate::tuning::CollisionBox;

/// True iff `|a.x - b.x| < lateral` and `|a.z - b.z| < longitudinal`
pub fn collides(a: Vec3, b: Vec3, bounds: &CollisionBox) -> bool {
    (a.x - b.x).abs() < bounds.lateral && (a.z - b.z).abs() < bounds.longitudinal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_ahead_collides() {
        let bounds = CollisionBox::default();
        assert!(collides(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), &bounds));
        assert!(collides(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), &bounds));
    }

    #[test]
    fn test_far_ahead_misses() {
        let bounds = CollisionBox::default();
        assert!(!collides(Vec3::ZERO, Vec3::new(0.0, 0.0, 6.0), &bounds));
        // Boundary is exclusive
        assert!(!collides(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0), &bounds));
    }

    #[test]
    fn test_adjacent_lane_misses() {
        let bounds = CollisionBox::default();
        assert!(!collides(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), &bounds));
        // Mid lane change: partially across the divider
        assert!(collides(Vec3::new(1.5, 0.0, 0.0), Vec3::new(4.0, 0.0, 1.0), &bounds));
    }

    #[test]
    fn test_height_ignored() {
        let bounds = CollisionBox::default();
        assert!(collides(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), &bounds));
    }
}
