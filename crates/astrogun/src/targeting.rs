//! Bullet targeting
//!
//! Bullets leave the origin in a straight line, so whether a bullet can hit
//! an asteroid is decided once, when it is fired: the asteroid's collision
//! sphere must touch the bullet's line.

use crate::asteroids::{Asteroid, AsteroidId};
use crate::bullets::Destination;
use astro_engine::foundation::math::Vec3;
use astro_engine::physics::{BoundingSphere, Ray};
use slotmap::SlotMap;

/// Line/sphere incidence for a line through the origin
///
/// True iff `(I·c)² − (I·I)(c·c − r²) >= 0`; a tangent line counts.
pub fn check_incidence(center: &Vec3, radius: f32, direction: &Vec3) -> bool {
    let ray = Ray {
        origin: Vec3::zeros(),
        direction: *direction,
    };
    BoundingSphere::new(*center, radius).is_incident(&ray)
}

/// Nearest incident asteroid for a bullet fired along `direction`
///
/// Nearness is squared distance from the origin. On equal distances the
/// first asteroid in pool iteration order wins.
pub fn select_destination(active: &SlotMap<AsteroidId, Asteroid>, direction: &Vec3) -> Option<Destination> {
    let mut best: Option<Destination> = None;
    for (id, asteroid) in active {
        if !check_incidence(&asteroid.position(), asteroid.radius(), direction) {
            continue;
        }
        let distance2 = asteroid.distance2();
        if best.map_or(true, |b| distance2 < b.distance2_at_fire) {
            best = Some(Destination {
                id,
                distance2_at_fire: distance2,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asteroids::fixtures::asteroid_at;

    #[test]
    fn test_tangent_line_is_a_hit() {
        let direction = Vec3::new(0.0, 0.0, 1.0);
        assert!(check_incidence(&Vec3::new(5.0, 0.0, 10.0), 5.0, &direction));
        assert!(!check_incidence(&Vec3::new(5.001, 0.0, 10.0), 5.0, &direction));
    }

    #[test]
    fn test_matches_analytic_discriminant() {
        let directions = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(-0.3, 0.2, 0.9).normalize(),
        ];
        let centers = [
            Vec3::new(0.0, 0.0, 50.0),
            Vec3::new(10.0, 8.0, 3.0),
            Vec3::new(-20.0, 15.0, 60.0),
            Vec3::new(3.0, -2.0, -40.0),
        ];
        for direction in &directions {
            for center in &centers {
                for radius in [0.0_f32, 1.0, 5.0, 30.0] {
                    let i_dot_c = direction.dot(center);
                    let expected = i_dot_c * i_dot_c - (center.dot(center) - radius * radius) >= 0.0;
                    assert_eq!(check_incidence(center, radius, direction), expected);
                }
            }
        }
    }

    #[test]
    fn test_nearest_incident_asteroid_is_selected() {
        let mut active = SlotMap::with_key();
        let direction = Vec3::new(0.0, 0.0, 1.0);
        // d² = 10 and d² = 4, both on the bullet line
        let far = active.insert(asteroid_at(0, Vec3::new(0.0, 0.0, 10.0_f32.sqrt()), 1.0));
        let near = active.insert(asteroid_at(1, Vec3::new(0.0, 0.0, 2.0), 1.0));
        // Closer still, but off the line
        active.insert(asteroid_at(2, Vec3::new(0.0, 1.5, 0.0), 1.0));

        let destination = select_destination(&active, &direction).unwrap();
        assert_eq!(destination.id, near);
        assert_ne!(destination.id, far);
        assert!((destination.distance2_at_fire - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_first_in_pool_order() {
        let mut active = SlotMap::with_key();
        let direction = Vec3::new(0.0, 0.0, 1.0);
        let first = active.insert(asteroid_at(0, Vec3::new(1.0, 0.0, 30.0), 2.0));
        active.insert(asteroid_at(1, Vec3::new(-1.0, 0.0, 30.0), 2.0));

        assert_eq!(select_destination(&active, &direction).unwrap().id, first);
    }

    #[test]
    fn test_no_incident_asteroid_means_no_destination() {
        let mut active = SlotMap::with_key();
        active.insert(asteroid_at(0, Vec3::new(50.0, 0.0, 0.0), 5.0));
        assert!(select_destination(&active, &Vec3::new(0.0, 0.0, 1.0)).is_none());
        assert!(select_destination(&SlotMap::with_key(), &Vec3::new(0.0, 0.0, 1.0)).is_none());
    }
}
