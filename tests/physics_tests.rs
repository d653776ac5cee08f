use dino_verlet::{
    bodies::{FormKeeper, OwnerTag, Particle, Platform, Polygon, Stick},
    collision::{get_ray_casting_count, Edge},
    core::{Canvas, IntegrationParams},
    authoring::DinoPencil,
    math::{Rect, Segment, Vector2},
};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn params() -> IntegrationParams {
    IntegrationParams {
        gravity: 0.6,
        sub_steps: 1,
        max_velocity: 20.0,
        ground_friction: 0.5,
    }
}

fn big_canvas() -> Canvas {
    Canvas { width: 10_000.0, height: 10_000.0, margin: 0.0 }
}

#[test]
fn test_stick_converges_to_rest_length() {
    let mut particles = vec![
        Particle::new(Vector2::new(0.0, 0.0), 1.0, OwnerTag::Player),
        Particle::new(Vector2::new(10.0, 0.0), 1.0, OwnerTag::Player),
    ];
    let stick = Stick::new(0, 1, &particles, 0.3);
    particles[1].position = Vector2::new(25.0, 7.0);

    let mut last_error = (stick.current_length(&particles).unwrap() - stick.rest_length()).abs();
    for _ in 0..60 {
        stick.update(&mut particles);
        let error = (stick.current_length(&particles).unwrap() - stick.rest_length()).abs();
        assert!(error <= last_error, "error grew from {} to {}", last_error, error);
        last_error = error;
    }
    assert!(last_error < 1e-3, "stick did not converge, error {}", last_error);
}

#[test]
fn test_compressed_stick_expands() {
    let mut particles = vec![
        Particle::new(Vector2::new(0.0, 0.0), 1.0, OwnerTag::Player),
        Particle::new(Vector2::new(10.0, 0.0), 1.0, OwnerTag::Player),
    ];
    let stick = Stick::new(0, 1, &particles, 0.5);
    particles[1].position = Vector2::new(4.0, 0.0);

    stick.update(&mut particles);

    let length = stick.current_length(&particles).unwrap();
    assert!(length > 4.0 && length < 10.0);
}

#[test]
fn test_form_restoration_is_idempotent_without_displacement() {
    let mut polygon = Polygon::chain(
        [
            Vector2::new(10.0, 10.0),
            Vector2::new(40.0, 5.0),
            Vector2::new(70.0, 30.0),
            Vector2::new(50.0, 80.0),
        ],
        OwnerTag::UserDrawn,
        1.0,
        1.0,
    );
    polygon.particles_mut()[2].mass = 3.0;
    let before: Vec<Vector2> = polygon.particles().iter().map(|p| p.position).collect();

    let mut keeper = FormKeeper::new(&polygon, 0.7);
    for _ in 0..10 {
        keeper.restore_original_form(&mut polygon);
    }

    for (particle, original) in polygon.particles().iter().zip(before) {
        assert_relative_eq!(particle.position, original, epsilon = 1e-4);
    }
}

#[test]
fn test_form_keeper_lets_bodies_translate() {
    let mut polygon = Polygon::rectangle(
        Rect::from_position_size(Vector2::new(0.0, 0.0), 20.0, 20.0),
        OwnerTag::Player,
        1.0,
        1.0,
    );
    let mut keeper = FormKeeper::new(&polygon, 0.5);
    polygon.translate(Vector2::new(15.0, -4.0));

    keeper.restore_original_form(&mut polygon);

    assert_relative_eq!(polygon.particles()[0].position, Vector2::new(15.0, -4.0), epsilon = 1e-4);
    assert_relative_eq!(keeper.center(), Vector2::new(25.0, 6.0), epsilon = 1e-4);
}

fn quad_edges(corners: &[Vector2; 4]) -> Vec<Edge> {
    (0..4)
        .map(|i| Edge {
            a: i,
            b: (i + 1) % 4,
            segment: Segment::new(corners[i], corners[(i + 1) % 4]),
        })
        .collect()
}

#[test]
fn test_point_in_polygon_parity_on_random_points() {
    let corners = [
        Vector2::new(100.0, 100.0),
        Vector2::new(300.0, 120.0),
        Vector2::new(280.0, 300.0),
        Vector2::new(90.0, 260.0),
    ];
    let edges = quad_edges(&corners);
    let bounds = Rect::from_points(corners).unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    // Strictly positive convex weights land strictly inside a convex quad
    for _ in 0..32 {
        let weights: [f32; 4] = [
            rng.gen_range(0.05..1.0),
            rng.gen_range(0.05..1.0),
            rng.gen_range(0.05..1.0),
            rng.gen_range(0.05..1.0),
        ];
        let total: f32 = weights.iter().sum();
        let point = corners
            .iter()
            .zip(weights)
            .map(|(c, w)| *c * (w / total))
            .sum::<Vector2>();

        let count = get_ray_casting_count(point, &edges, 10_000.0);
        assert_eq!(count % 2, 1, "interior point {} crossed {} edges", point, count);
    }

    let mut outside = 0;
    while outside < 32 {
        let point = Vector2::new(rng.gen_range(-200.0..600.0), rng.gen_range(-200.0..600.0));
        if bounds.contains_point(point) {
            continue;
        }
        let count = get_ray_casting_count(point, &edges, 10_000.0);
        assert_eq!(count % 2, 0, "exterior point {} crossed {} edges", point, count);
        outside += 1;
    }
}

#[test]
fn test_locked_particle_never_moves() {
    let mut polygon = Polygon::rectangle(
        Rect::from_position_size(Vector2::new(100.0, 50.0), 40.0, 40.0),
        OwnerTag::Goal,
        1.0,
        1.0,
    );
    polygon.particles_mut()[0].set_locked(true);
    let anchor = polygon.particles()[0].position;
    let mut keeper = FormKeeper::new(&polygon, 0.5);
    let platform = Platform::new(Vector2::new(0.0, 120.0), 400, 20);

    for _ in 0..1000 {
        polygon.update(&params(), &big_canvas());
        keeper.restore_original_form(&mut polygon);
        platform.handle_polygon_collision(&mut polygon, 10.0);
        assert_eq!(polygon.particles()[0].position, anchor);
    }

    // the rest of the body hangs from the anchor without exploding
    assert!(polygon.particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn test_ground_friction_decelerates_without_reversing() {
    let mut particle = Particle::new(Vector2::new(6.0, 0.0), 1.0, OwnerTag::Player);
    particle.previous_position = Vector2::new(0.0, 0.0);

    let mut last_dx = particle.velocity().x;
    let mut stopped = false;
    for _ in 0..100 {
        particle.set_in_ground(true);
        particle.update(&params());
        // stay on the floor so gravity does not dominate the clamp
        particle.position.y = 0.0;
        particle.previous_position.y = 0.0;

        let dx = particle.velocity().x;
        assert!(dx >= 0.0, "friction reversed the motion: {}", dx);
        if last_dx > 0.0 {
            assert!(dx < last_dx, "horizontal speed did not decrease: {} -> {}", last_dx, dx);
        } else {
            assert_eq!(dx, 0.0);
            stopped = true;
        }
        last_dx = dx;
    }
    assert!(stopped);
}

#[test]
fn test_airborne_particle_keeps_horizontal_speed() {
    let mut particle = Particle::new(Vector2::new(3.0, 0.0), 1.0, OwnerTag::Player);
    particle.previous_position = Vector2::new(0.0, 0.0);
    particle.update(&params());
    assert_relative_eq!(particle.velocity().x, 3.0);
}

#[test]
fn test_vertical_velocity_is_clamped_too() {
    let mut particle = Particle::new(Vector2::new(0.0, 0.0), 1.0, OwnerTag::Player);
    particle.previous_position = Vector2::new(0.0, -100.0);
    particle.update(&IntegrationParams { gravity: 0.0, ..params() });
    assert_relative_eq!(particle.velocity().y, 20.0, epsilon = 1e-4);
}

#[test]
fn test_particle_lands_on_platform() {
    let platform = Platform::new(Vector2::new(0.0, 100.0), 200, 20);
    let mut particle = Particle::new(Vector2::new(50.0, 95.0), 1.0, OwnerTag::Player);

    let mut landed_at = None;
    for tick in 0..30 {
        particle.update(&params());
        particle.keep_inside_canvas(&big_canvas());
        let in_top_zone = particle.position.y >= 100.0 && particle.position.y < 110.0;

        let side = platform.handle_particle_collision(&mut particle, 10.0);

        if in_top_zone && landed_at.is_none() {
            assert!(side.is_some());
            landed_at = Some(tick);
        }
        if landed_at.is_some() {
            assert_eq!(particle.position.y, 100.0);
            assert!(particle.is_in_ground());
        }
    }
    assert!(landed_at.is_some(), "particle never reached the platform");
    assert_relative_eq!(particle.position.x, 50.0);
}

#[test]
fn test_pencil_point_budget() {
    let mut pencil = DinoPencil::new(5);
    let accepted: Vec<bool> = (0..7)
        .map(|i| pencil.add_particle(100.0 + i as f32 * 10.0, 50.0, 1.0))
        .collect();

    assert_eq!(accepted, vec![true, true, true, true, true, false, false]);
    assert_eq!(pencil.in_progress().unwrap().len(), 5);

    assert!(pencil.add_polygon());
    assert!(!pencil.add_particle(0.0, 0.0, 1.0));

    pencil.remove_polygon();
    assert!(pencil.add_particle(0.0, 0.0, 1.0));
}
