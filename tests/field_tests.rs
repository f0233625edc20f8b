use constellation::geometry::{circle_collision, Bounds, Circle};
use constellation::surface::{DrawCommand, Recorder};
use constellation::{connected, Field, FieldParams, Particle, Style};
use nannou::color::rgba;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Field on a square surface that is also the viewport
pub fn square_field(side: f32, seed: u64) -> Field {
    let bounds = Bounds::new(side, side);
    Field::new(bounds, bounds, &Style::default(), FieldParams::default(), Some(seed))
}

pub fn still_particle(x: f32, y: f32, size: f32) -> Particle {
    Particle::new(vec2(x, y), Vec2::ZERO, size, rgba(1.0, 1.0, 1.0, 1.0))
}

// ==================================================================================
// Initialization
// ==================================================================================

#[test]
fn initialize_scales_with_area() {
    let field = square_field(700.0, 1);
    assert_eq!(field.particles().len(), 70);

    for side in [0.0, 50.0, 83.0, 84.0, 321.0, 1000.0] {
        let field = square_field(side, 2);
        let expected = (side * side / 7000.0).floor() as usize;
        assert_eq!(field.particles().len(), expected, "side {}", side);
    }
}

#[test]
fn initialize_samples_within_ranges() {
    let field = square_field(900.0, 3);
    for p in field.particles() {
        assert!(p.size >= 1.0 && p.size < 6.0);
        assert!(p.velocity.x >= -0.5 && p.velocity.x < 0.5);
        assert!(p.velocity.y >= -0.5 && p.velocity.y < 0.5);
        assert!(p.position.x >= 0.0 && p.position.x <= 900.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 900.0);
        assert_eq!(p.color, Style::default().particle_color);
    }
}

#[test]
fn positions_follow_the_viewport_not_the_surface() {
    // A small surface in a big window: count from the surface, positions from the window
    let surface = Bounds::new(140.0, 100.0);
    let viewport = Bounds::new(2000.0, 2000.0);
    let field = Field::new(surface, viewport, &Style::default(), FieldParams::default(), Some(4));
    assert_eq!(field.particles().len(), 2);

    let big = Field::new(
        Bounds::new(1000.0, 1000.0),
        viewport,
        &Style::default(),
        FieldParams::default(),
        Some(4),
    );
    assert!(big.particles().iter().any(|p| p.position.x > 1000.0 || p.position.y > 1000.0));
}

#[test]
fn same_seed_same_layout() {
    let a = square_field(500.0, 11);
    let b = square_field(500.0, 11);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn zero_area_renders_nothing() {
    let mut field = square_field(0.0, 5);
    let mut recorder = Recorder::new();
    assert_eq!(field.tick(&mut recorder), 0);
    assert_eq!(recorder.commands, vec![DrawCommand::Clear]);
}

// ==================================================================================
// Tick
// ==================================================================================

#[test]
fn tick_without_pointer_draws_every_particle_once() {
    let mut field = square_field(700.0, 6);
    let mut recorder = Recorder::new();
    field.tick(&mut recorder);

    assert_eq!(recorder.commands.first(), Some(&DrawCommand::Clear));
    assert_eq!(recorder.circle_count(), 70);
    assert!(recorder.circles().all(|c| match c {
        DrawCommand::Circle { glow, .. } => *glow == 10.0,
        _ => false,
    }));
}

#[test]
fn tick_with_pointer_draws_a_marker_that_is_never_simulated() {
    let mut field = square_field(700.0, 7);
    field.set_pointer(Some(vec2(350.0, 350.0)));

    let mut recorder = Recorder::new();
    field.tick(&mut recorder);

    assert_eq!(recorder.circle_count(), 71);
    assert_eq!(field.particles().len(), 70);
    let marker = recorder
        .circles()
        .find(|c| matches!(c, DrawCommand::Circle { radius, center, .. } if *radius == 3.0 && *center == vec2(350.0, 350.0)));
    assert!(marker.is_some());

    field.set_pointer(None);
    recorder.reset();
    field.tick(&mut recorder);
    assert_eq!(recorder.circle_count(), 70);
}

#[test]
fn lines_use_post_move_positions() {
    let mut field = square_field(70.0, 8);
    {
        let particles = field.particles_mut();
        particles.push(Particle::new(vec2(10.0, 10.0), vec2(1.0, 0.0), 1.0, rgba(1.0, 1.0, 1.0, 1.0)));
        particles.push(Particle::new(vec2(15.0, 10.0), vec2(-1.0, 0.0), 1.0, rgba(1.0, 1.0, 1.0, 1.0)));
    }

    let mut recorder = Recorder::new();
    assert_eq!(field.tick(&mut recorder), 1);

    let line = recorder.lines().next().cloned();
    match line {
        Some(DrawCommand::Line { from, to, width, color }) => {
            assert_eq!(from, vec2(11.0, 10.0));
            assert_eq!(to, vec2(14.0, 10.0));
            assert_eq!(width, 1.0);
            assert_eq!(color, Style::default().stroke_style);
        }
        other => panic!("expected a line, got {:?}", other),
    }
}

// ==================================================================================
// Connection pass
// ==================================================================================

#[test]
fn connection_threshold_scenario() {
    let mut field = square_field(70.0, 9);
    assert_eq!(field.connect_threshold(), 100.0);

    field.particles_mut().extend([still_particle(0.0, 0.0, 1.0), still_particle(10.0, 10.0, 1.0)]);
    let mut recorder = Recorder::new();
    assert_eq!(field.connect(&mut recorder), 0);

    field.particles_mut()[1].position = vec2(5.0, 5.0);
    recorder.reset();
    assert_eq!(field.connect(&mut recorder), 1);
}

#[test]
fn pair_exactly_at_threshold_is_excluded() {
    let mut field = square_field(70.0, 10);
    field.particles_mut().extend([still_particle(0.0, 0.0, 1.0), still_particle(10.0, 0.0, 1.0)]);
    let mut recorder = Recorder::new();
    assert_eq!(field.connect(&mut recorder), 0);
}

#[test]
fn connection_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..500 {
        let a = vec2(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let b = vec2(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let threshold = rng.gen_range(0.0..2000.0);
        assert_eq!(connected(a, b, threshold), connected(b, a, threshold));
    }
}

#[test]
fn each_pair_is_visited_once() {
    let mut field = square_field(700.0, 13);
    // everything on one spot: every pair connects
    for p in field.particles_mut().iter_mut() {
        p.position = vec2(100.0, 100.0);
    }
    let mut recorder = Recorder::new();
    let n = field.particles().len();
    assert_eq!(field.connect(&mut recorder), n * (n - 1) / 2);
}

// ==================================================================================
// Motion
// ==================================================================================

#[test]
fn velocity_flips_exactly_when_outside() {
    let mut field = square_field(50.0, 14);
    field.particles_mut().push(Particle::new(
        vec2(3.0, 47.0),
        vec2(1.7, 2.3),
        2.0,
        rgba(1.0, 1.0, 1.0, 1.0),
    ));
    let bounds = field.surface_size();

    let mut flips = (0, 0);
    let mut expected = (0, 0);
    for _ in 0..2000 {
        let before = field.particles()[0].clone();
        if before.position.x > bounds.width || before.position.x < 0.0 {
            expected.0 += 1;
        }
        if before.position.y > bounds.height || before.position.y < 0.0 {
            expected.1 += 1;
        }

        field.update();

        let after = &field.particles()[0];
        if after.velocity.x.signum() != before.velocity.x.signum() {
            flips.0 += 1;
        }
        if after.velocity.y.signum() != before.velocity.y.signum() {
            flips.1 += 1;
        }
        // never further out than one step
        assert!(after.position.x >= -1.7 - 1e-3 && after.position.x <= 50.0 + 1.7 + 1e-3);
        assert!(after.position.y >= -2.3 - 1e-3 && after.position.y <= 50.0 + 2.3 + 1e-3);
    }

    assert_eq!(flips, expected);
    assert!(flips.0 > 0 && flips.1 > 0);
}

#[test]
fn collision_scenario() {
    let particle = still_particle(50.0, 50.0, 5.0);
    let pointer = Circle::new(52.0, 52.0, 1.0);
    assert!(circle_collision(&particle.circle(), &pointer));
    assert!(circle_collision(&pointer, &particle.circle()));
}

#[test]
fn repulsion_stays_inside_the_margin() {
    let params = FieldParams::default();
    let bounds = Bounds::new(400.0, 300.0);
    let mut rng = StdRng::seed_from_u64(15);

    for _ in 0..2000 {
        let size = rng.gen_range(1.0..6.0);
        let start = vec2(rng.gen_range(0.0..=400.0), rng.gen_range(0.0..=300.0));
        let pointer = Circle::new(
            start.x + rng.gen_range(-8.0..8.0),
            start.y + rng.gen_range(-8.0..8.0),
            rng.gen_range(1.0..20.0),
        );

        let mut p = still_particle(start.x, start.y, size);
        p.step(Some(&pointer), bounds, &params);

        let margin = size * params.repulsion_margin_factor;
        if p.position.x != start.x {
            assert!(p.position.x >= margin && p.position.x <= bounds.width - margin);
        }
        if p.position.y != start.y {
            assert!(p.position.y >= margin && p.position.y <= bounds.height - margin);
        }
    }
}

#[test]
fn pointer_in_field_pushes_particles_away() {
    let mut field = square_field(400.0, 16);
    field.particles_mut().clear();
    field.particles_mut().push(still_particle(200.0, 200.0, 2.0));
    // radius (400/80)^2 = 25
    field.set_pointer(Some(vec2(195.0, 205.0)));
    field.update();
    assert_eq!(field.particles()[0].position, vec2(210.0, 190.0));

    field.set_pointer(None);
    field.update();
    assert_eq!(field.particles()[0].position, vec2(210.0, 190.0));
}
