use dino_verlet::{
    bodies::{Facing, Platform},
    core::{BodyHandle, DinoBehavior, DinosaurDescriptor, Outcome, RectDescriptor},
    error::PhysicsError,
    math::{Rect, Vector2},
    GameState, LevelDescriptor, PhysicWorld, SimulationConfig, WorldEvent,
};

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_position_size(Vector2::new(x, y), width, height)
}

fn level() -> LevelDescriptor {
    LevelDescriptor {
        player: Some(RectDescriptor::new(100.0, 200.0, 40.0, 40.0)),
        goal: Some(RectDescriptor::new(1000.0, 200.0, 40.0, 40.0)),
        dinosaurs: vec![DinosaurDescriptor {
            rect: RectDescriptor::new(500.0, 200.0, 60.0, 40.0),
            image: "trex".into(),
        }],
        platforms: vec![RectDescriptor::new(0.0, 300.0, 1200.0, 20.0)],
    }
}

#[test]
fn test_world_from_level() {
    let world = PhysicWorld::from_level(&level(), SimulationConfig::default()).unwrap();

    assert_eq!(world.dinosaurs().len(), 1);
    assert_eq!(world.dinosaur(0).unwrap().image(), "trex");
    assert_eq!(world.platforms(), &[Platform::new(Vector2::new(0.0, 300.0), 1200, 20)]);
    assert_eq!(world.lives(), 3);
    assert_eq!(world.tick(), 0);
    assert_eq!(world.state(), GameState::Playing);
    assert!(world.goal().polygon().particles().iter().all(|p| p.is_locked()));
}

#[test]
fn test_world_from_level_rejects_bad_input() {
    let mut missing_goal = level();
    missing_goal.goal = None;
    assert!(matches!(
        PhysicWorld::from_level(&missing_goal, SimulationConfig::default()),
        Err(PhysicsError::InvalidLevel(_))
    ));

    let mut flat_platform = level();
    flat_platform.platforms.push(RectDescriptor::new(0.0, 0.0, 10.0, 0.0));
    assert!(matches!(
        PhysicWorld::from_level(&flat_platform, SimulationConfig::default()),
        Err(PhysicsError::InvalidLevel(_))
    ));

    let config = SimulationConfig { sub_steps: 0, ..Default::default() };
    assert!(matches!(
        PhysicWorld::from_level(&level(), config),
        Err(PhysicsError::InvalidParameter(_))
    ));
}

#[test]
fn test_world_rejects_zero_decision_interval() {
    let config = SimulationConfig {
        dino_decision_interval: 0,
        ..Default::default()
    };
    let world = PhysicWorld::new(config, rect(100.0, 200.0, 40.0, 40.0), rect(1000.0, 200.0, 40.0, 40.0));
    assert!(matches!(world, Err(PhysicsError::InvalidParameter(_))));

    let config = SimulationConfig {
        dino_decision_interval: 0,
        ..Default::default()
    };
    assert!(PhysicWorld::from_level(&level(), config).is_err());
}

#[test]
fn test_player_reaching_goal_wins_then_ends() {
    let mut world = PhysicWorld::new(
        SimulationConfig::default(),
        rect(500.0, 300.0, 40.0, 40.0),
        rect(510.0, 310.0, 40.0, 40.0),
    )
    .unwrap();

    world.update();
    assert!(world.is_won());
    assert!(!world.is_lost());
    assert!(!world.is_game_end());
    assert!(world.events().contains(&WorldEvent::Won));

    for _ in 0..299 {
        world.update();
        assert!(world.is_won());
        assert!(!world.is_game_end());
    }

    world.update();
    assert!(world.is_game_end());
    assert!(world.is_won());
    assert_eq!(world.state(), GameState::Ended(Outcome::Won));
    assert!(world.events().contains(&WorldEvent::GameEnded(Outcome::Won)));

    // a finished round is frozen
    let tick = world.tick();
    let center = world.player().polygon().center_of_mass();
    world.update();
    world.move_player_right();
    assert_eq!(world.tick(), tick);
    assert_eq!(world.player().polygon().center_of_mass(), center);
}

#[test]
fn test_dinosaur_reaching_goal_costs_a_life() {
    let config = SimulationConfig {
        life_slots: 1,
        ..Default::default()
    };
    let mut world = PhysicWorld::new(config, rect(100.0, 300.0, 40.0, 40.0), rect(620.0, 310.0, 40.0, 40.0)).unwrap();
    world.add_dinosaur(rect(600.0, 300.0, 40.0, 40.0), "raptor");

    world.update();

    assert_eq!(world.lives(), 0);
    assert!(world.is_lost());
    assert!(!world.is_won());
    let events: Vec<WorldEvent> = world.events_mut().drain().collect();
    assert_eq!(events, vec![WorldEvent::LifeLost { remaining: 0 }, WorldEvent::Lost]);

    for _ in 0..300 {
        world.update();
    }
    assert_eq!(world.state(), GameState::Ended(Outcome::Lost));
}

#[test]
fn test_player_lands_on_platform() {
    let mut world = PhysicWorld::new(
        SimulationConfig::default(),
        rect(100.0, 200.0, 40.0, 40.0),
        rect(1000.0, 100.0, 40.0, 40.0),
    )
    .unwrap();
    world.add_platform(Platform::new(Vector2::new(0.0, 300.0), 400, 20));

    for _ in 0..200 {
        world.update();
    }

    let bounds = world.player().bounds().unwrap();
    assert!(bounds.max.y <= 310.0, "player sank into the platform: {:?}", bounds);
    assert!(bounds.max.y >= 295.0, "player floats above the platform: {:?}", bounds);
    assert!(world.state() == GameState::Playing);
}

#[test]
fn test_player_moves_and_faces() {
    let mut world = PhysicWorld::new(
        SimulationConfig::default(),
        rect(100.0, 200.0, 40.0, 40.0),
        rect(1000.0, 100.0, 40.0, 40.0),
    )
    .unwrap();
    let start = world.player().polygon().center_of_mass();

    world.move_player_left();
    assert_eq!(world.player().facing(), Facing::Left);
    world.move_player_right();
    world.move_player_right();
    assert_eq!(world.player().facing(), Facing::Right);
    let moved = world.player().polygon().center_of_mass();
    assert!((moved.x - (start.x + world.config().move_step)).abs() < 1e-4);

    // airborne players cannot jump
    assert!(!world.player_jump());
}

#[test]
fn test_dinosaur_jumps_at_nearby_player() {
    let mut world = PhysicWorld::new(
        SimulationConfig::default(),
        rect(100.0, 675.0, 40.0, 40.0),
        rect(1000.0, 100.0, 40.0, 40.0),
    )
    .unwrap();
    world.add_dinosaur(rect(300.0, 675.0, 40.0, 40.0), "raptor");

    for _ in 0..59 {
        world.update();
    }
    assert!(!world.events().contains(&WorldEvent::DinosaurJumped { index: 0 }));

    world.update();
    assert_eq!(world.tick(), 60);
    assert!(world.events().contains(&WorldEvent::DinosaurJumped { index: 0 }));

    let dino = world.dinosaur(0).unwrap();
    assert_eq!(dino.behavior(), DinoBehavior::Jumping);
    assert_eq!(dino.body().facing(), Facing::Left);
}

#[test]
fn test_drawn_polygon_joins_the_world() {
    let mut world = PhysicWorld::new(
        SimulationConfig::default(),
        rect(100.0, 200.0, 40.0, 40.0),
        rect(1000.0, 100.0, 40.0, 40.0),
    )
    .unwrap();

    for i in 0..4 {
        assert!(world.add_pencil_particle(400.0 + i as f32 * 20.0, 100.0));
    }
    assert!(world.pencil().is_drawing());

    // strokes in progress are not simulated
    world.update();
    assert_eq!(world.pencil().in_progress().unwrap().particles()[0].position, Vector2::new(400.0, 100.0));

    assert!(world.commit_pencil_polygon());
    assert!(world.events().contains(&WorldEvent::PolygonCommitted { index: 0 }));
    assert!(world.handles().contains(&BodyHandle::Drawn(0)));

    let before = world.drawn_polygon(0).unwrap().center();
    for _ in 0..10 {
        world.update();
    }
    let after = world.drawn_polygon(0).unwrap().center();
    assert!(after.y > before.y, "drawn polygon did not fall");

    assert!(world.remove_pencil_polygon());
    assert!(world.events().contains(&WorldEvent::PolygonRemoved));
    assert!(world.drawn_polygon(0).is_none());
    assert_eq!(world.pencil().points_used(), 0);
}
