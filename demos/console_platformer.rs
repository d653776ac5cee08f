use dino_verlet::core::{DinosaurDescriptor, RectDescriptor};
use dino_verlet::{LevelDescriptor, PhysicWorld, SimulationConfig, SoftBody, WorldEvent};
use std::thread::sleep;
use std::time::Duration;

const WIDTH: usize = 80;
const HEIGHT: usize = 24;

fn level() -> LevelDescriptor {
    LevelDescriptor {
        player: Some(RectDescriptor::new(60.0, 560.0, 40.0, 40.0)),
        goal: Some(RectDescriptor::new(1150.0, 380.0, 50.0, 50.0)),
        dinosaurs: vec![DinosaurDescriptor {
            rect: RectDescriptor::new(700.0, 560.0, 60.0, 40.0),
            image: "trex".into(),
        }],
        platforms: vec![
            RectDescriptor::new(0.0, 620.0, 1280.0, 40.0),
            RectDescriptor::new(1050.0, 440.0, 230.0, 20.0),
        ],
    }
}

// Scripted stand-in for keyboard input
fn drive(world: &mut PhysicWorld, frame: u32) {
    world.move_player_right();
    if frame % 45 == 0 {
        world.player_jump();
    }

    // draw a ramp up to the goal ledge once
    if frame == 30 {
        for i in 0..12 {
            let x = 900.0 + i as f32 * 14.0;
            let y = 600.0 - i as f32 * 14.0;
            world.add_pencil_particle(x, y);
        }
        world.commit_pencil_polygon();
    }
}

fn plot(grid: &mut [Vec<char>], body: &SoftBody, config: &SimulationConfig, glyph: char) {
    let sx = WIDTH as f32 / config.canvas_width;
    let sy = HEIGHT as f32 / config.canvas_height;
    for particle in body.polygon().particles() {
        let x = (particle.position.x * sx) as usize;
        let y = (particle.position.y * sy) as usize;
        if x < WIDTH && y < HEIGHT {
            grid[y][x] = glyph;
        }
    }
}

fn main() {
    let mut world = match PhysicWorld::from_level(&level(), SimulationConfig::default()) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("failed to build level: {}", err);
            return;
        }
    };

    let total_frames = 900;
    let frame_time = 1.0 / 60.0;

    for frame in 0..total_frames {
        drive(&mut world, frame);
        world.update();

        // Clear screen
        print!("\x1B[2J\x1B[1;1H");

        let config = world.config().clone();
        let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

        // Draw platforms
        for platform in world.platforms() {
            let rect = platform.rect();
            let x0 = (rect.min.x * WIDTH as f32 / config.canvas_width) as usize;
            let x1 = (rect.max.x * WIDTH as f32 / config.canvas_width) as usize;
            let y = (rect.min.y * HEIGHT as f32 / config.canvas_height) as usize;
            if y < HEIGHT {
                for x in x0..x1.min(WIDTH) {
                    grid[y][x] = '=';
                }
            }
        }

        for body in world.pencil().polygons() {
            plot(&mut grid, body, &config, '~');
        }
        plot(&mut grid, world.goal(), &config, 'G');
        for dino in world.dinosaurs() {
            plot(&mut grid, dino.body(), &config, 'D');
        }
        plot(&mut grid, world.player(), &config, 'P');

        for row in &grid {
            let line: String = row.iter().collect();
            println!("{}", line);
        }

        let center = world.player().center();
        println!(
            "tick={} lives={} state={:?} player=({:.1},{:.1}) pencil={}/{}",
            world.tick(),
            world.lives(),
            world.state(),
            center.x,
            center.y,
            world.pencil().points_used(),
            config.max_polygon_points
        );

        for event in world.events_mut().drain() {
            println!("event: {:?}", event);
            if let WorldEvent::GameEnded(outcome) = event {
                println!("round over: {:?}", outcome);
                return;
            }
        }

        // Wait for next frame
        sleep(Duration::from_millis((frame_time * 1000.0) as u64));
    }
}
