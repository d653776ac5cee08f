use crate::authoring::DinoPencil;
use crate::bodies::{OwnerTag, Platform, SoftBody};
use crate::collision::collide_polygons;
use crate::core::{
    BodyHandle, Dinosaur, EventQueue, GameState, LevelDescriptor, Outcome,
    SimulationConfig, SimulationContext, WorldEvent,
};
use crate::error::PhysicsError;
use crate::math::{Rect, Vector2};
use crate::Result;

/// Borrows two distinct elements of a slice mutably
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// The platformer world: every body in play, the static platforms, and round state.
///
/// A world is built for one level and discarded on level change. Each call to
/// [`update`](PhysicWorld::update) runs one tick in a fixed order:
///
/// 1. dinosaurs decide (every `dino_decision_interval` ticks), integrate and restore form
/// 2. the player and every drawn polygon integrate and restore form
/// 3. every body is collided against every other body, except player/goal;
///    a dinosaur touching the goal costs a life
/// 4. the player is collided against the goal; any contact wins the round
/// 5. every body is resolved against every platform
/// 6. a decided round ends `end_countdown_ticks` ticks after the decision
pub struct PhysicWorld {
    config: SimulationConfig,
    player: SoftBody,
    goal: SoftBody,
    dinosaurs: Vec<Dinosaur>,
    platforms: Vec<Platform>,
    pencil: DinoPencil,
    context: SimulationContext,
    events: EventQueue,
}

impl PhysicWorld {
    /// Creates a world with a player and an anchored goal and nothing else.
    ///
    /// Fails if the configuration does not validate or either rectangle is degenerate.
    pub fn new(config: SimulationConfig, player: Rect, goal: Rect) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejecting simulation config");
            return Err(err);
        }
        for (what, rect) in [("player", player), ("goal", goal)] {
            if !rect.is_valid() {
                return Err(PhysicsError::InvalidLevel(format!(
                    "{} rectangle {:?} must have a finite position and positive size",
                    what, rect
                )));
            }
        }

        let player = SoftBody::rectangle(
            player,
            OwnerTag::Player,
            config.particle_mass,
            config.stick_stiffness,
            config.body_form_stiffness,
        );

        let mut goal = SoftBody::rectangle(
            goal,
            OwnerTag::Goal,
            config.particle_mass,
            config.stick_stiffness,
            config.body_form_stiffness,
        );
        goal.polygon_mut().set_locked(true);

        let pencil = DinoPencil::from_config(&config);
        let context = SimulationContext::new(config.life_slots);

        Ok(Self {
            config,
            player,
            goal,
            dinosaurs: Vec::new(),
            platforms: Vec::new(),
            pencil,
            context,
            events: EventQueue::new(),
        })
    }

    /// Builds the world described by a level
    pub fn from_level(level: &LevelDescriptor, config: SimulationConfig) -> Result<Self> {
        level.validate()?;

        let (Some(player), Some(goal)) = (level.player, level.goal) else {
            return Err(PhysicsError::InvalidLevel("level is missing player or goal".into()));
        };

        let mut world = Self::new(config, player.to_rect(), goal.to_rect())?;
        for dino in &level.dinosaurs {
            world.add_dinosaur(dino.rect.to_rect(), dino.image.clone());
        }
        for platform in &level.platforms {
            world.add_platform(Platform::new(
                Vector2::new(platform.x, platform.y),
                platform.width.round() as i32,
                platform.height.round() as i32,
            ));
        }

        tracing::debug!(
            dinosaurs = world.dinosaurs.len(),
            platforms = world.platforms.len(),
            "built world from level"
        );
        Ok(world)
    }

    /// Adds a dinosaur and returns its index
    pub fn add_dinosaur(&mut self, rect: Rect, image: impl Into<String>) -> usize {
        let body = SoftBody::rectangle(
            rect,
            OwnerTag::Dinosaur,
            self.config.particle_mass,
            self.config.stick_stiffness,
            self.config.body_form_stiffness,
        );
        self.dinosaurs.push(Dinosaur::new(body, image));
        self.dinosaurs.len() - 1
    }

    pub fn add_platform(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// Returns a reference to the simulation configuration
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn player(&self) -> &SoftBody {
        &self.player
    }

    #[inline]
    pub fn player_mut(&mut self) -> &mut SoftBody {
        &mut self.player
    }

    #[inline]
    pub fn goal(&self) -> &SoftBody {
        &self.goal
    }

    #[inline]
    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    #[inline]
    pub fn dinosaur(&self, index: usize) -> Option<&Dinosaur> {
        self.dinosaurs.get(index)
    }

    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    #[inline]
    pub fn pencil(&self) -> &DinoPencil {
        &self.pencil
    }

    #[inline]
    pub fn pencil_mut(&mut self) -> &mut DinoPencil {
        &mut self.pencil
    }

    #[inline]
    pub fn drawn_polygon(&self, index: usize) -> Option<&SoftBody> {
        self.pencil.polygons().get(index)
    }

    /// Looks up any body in the world
    pub fn body(&self, handle: BodyHandle) -> Result<&SoftBody> {
        let body = match handle {
            BodyHandle::Player => Some(&self.player),
            BodyHandle::Goal => Some(&self.goal),
            BodyHandle::Dinosaur(i) => self.dinosaurs.get(i).map(Dinosaur::body),
            BodyHandle::Drawn(i) => self.pencil.polygons().get(i),
        };
        body.ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Handles of every body currently in play
    pub fn handles(&self) -> Vec<BodyHandle> {
        let mut handles = vec![BodyHandle::Player];
        handles.extend((0..self.dinosaurs.len()).map(BodyHandle::Dinosaur));
        handles.push(BodyHandle::Goal);
        handles.extend((0..self.pencil.polygons().len()).map(BodyHandle::Drawn));
        handles
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.context.tick()
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.context.lives()
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.context.state()
    }

    /// True from the tick the player reaches the goal, including after the round ends
    #[inline]
    pub fn is_won(&self) -> bool {
        self.state().outcome() == Some(Outcome::Won)
    }

    /// True from the tick the last life is lost, including after the round ends
    #[inline]
    pub fn is_lost(&self) -> bool {
        self.state().outcome() == Some(Outcome::Lost)
    }

    /// True once the end-of-round countdown has expired
    #[inline]
    pub fn is_game_end(&self) -> bool {
        matches!(self.state(), GameState::Ended(_))
    }

    #[inline]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    #[inline]
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Moves the player left by the configured step
    pub fn move_player_left(&mut self) {
        if !self.is_game_end() {
            let step = self.config.move_step;
            self.player.move_left(step);
        }
    }

    /// Moves the player right by the configured step
    pub fn move_player_right(&mut self) {
        if !self.is_game_end() {
            let step = self.config.move_step;
            self.player.move_right(step);
        }
    }

    /// Makes the player jump if it is standing on something
    pub fn player_jump(&mut self) -> bool {
        !self.is_game_end() && self.player.jump(self.config.jump_impulse)
    }

    /// Adds a point to the pencil stroke using the configured particle mass
    pub fn add_pencil_particle(&mut self, x: f32, y: f32) -> bool {
        self.pencil.add_particle(x, y, self.config.particle_mass)
    }

    /// Commits the current pencil stroke
    pub fn commit_pencil_polygon(&mut self) -> bool {
        let committed = self.pencil.add_polygon();
        if committed {
            let index = self.pencil.polygons().len() - 1;
            self.events.push(WorldEvent::PolygonCommitted { index });
        }
        committed
    }

    /// Removes the most recently drawn polygon
    pub fn remove_pencil_polygon(&mut self) -> bool {
        let removed = self.pencil.remove_polygon().is_some();
        if removed {
            self.events.push(WorldEvent::PolygonRemoved);
        }
        removed
    }

    /// Advances the simulation by one tick. Does nothing once the round has ended.
    pub fn update(&mut self) {
        if self.is_game_end() {
            return;
        }

        let tick = self.context.next_tick();
        let params = self.config.integration();
        let canvas = self.config.canvas();

        // 1. dinosaurs
        let decide = tick % self.config.dino_decision_interval == 0;
        let player_center = self.player.center();
        for (index, dino) in self.dinosaurs.iter_mut().enumerate() {
            if decide && dino.decide(player_center, &self.config) {
                self.events.push(WorldEvent::DinosaurJumped { index });
            }
            dino.body_mut().update(&params, &canvas);
        }

        // 2. player and drawn polygons
        self.player.update(&params, &canvas);
        self.pencil.update(&params, &canvas);

        // 3. world collisions
        if self.collide_world() {
            if let Some(remaining) = self.context.register_hit(self.config.hit_cooldown_ticks) {
                tracing::debug!(remaining, tick, "dinosaur reached the goal");
                self.events.push(WorldEvent::LifeLost { remaining });
                if self.context.state() == GameState::Lost {
                    tracing::debug!(tick, "round lost");
                    self.events.push(WorldEvent::Lost);
                }
            }
        }

        // 4. player against goal
        if self.collide_player_with_goal() && self.context.decide(Outcome::Won) {
            tracing::debug!(tick, "round won");
            self.events.push(WorldEvent::Won);
        }

        // 5. platforms
        self.collide_platforms();

        // 6. end-of-round countdown
        if let Some(outcome) = self.context.advance_countdown(self.config.end_countdown_ticks) {
            tracing::debug!(tick, ?outcome, "round ended");
            self.events.push(WorldEvent::GameEnded(outcome));
        }
    }

    /// Collides every ordered pair of bodies except player/goal.
    /// Returns whether a goal and a dinosaur touched.
    fn collide_world(&mut self) -> bool {
        let push = self.config.collision_push;
        let ray_limit = self.config.ray_limit;

        let mut bodies: Vec<&mut SoftBody> = std::iter::once(&mut self.player)
            .chain(self.dinosaurs.iter_mut().map(Dinosaur::body_mut))
            .chain(std::iter::once(&mut self.goal))
            .chain(self.pencil.polygons_mut().iter_mut())
            .collect();

        let mut goal_hit = false;
        for i in 0..bodies.len() {
            for j in 0..bodies.len() {
                if i == j {
                    continue;
                }
                let (body, other) = pair_mut(&mut bodies, i, j);
                let (owner, other_owner) = (body.owner(), other.owner());
                if owner.is_player_goal_pair(other_owner) {
                    continue;
                }

                let contacts = collide_polygons(body.polygon_mut(), other.polygon_mut(), push, ray_limit);
                if !contacts.is_empty() && owner.is_goal_dinosaur_pair(other_owner) {
                    goal_hit = true;
                }
            }
        }
        goal_hit
    }

    /// Collides the player and the goal in both directions. Returns whether they touched.
    fn collide_player_with_goal(&mut self) -> bool {
        let push = self.config.collision_push;
        let ray_limit = self.config.ray_limit;

        let player_in_goal = collide_polygons(self.player.polygon_mut(), self.goal.polygon_mut(), push, ray_limit);
        let goal_in_player = collide_polygons(self.goal.polygon_mut(), self.player.polygon_mut(), push, ray_limit);
        !player_in_goal.is_empty() || !goal_in_player.is_empty()
    }

    fn collide_platforms(&mut self) {
        let hitbox = self.config.platform_hitbox;
        let bodies = std::iter::once(&mut self.player)
            .chain(self.dinosaurs.iter_mut().map(Dinosaur::body_mut))
            .chain(std::iter::once(&mut self.goal))
            .chain(self.pencil.polygons_mut().iter_mut());

        for body in bodies {
            for platform in &self.platforms {
                platform.handle_polygon_collision(body.polygon_mut(), hitbox);
            }
        }
    }
}
