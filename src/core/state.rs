#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Outcome {
    Won,
    Lost,
}

/// Round state. Transitions only go forward: Playing -> Won | Lost -> Ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
    Ended(Outcome),
}

impl GameState {
    #[inline]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::Playing => None,
            GameState::Won => Some(Outcome::Won),
            GameState::Lost => Some(Outcome::Lost),
            GameState::Ended(outcome) => Some(outcome),
        }
    }
}

/// Mutable bookkeeping threaded through a tick: tick counter, lives and the end-of-round countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationContext {
    tick: u64,
    lives: u32,
    state: GameState,
    last_hit_tick: Option<u64>,
    decided_at_tick: Option<u64>,
}

impl SimulationContext {
    pub fn new(lives: u32) -> Self {
        Self {
            tick: 0,
            lives,
            state: GameState::Playing,
            last_hit_tick: None,
            decided_at_tick: None,
        }
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Advances the tick counter and returns the new tick
    pub(crate) fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Records a goal hit. Returns the remaining lives if a life was taken,
    /// or `None` if the hit fell inside the cooldown or the round is decided.
    pub(crate) fn register_hit(&mut self, cooldown: u32) -> Option<u32> {
        if self.state != GameState::Playing {
            return None;
        }
        if let Some(last) = self.last_hit_tick {
            if self.tick.saturating_sub(last) < u64::from(cooldown) {
                return None;
            }
        }

        self.last_hit_tick = Some(self.tick);
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.decide(Outcome::Lost);
        }
        Some(self.lives)
    }

    /// Moves from Playing to Won/Lost. Returns false if the round was already decided.
    pub(crate) fn decide(&mut self, outcome: Outcome) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = match outcome {
            Outcome::Won => GameState::Won,
            Outcome::Lost => GameState::Lost,
        };
        self.decided_at_tick = Some(self.tick);
        true
    }

    /// Ends the round once `countdown` ticks have passed since it was decided.
    /// Returns the outcome on the tick the round ends.
    pub(crate) fn advance_countdown(&mut self, countdown: u32) -> Option<Outcome> {
        let decided_at = self.decided_at_tick?;
        let outcome = match self.state {
            GameState::Won => Outcome::Won,
            GameState::Lost => Outcome::Lost,
            _ => return None,
        };
        if self.tick - decided_at >= u64::from(countdown) {
            self.state = GameState::Ended(outcome);
            Some(outcome)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_respect_cooldown() {
        let mut ctx = SimulationContext::new(3);
        ctx.next_tick();
        assert_eq!(ctx.register_hit(10), Some(2));
        ctx.next_tick();
        assert_eq!(ctx.register_hit(10), None);
        for _ in 0..10 {
            ctx.next_tick();
        }
        assert_eq!(ctx.register_hit(10), Some(1));
    }

    #[test]
    fn last_life_loses_the_round() {
        let mut ctx = SimulationContext::new(1);
        ctx.next_tick();
        assert_eq!(ctx.register_hit(0), Some(0));
        assert_eq!(ctx.state(), GameState::Lost);
        assert!(!ctx.decide(Outcome::Won));
        assert_eq!(ctx.register_hit(0), None);
    }

    #[test]
    fn countdown_ends_the_round() {
        let mut ctx = SimulationContext::new(3);
        ctx.next_tick();
        assert!(ctx.decide(Outcome::Won));
        assert_eq!(ctx.advance_countdown(3), None);
        ctx.next_tick();
        ctx.next_tick();
        assert_eq!(ctx.advance_countdown(3), None);
        ctx.next_tick();
        assert_eq!(ctx.advance_countdown(3), Some(Outcome::Won));
        assert_eq!(ctx.state(), GameState::Ended(Outcome::Won));
        assert_eq!(ctx.state().outcome(), Some(Outcome::Won));
    }
}
