//! Simulation lifecycle control.
//!
//! A [`Runner`] owns one world and an explicit run state. It never schedules
//! anything itself: an external cadence driver calls [`Runner::tick`] at
//! whatever rate it wants, and the runner advances its world only while
//! started.

use super::params::Params;
use super::world::World;

/// Lifecycle state of a [`Runner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Ticks are ignored.
    Stopped,
    /// Ticks advance the world.
    Running,
}

/// Owns a world and gates its advancement behind a state machine.
#[derive(Debug, Clone)]
pub struct Runner {
    world: World,
    state: RunState,
}

impl Runner {
    /// Creates a stopped runner around a freshly populated world.
    pub fn new(params: Params) -> Self {
        Self {
            world: World::new(params),
            state: RunState::Stopped,
        }
    }

    /// Makes future ticks advance the world.
    pub fn start(&mut self) {
        self.state = RunState::Running;
    }

    /// Makes future ticks no-ops; the world keeps its state.
    pub fn pause(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Stops the runner and re-randomizes the world. Generation counters
    /// survive, as [`World::reset`] preserves them.
    pub fn reset(&mut self) {
        self.state = RunState::Stopped;
        self.world.reset();
    }

    /// Advances the world by one tick while running. Returns whether the
    /// world advanced.
    pub fn tick(&mut self) -> bool {
        if self.state == RunState::Running {
            self.world.step();
            true
        } else {
            false
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether ticks currently advance the world.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Read access to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
