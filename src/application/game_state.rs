use crate::domain::{self, Grid};

/// Lifecycle phase of the simulation.
/// `Preview` shows the dimmed generation-0 board while parameters can still
/// change; `Running` advances on a timer; `Paused` holds the current board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Preview,
    Running,
    Paused,
}

/// GameState orchestrates the simulation.
/// It owns the board, the seeding parameters, the generation counter, and
/// the update timer - there is no ambient state outside this struct. The
/// core stays pure: every transition goes through `domain::initialize` or
/// `Grid::evolve` and replaces the board wholesale.
pub struct GameState {
    pub grid: Grid,
    pub width: usize,
    pub height: usize,
    pub seed: String,
    pub phase: Phase,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl GameState {
    /// Create new game state showing the generation-0 preview for the
    /// given parameters. Dimensions must already be validated.
    pub fn new(width: usize, height: usize, seed: impl Into<String>) -> Self {
        let seed = seed.into();
        Self {
            grid: domain::initialize(width, height, &seed),
            width,
            height,
            seed,
            phase: Phase::Preview,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
        }
    }

    /// Whether the board is advancing on the timer
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Change board dimensions; drops back to a fresh preview
    pub fn resize(self, width: usize, height: usize) -> Self {
        Self {
            updates_per_second: self.updates_per_second,
            ..Self::new(width, height, self.seed)
        }
    }

    /// Change the seed; drops back to a fresh preview
    pub fn reseed(self, seed: impl Into<String>) -> Self {
        Self {
            updates_per_second: self.updates_per_second,
            ..Self::new(self.width, self.height, seed)
        }
    }

    /// Start the simulation from generation 0 of the current parameters
    pub fn start(mut self) -> Self {
        self.grid = domain::initialize(self.width, self.height, &self.seed);
        self.generation = 0;
        self.update_timer = 0.0;
        self.phase = Phase::Running;
        self
    }

    /// Toggle between running and paused; a preview stays a preview
    pub fn toggle_running(mut self) -> Self {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Preview => Phase::Preview,
        };
        self
    }

    /// Abandon the run and return to the parameter preview
    pub fn reset(self) -> Self {
        Self {
            updates_per_second: self.updates_per_second,
            ..Self::new(self.width, self.height, self.seed)
        }
    }

    /// Adjust simulation speed in generations per second
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame.
    /// Accumulates frame time and advances one generation per elapsed
    /// update interval while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid = self.grid.evolve();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}
