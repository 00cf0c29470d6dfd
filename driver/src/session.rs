use std::time::{Duration, Instant};

use anyhow::Context;
use life_engine::Grid;

use crate::config::{clamp_interval, Config};

const FPS_LOG_PERIOD: Duration = Duration::from_secs(1);

/// Drives a grid the way an interactive front end would: generate, start,
/// stop, single steps, toggles and interval-paced ticks.
pub struct Session {
    grid: Grid,
    width: usize,
    height: usize,
    seed: Option<u64>,
    generated: u64,
    interval: Duration,
    running: bool,
    last_step: Instant,
    frame_count: u32,
    last_fps_log: Instant,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let now = Instant::now();
        Self {
            grid: Grid::new(),
            width: config.width,
            height: config.height,
            seed: config.seed,
            generated: 0,
            interval: clamp_interval(config.interval),
            running: false,
            last_step: now,
            frame_count: 0,
            last_fps_log: now,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rebuilds the grid with fresh random cells. With a fixed seed the
    /// sequence of boards across calls is reproducible.
    pub fn generate(&mut self) -> anyhow::Result<()> {
        let seed = self.seed.map(|seed| seed.wrapping_add(self.generated));
        self.grid
            .populate_seeded(self.width, self.height, seed)
            .context("generate cells")?;
        self.generated += 1;
        log::info!(
            "Generated {}x{} ({} alive)",
            self.width,
            self.height,
            self.grid.population()
        );
        Ok(())
    }

    pub fn start(&mut self, now: Instant) {
        log::info!("Start");
        self.running = true;
        self.last_step = now;
        self.last_fps_log = now;
        self.frame_count = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        log::info!("Stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = clamp_interval(interval);
    }

    /// Advances once regardless of whether the session is running.
    pub fn single_iteration(&mut self) -> anyhow::Result<bool> {
        self.grid.advance().context("single iteration")
    }

    /// Forwards a user toggle at grid coordinates.
    pub fn toggle(&mut self, row: usize, col: usize) -> anyhow::Result<()> {
        let index = self.grid.index_of(row, col).context("toggle cell")?;
        self.grid.toggle_cell(index).context("toggle cell")?;
        Ok(())
    }

    /// Steps the grid if running and an interval has passed since the last
    /// step. Returns `true` when a generation was advanced.
    pub fn tick(&mut self, now: Instant) -> anyhow::Result<bool> {
        if !self.running || now.saturating_duration_since(self.last_step) < self.interval {
            return Ok(false);
        }

        self.grid.advance().context("advance on tick")?;
        self.last_step = now;

        self.frame_count += 1;
        let elapsed = now.saturating_duration_since(self.last_fps_log);
        if elapsed >= FPS_LOG_PERIOD {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            log::info!("Current FPS: {:.2}", fps);
            self.frame_count = 0;
            self.last_fps_log = now;
        }
        Ok(true)
    }

    /// Time left before the next tick would step.
    pub fn until_next_step(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_INTERVAL, MIN_INTERVAL};

    fn session(seed: u64) -> Session {
        let config = Config {
            width: 10,
            height: 8,
            seed: Some(seed),
            ..Config::default()
        };
        let mut session = Session::new(&config);
        session.generate().unwrap();
        session
    }

    #[test]
    fn ticks_only_while_running_and_after_interval() {
        let mut session = session(1);
        let t0 = Instant::now();
        let interval = session.interval();

        assert!(!session.tick(t0 + interval).unwrap());

        session.start(t0);
        assert!(!session.tick(t0).unwrap());
        assert!(session.tick(t0 + interval).unwrap());
        assert!(!session.tick(t0 + interval).unwrap());
        assert!(session.tick(t0 + interval * 2).unwrap());
        assert_eq!(session.grid().generation(), 2);

        session.stop();
        assert!(!session.tick(t0 + interval * 10).unwrap());
        assert_eq!(session.grid().generation(), 2);
    }

    #[test]
    fn single_iteration_ignores_running_state() {
        let mut session = session(2);
        assert!(!session.is_running());
        session.single_iteration().unwrap();
        assert_eq!(session.grid().generation(), 1);
    }

    #[test]
    fn generate_is_reproducible_per_seed_and_varies_per_call() {
        let mut a = session(3);
        let b = session(3);
        assert_eq!(a.grid(), b.grid());

        a.generate().unwrap();
        assert_ne!(a.grid(), b.grid());
    }

    #[test]
    fn toggle_forwards_to_grid() {
        let mut session = session(4);
        let before = session.grid().cell_at(2, 3).unwrap();
        session.toggle(2, 3).unwrap();
        assert_eq!(session.grid().cell_at(2, 3).unwrap(), !before);
        assert!(session.toggle(8, 0).is_err());
    }

    #[test]
    fn interval_is_clamped() {
        let mut session = session(5);
        session.set_interval(Duration::ZERO);
        assert_eq!(session.interval(), MIN_INTERVAL);
        session.set_interval(Duration::from_secs(60));
        assert_eq!(session.interval(), MAX_INTERVAL);
    }

    #[test]
    fn until_next_step_counts_down() {
        let mut session = session(6);
        let t0 = Instant::now();
        session.set_interval(Duration::from_millis(100));
        session.start(t0);
        assert_eq!(
            session.until_next_step(t0 + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert_eq!(
            session.until_next_step(t0 + Duration::from_millis(400)),
            Duration::ZERO
        );
    }
}
