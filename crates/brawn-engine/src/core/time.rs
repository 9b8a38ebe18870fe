/// Fixed timestep accumulator.
/// Runs game logic at a constant tick rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick, in seconds.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Most ticks a single `accumulate` call will ask for.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Timestep from a tick delay in milliseconds (e.g. 40 ms = 25 ticks/s).
    pub fn from_millis(ms: u32) -> Self {
        Self::new(ms as f32 / 1000.0)
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        // Small epsilon so an exact multiple of dt is not lost to rounding
        let steps = ((self.accumulator + self.dt * 1e-4) / self.dt) as u32;
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Tick delay as a `Duration`, for loops that pace themselves by sleeping.
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros((self.dt * 1_000_000.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::from_millis(40);
        assert_eq!(ts.accumulate(0.040), 1);
        assert_eq!(ts.accumulate(0.040), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::from_millis(40);
        assert_eq!(ts.accumulate(0.025), 0);
        assert_eq!(ts.accumulate(0.025), 1);
    }

    #[test]
    fn caps_steps() {
        let mut ts = FixedTimestep::from_millis(40);
        assert_eq!(ts.accumulate(5.0), FixedTimestep::MAX_STEPS);
    }

    #[test]
    fn tick_duration_matches_dt() {
        let ts = FixedTimestep::from_millis(40);
        assert_eq!(ts.tick_duration().as_millis(), 40);
    }
}
