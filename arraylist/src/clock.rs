use crate::color::wrap_phase;

/// Reference frame length the speed is expressed against.
pub const REFERENCE_FRAME_MS: f64 = 16.0;

/// Drives the rainbow phase from host timestamps.
///
/// The clock never reads time itself: the host passes `now_ms` to [`AnimationClock::tick`]. The
/// first tick after [`AnimationClock::start`] only records the timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    offset: f64,
    cycle: f64,
    last_ms: Option<u64>,
    running: bool,
}

impl AnimationClock {
    /// A stopped clock whose phase wraps at `cycle` (the palette length).
    pub fn new(cycle: usize) -> Self {
        Self {
            offset: 0.0,
            cycle: cycle as f64,
            last_ms: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            ldebug!("AnimationClock::start");
        }
        self.running = true;
        self.last_ms = None;
    }

    pub fn stop(&mut self) {
        if self.running {
            ldebug!(offset = self.offset, "AnimationClock::stop");
        }
        self.running = false;
        self.last_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advances the phase by `speed * dt / 16`, wrapping at the cycle length.
    ///
    /// Returns `true` when the phase advanced (running, a prior timestamp exists and `dt > 0`).
    pub fn tick(&mut self, now_ms: u64, speed: f64) -> bool {
        if !self.running {
            return false;
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return false;
        };
        let Some(dt) = now_ms.checked_sub(last).filter(|&dt| dt > 0) else {
            return false;
        };
        self.offset = wrap_phase(
            self.offset + speed * dt as f64 / REFERENCE_FRAME_MS,
            self.cycle,
        );
        true
    }
}
