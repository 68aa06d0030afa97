//! Frame-independent timing for the viewer.
//!
//! The simulation ticks on a fixed cadence no matter how fast frames are
//! drawn: [`FixedStep`] turns elapsed wall time into a number of ticks, and
//! [`FpsMeter`] reports how many frames actually get drawn.

/// Converts elapsed time into whole simulation ticks.
#[derive(Debug)]
pub struct FixedStep {
    /// Seconds per tick.
    pub interval: f64,
    /// Most ticks a single frame may run, so a stall does not snowball.
    pub max_catch_up: u32,
    last_time: Option<f64>,
    pending: f64,
}

impl FixedStep {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            max_catch_up: 10,
            last_time: None,
            pending: 0.0,
        }
    }

    /// Number of ticks to run now, given the current time in seconds.
    ///
    /// The first call only records the time. Leftover time shorter than a
    /// tick carries over to the next call; time beyond `max_catch_up` ticks
    /// is dropped.
    pub fn ticks_due(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_time.replace(now) else {
            return 0;
        };
        if self.interval <= 0.0 {
            return 0;
        }

        self.pending += (now - last).max(0.0);
        let due = (self.pending / self.interval).floor();
        if due >= f64::from(self.max_catch_up) {
            self.pending = 0.0;
            return self.max_catch_up;
        }

        self.pending -= due * self.interval;
        due as u32
    }

    /// Forgets accumulated time, e.g. after the simulation was paused.
    pub fn reset(&mut self) {
        self.last_time = None;
        self.pending = 0.0;
    }
}

/// Rolling average of the drawn frame rate.
///
/// Instantaneous rates are summed and published as an average once more
/// than [`FpsMeter::SAMPLES`] have been collected, then the sum restarts.
#[derive(Debug, Default)]
pub struct FpsMeter {
    rolling_sum: f64,
    samples: u32,
    last_frame: Option<f64>,
    average: Option<f64>,
}

impl FpsMeter {
    pub const SAMPLES: u32 = 50;

    /// Records a frame drawn at `now` (seconds). Returns the new average
    /// when one is published.
    pub fn record_frame(&mut self, now: f64) -> Option<f64> {
        if let Some(last) = self.last_frame {
            let elapsed = now - last;
            if elapsed > 0.0 {
                self.rolling_sum += 1.0 / elapsed;
                self.samples += 1;
            }
        }
        self.last_frame = Some(now);

        if self.samples > Self::SAMPLES {
            let avg = self.rolling_sum / f64::from(self.samples);
            self.rolling_sum = 0.0;
            self.samples = 0;
            self.average = Some(avg);
            return Some(avg);
        }
        None
    }

    /// Last published average, if any.
    pub fn average(&self) -> Option<f64> {
        self.average
    }
}
