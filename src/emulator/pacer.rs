// Frame pacing - Fixed-timestep accumulator
//
// Ticks arrive at whatever interval the presentation layer manages. The pacer
// accumulates the elapsed wall-clock time and runs the core in whole frames of
// 70224 cycles, so emulated time keeps up with real time regardless of jitter.
// When one tick covers several frames, all of them are run but only the last
// one is converted and emitted.

use crate::core::{CoreBindings, CoreHandle, FRAME_DURATION_SECS};
use crate::display::{map_frame, FrameBuffer, RgbFrame};

/// Something that can be advanced one frame at a time and read back
pub trait FrameSource {
    /// Run exactly one video frame
    fn step_frame(&mut self);

    /// Copy out the current video output
    fn read_framebuffer(&mut self) -> FrameBuffer;
}

impl<B: CoreBindings> FrameSource for CoreHandle<B> {
    fn step_frame(&mut self) {
        CoreHandle::step_frame(self);
    }

    fn read_framebuffer(&mut self) -> FrameBuffer {
        CoreHandle::read_framebuffer(self)
    }
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Frames run during this tick
    pub steps: u64,

    /// The last frame of the tick, if any frame was run
    pub frame: Option<RgbFrame>,
}

impl TickOutcome {
    /// Frames run and then discarded in favour of a later one
    pub fn discarded(&self) -> u64 {
        self.steps.saturating_sub(1)
    }
}

/// Fixed-timestep frame pacer
///
/// After every tick, `0 <= accumulated_time < fixed_step`.
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Timestamp of the previous tick, in seconds
    last_time: f64,

    /// Wall-clock time not yet converted into frames, in seconds
    accumulated_time: f64,

    /// Duration of one emulated frame, in seconds
    fixed_step: f64,

    /// Frames run since creation
    frames_stepped: u64,

    /// Frames run but never emitted since creation
    frames_discarded: u64,
}

impl FramePacer {
    /// Create a pacer whose clock starts at `now` (seconds)
    pub fn new(now: f64) -> Self {
        FramePacer {
            last_time: now,
            accumulated_time: 0.0,
            fixed_step: FRAME_DURATION_SECS,
            frames_stepped: 0,
            frames_discarded: 0,
        }
    }

    /// Process one tick at timestamp `now` (seconds)
    ///
    /// Runs as many whole frames on `source` as the accumulated time covers,
    /// with no upper bound. If at least one frame ran, the last one is mapped
    /// to RGB and returned.
    ///
    /// A timestamp earlier than the previous one counts as zero elapsed time.
    /// Non-finite timestamps are ignored.
    pub fn tick<S: FrameSource + ?Sized>(&mut self, now: f64, source: &mut S) -> TickOutcome {
        if !now.is_finite() {
            return TickOutcome::default();
        }

        let delta = (now - self.last_time).max(0.0);
        self.last_time = now;
        self.accumulated_time += delta;

        let mut steps = 0u64;
        let mut latest = None;

        while self.accumulated_time >= self.fixed_step {
            source.step_frame();
            latest = Some(source.read_framebuffer());
            self.accumulated_time -= self.fixed_step;
            steps += 1;
        }

        let outcome = TickOutcome {
            steps,
            frame: latest.as_ref().map(map_frame),
        };

        self.frames_stepped += steps;
        self.frames_discarded += outcome.discarded();

        outcome
    }

    /// Time carried over to the next tick, in seconds
    pub fn accumulated_time(&self) -> f64 {
        self.accumulated_time
    }

    /// Duration of one emulated frame, in seconds
    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Timestamp of the previous tick
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Frames run since creation
    pub fn frames_stepped(&self) -> u64 {
        self.frames_stepped
    }

    /// Frames run but not emitted since creation
    pub fn frames_discarded(&self) -> u64 {
        self.frames_discarded
    }
}
