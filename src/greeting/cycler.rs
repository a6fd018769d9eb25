//! Timed multilingual greeting sequence.
//!
//! A small cooperative state machine: each greeting is shown for a display
//! window, fades out, then the next one appears; once the list is exhausted
//! the whole overlay fades and the cycle reports completion exactly once.
//! All pending timing state lives in this value, so dropping it mid-cycle
//! cancels everything.

use std::time::Duration;

/// Phase delays, in wall-clock terms of the driving timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTimings {
    /// Time a greeting stays fully visible.
    pub display: Duration,
    /// Duration of the fade-out before advancing.
    pub fade: Duration,
    /// Final overlay fade before completion is signalled.
    pub exit: Duration,
}

impl Default for CycleTimings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(500),
            fade: Duration::from_millis(300),
            exit: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Showing,
    Fading,
    Exiting,
    Done,
}

#[derive(Debug, Clone)]
pub struct GreetingCycler {
    greetings: Vec<String>,
    timings: CycleTimings,
    index: usize,
    phase: Phase,
    elapsed: Duration,
    signalled: bool,
}

impl GreetingCycler {
    /// An empty list goes straight to the exit phase: completion fires after
    /// the exit delay with no greeting ever shown.
    pub fn new(greetings: Vec<String>, timings: CycleTimings) -> Self {
        let phase = if greetings.is_empty() {
            Phase::Exiting
        } else {
            Phase::Showing
        };
        Self {
            greetings,
            timings,
            index: 0,
            phase,
            elapsed: Duration::ZERO,
            signalled: false,
        }
    }

    /// Advance the cycle by `dt`. Returns `true` exactly once, on the tick
    /// that completes the sequence; every later call returns `false`.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.phase == Phase::Done {
            return false;
        }
        self.elapsed += dt;
        let mut finished = false;
        loop {
            let limit = match self.phase {
                Phase::Showing => self.timings.display,
                Phase::Fading => self.timings.fade,
                Phase::Exiting => self.timings.exit,
                Phase::Done => break,
            };
            if self.elapsed < limit {
                break;
            }
            self.elapsed -= limit;
            match self.phase {
                Phase::Showing => self.phase = Phase::Fading,
                Phase::Fading => {
                    self.index += 1;
                    self.phase = if self.index >= self.greetings.len() {
                        Phase::Exiting
                    } else {
                        Phase::Showing
                    };
                }
                Phase::Exiting => {
                    self.phase = Phase::Done;
                    if !self.signalled {
                        self.signalled = true;
                        finished = true;
                    }
                }
                Phase::Done => break,
            }
        }
        finished
    }

    /// The greeting currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        match self.phase {
            Phase::Showing | Phase::Fading => self.greetings.get(self.index).map(String::as_str),
            Phase::Exiting | Phase::Done => None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_fading(&self) -> bool {
        self.phase == Phase::Fading
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Progress through the current phase in [0, 1]; drives fade alpha.
    pub fn phase_progress(&self) -> f32 {
        let limit = match self.phase {
            Phase::Showing => self.timings.display,
            Phase::Fading => self.timings.fade,
            Phase::Exiting => self.timings.exit,
            Phase::Done => return 1.0,
        };
        if limit.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / limit.as_secs_f32()).clamp(0.0, 1.0)
    }
}
