//! Animation phase with anti-rollback
//!
//! The phase of a time-driven mode is a pure function of uptime and speed:
//! `speed * millis * 360 / 1000`. Frames arrive at irregular intervals and the
//! speed channel may jitter, which can make a freshly computed phase land
//! slightly behind the last one shown. Such samples are rejected and the
//! previous phase is reused, so motion may freeze for a frame but never runs
//! backwards.

use embassy_time::Instant;
use heapless::Vec;

use crate::angle::{wrap180, wrap360_f64};

/// Upper bound of independently animated segments.
///
/// A 512-channel universe holds at most 73 blink blocks of 7 RGB channels.
pub const MAX_SEGMENTS: usize = 73;

/// How segmented modes anchor the anti-rollback check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhaseAnchoring {
    /// One anchor per renderer.
    ///
    /// The check only runs when a single segment is animated; with several
    /// segments the anchor just follows the last one.
    #[default]
    Shared,
    /// One anchor per segment, each one checked.
    PerSegment,
}

/// Last accepted phase of a render target
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseState {
    previous: f32,
}

impl PhaseState {
    pub const fn new() -> Self {
        Self { previous: 0.0 }
    }

    /// Last accepted phase in degrees
    pub const fn previous(&self) -> f32 {
        self.previous
    }

    /// Accept `raw` unless it lies behind the previous phase.
    ///
    /// Returns the phase to render.
    pub fn advance(&mut self, raw: f32) -> f32 {
        if wrap180(raw - self.previous) < 0.0 {
            self.previous
        } else {
            self.previous = raw;
            raw
        }
    }

    /// Store `raw` without checking it
    pub fn follow(&mut self, raw: f32) -> f32 {
        self.previous = raw;
        raw
    }
}

/// Phase in degrees, reduced to `[0, 360)`, after `elapsed_ms` at `speed`
/// turns per second.
///
/// A non-finite speed yields 0 so an anchor never stores NaN.
#[allow(clippy::cast_possible_truncation)]
pub fn raw_phase(speed: f32, elapsed_ms: u64) -> f32 {
    // f64 keeps sub-degree precision after days of uptime
    let degrees = f64::from(speed) * elapsed_ms as f64 * 360.0 / 1000.0;
    let wrapped = wrap360_f64(degrees) as f32;
    if wrapped.is_finite() && wrapped < 360.0 {
        wrapped
    } else {
        0.0
    }
}

/// Owns every phase anchor of one renderer
#[derive(Debug, Clone, Default)]
pub struct PhaseEngine {
    shared: PhaseState,
    segments: Vec<PhaseState, MAX_SEGMENTS>,
}

impl PhaseEngine {
    pub const fn new() -> Self {
        Self {
            shared: PhaseState::new(),
            segments: Vec::new(),
        }
    }

    /// Anchor used by single-target modes
    pub const fn shared(&self) -> &PhaseState {
        &self.shared
    }

    /// Anchor of a segment, if per-segment anchoring has touched it
    pub fn segment(&self, index: usize) -> Option<&PhaseState> {
        self.segments.get(index)
    }

    /// Phase of a single-target mode at `now`
    pub fn advance(&mut self, speed: f32, now: Instant) -> f32 {
        self.shared.advance(raw_phase(speed, now.as_millis()))
    }

    /// Phase of segment `index` out of `segment_count` at `now`
    pub fn advance_segment(
        &mut self,
        anchoring: PhaseAnchoring,
        index: usize,
        segment_count: usize,
        speed: f32,
        now: Instant,
    ) -> f32 {
        let raw = raw_phase(speed, now.as_millis());
        match anchoring {
            PhaseAnchoring::Shared if segment_count == 1 => self.shared.advance(raw),
            PhaseAnchoring::Shared => self.shared.follow(raw),
            PhaseAnchoring::PerSegment => match self.segment_anchor(index) {
                Some(anchor) => anchor.advance(raw),
                None => raw,
            },
        }
    }

    fn segment_anchor(&mut self, index: usize) -> Option<&mut PhaseState> {
        while self.segments.len() <= index {
            self.segments.push(PhaseState::new()).ok()?;
        }
        self.segments.get_mut(index)
    }
}
