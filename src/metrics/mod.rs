//! Startup and frame timing.
//!
//! [`PerformanceMonitor`] is owned by the application and has an explicit
//! `activate()` / `deactivate()` lifecycle. Nothing is recorded outside that
//! window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Delay between the first frame and the one-off snapshot log.
pub const REPORT_DELAY: Duration = Duration::from_secs(2);

/// Named startup milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    ConfigLoaded,
    ContentLoaded,
    FirstFrame,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSnapshot {
    pub config_loaded: Option<Duration>,
    pub content_loaded: Option<Duration>,
    pub first_frame: Option<Duration>,
    pub frames: u64,
    pub avg_draw: Option<Duration>,
    pub max_draw: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    activated_at: Option<Instant>,
    marks: HashMap<Mark, Duration>,
    frames: u64,
    total_draw: Duration,
    max_draw: Duration,
    reported: bool,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording. A second call keeps the original start time.
    pub fn activate(&mut self) {
        self.activate_at(Instant::now());
    }

    pub fn activate_at(&mut self, now: Instant) {
        if self.activated_at.is_none() {
            self.activated_at = Some(now);
            tracing::debug!("Performance monitor activated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// Record a milestone. The first record of each mark wins.
    pub fn mark(&mut self, mark: Mark) {
        self.mark_at(mark, Instant::now());
    }

    pub fn mark_at(&mut self, mark: Mark, now: Instant) {
        if let Some(start) = self.activated_at {
            self.marks
                .entry(mark)
                .or_insert_with(|| now.saturating_duration_since(start));
        }
    }

    /// Record one drawn frame.
    pub fn record_frame(&mut self, draw: Duration) {
        self.record_frame_at(draw, Instant::now());
    }

    pub fn record_frame_at(&mut self, draw: Duration, now: Instant) {
        if !self.is_active() {
            return;
        }
        self.mark_at(Mark::FirstFrame, now);
        self.frames += 1;
        self.total_draw += draw;
        self.max_draw = self.max_draw.max(draw);
    }

    pub fn snapshot(&self) -> PerformanceSnapshot {
        let avg_draw = u32::try_from(self.frames)
            .ok()
            .filter(|frames| *frames > 0)
            .map(|frames| self.total_draw / frames);

        PerformanceSnapshot {
            config_loaded: self.marks.get(&Mark::ConfigLoaded).copied(),
            content_loaded: self.marks.get(&Mark::ContentLoaded).copied(),
            first_frame: self.marks.get(&Mark::FirstFrame).copied(),
            frames: self.frames,
            avg_draw,
            max_draw: (self.frames > 0).then_some(self.max_draw),
        }
    }

    /// True once [`REPORT_DELAY`] has passed since the first frame and the
    /// snapshot has not been logged yet.
    pub fn report_due(&self, now: Instant) -> bool {
        match (self.activated_at, self.marks.get(&Mark::FirstFrame)) {
            (Some(start), Some(first_frame)) if !self.reported => {
                now >= start + *first_frame + REPORT_DELAY
            }
            _ => false,
        }
    }

    /// Log the snapshot once.
    pub fn report(&mut self) {
        if self.reported || !self.is_active() {
            return;
        }
        self.reported = true;
        log_snapshot("Startup metrics", &self.snapshot());
    }

    /// Stop recording. Returns the final snapshot if the monitor was active.
    pub fn deactivate(&mut self) -> Option<PerformanceSnapshot> {
        self.activated_at.take()?;
        let snapshot = self.snapshot();
        log_snapshot("Final metrics", &snapshot);
        self.marks.clear();
        self.frames = 0;
        self.total_draw = Duration::ZERO;
        self.max_draw = Duration::ZERO;
        self.reported = false;
        Some(snapshot)
    }
}

fn log_snapshot(label: &str, snapshot: &PerformanceSnapshot) {
    tracing::debug!(
        config_loaded = ?snapshot.config_loaded,
        content_loaded = ?snapshot.content_loaded,
        first_frame = ?snapshot.first_frame,
        frames = snapshot.frames,
        avg_draw = ?snapshot.avg_draw,
        max_draw = ?snapshot.max_draw,
        "{}",
        label
    );
}
