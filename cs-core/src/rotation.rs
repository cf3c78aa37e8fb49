//! Live weather image rotation.
//!
//! Two states: `Static` (counter pinned at 0) and `Rotating` (counter
//! advanced by one on each scheduled tick). The counter itself never wraps;
//! the displayed image is `counter mod N`.

use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of rotation images.
pub const IMAGE_COUNT: usize = 4;

pub const DEFAULT_IMAGES: [&str; IMAGE_COUNT] = [
    "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b",
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee",
    "https://images.unsplash.com/photo-1501630834273-4b5604d2ee31",
    "https://images.unsplash.com/photo-1500674425229-f692875b0ab7",
];

/// Tick period choices offered to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationInterval {
    #[default]
    Seconds15,
    Seconds30,
    Minute1,
}

impl RotationInterval {
    pub const ALL: [RotationInterval; 3] = [
        RotationInterval::Seconds15,
        RotationInterval::Seconds30,
        RotationInterval::Minute1,
    ];

    pub fn millis(self) -> u32 {
        match self {
            RotationInterval::Seconds15 => 15_000,
            RotationInterval::Seconds30 => 30_000,
            RotationInterval::Minute1 => 60_000,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(u64::from(self.millis()))
    }

    pub fn label(self) -> &'static str {
        match self {
            RotationInterval::Seconds15 => "00:15 (15 seconds)",
            RotationInterval::Seconds30 => "00:30 (30 seconds)",
            RotationInterval::Minute1 => "01:00 (1 minute)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }

    pub fn from_secs(secs: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|i| u64::from(i.millis()) == secs * 1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RotationMode {
    Static,
    Rotating(RotationInterval),
}

/// Rotation state machine. The counter lives in the [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rotation {
    enabled: bool,
    interval: RotationInterval,
    /// Bumped on every schedule change so stale timers can be discarded.
    generation: u64,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RotationMode {
        if self.enabled {
            RotationMode::Rotating(self.interval)
        } else {
            RotationMode::Static
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.enabled
    }

    /// Interval shown in the selector, even while static.
    pub fn selected_interval(&self) -> RotationInterval {
        self.interval
    }

    /// Tick period when rotating.
    pub fn active_interval(&self) -> Option<RotationInterval> {
        self.enabled.then_some(self.interval)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle the "enable rotation" toggle.
    ///
    /// Turning rotation off always resets the counter to 0; turning it on
    /// when already rotating changes nothing.
    pub fn set_enabled(&mut self, enabled: bool, session: &mut Session) -> RotationMode {
        match (self.enabled, enabled) {
            (false, true) => {
                self.enabled = true;
                self.generation += 1;
                log::info!("[ClimateScope] rotation: Rotating every {}", self.interval.label());
            }
            (true, false) => {
                self.enabled = false;
                self.generation += 1;
                session.reset_rotation();
                log::info!("[ClimateScope] rotation: Static");
            }
            (false, false) => session.reset_rotation(),
            (true, true) => {}
        }
        self.mode()
    }

    /// Pick a new tick period. While rotating, the counter is kept and the
    /// next tick is rescheduled.
    pub fn select_interval(&mut self, interval: RotationInterval) {
        if self.interval != interval {
            self.interval = interval;
            if self.enabled {
                self.generation += 1;
            }
        }
    }

    /// Apply one scheduled tick. Returns the new counter, or `None` when static.
    pub fn tick(&self, session: &mut Session) -> Option<u64> {
        if self.enabled {
            Some(session.increment_rotation())
        } else {
            None
        }
    }

    /// Back to the initial static state.
    pub fn reset(&mut self, session: &mut Session) {
        self.set_enabled(false, session);
        self.interval = RotationInterval::default();
    }
}

/// Index into the image list for a counter value.
pub fn image_index(counter: u64, image_count: usize) -> usize {
    if image_count == 0 {
        return 0;
    }
    (counter % image_count as u64) as usize
}

/// Countdown a host timer keeps between ticks.
///
/// The host wakes every few hundred milliseconds and calls [`advance`]
/// with the time slept. A change of rotation generation (toggle or new
/// interval) restarts the countdown at the current interval, so a shorter
/// interval takes effect on the next wake-up rather than after the old
/// period runs out.
///
/// [`advance`]: TickSchedule::advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSchedule {
    generation: Option<u64>,
    remaining_ms: u32,
}

impl TickSchedule {
    /// Account for `elapsed_ms` of sleep. Returns true when a tick is due.
    pub fn advance(&mut self, rotation: &Rotation, elapsed_ms: u32) -> bool {
        let Some(interval) = rotation.active_interval() else {
            self.generation = None;
            return false;
        };
        if self.generation != Some(rotation.generation()) {
            self.generation = Some(rotation.generation());
            self.remaining_ms = interval.millis();
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.remaining_ms = interval.millis();
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick, when armed.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.generation.map(|_| self.remaining_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_ignores_ticks() {
        let mut session = Session::new();
        let rotation = Rotation::new();
        assert_eq!(rotation.mode(), RotationMode::Static);
        assert_eq!(rotation.tick(&mut session), None);
        assert_eq!(session.rotation_counter(), 0);
    }

    #[test]
    fn rotating_counts_ticks_without_wrapping() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.select_interval(RotationInterval::Seconds30);
        assert_eq!(
            rotation.set_enabled(true, &mut session),
            RotationMode::Rotating(RotationInterval::Seconds30)
        );
        for _ in 0..6 {
            rotation.tick(&mut session);
        }
        assert_eq!(session.rotation_counter(), 6);
        assert_eq!(image_index(session.rotation_counter(), IMAGE_COUNT), 2);
    }

    #[test]
    fn disabling_twice_keeps_counter_zero() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.set_enabled(true, &mut session);
        rotation.tick(&mut session);
        rotation.set_enabled(false, &mut session);
        assert_eq!(session.rotation_counter(), 0);
        rotation.set_enabled(false, &mut session);
        assert_eq!(session.rotation_counter(), 0);
    }

    #[test]
    fn enable_ticks_disable_reenable_starts_at_first_image() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.set_enabled(true, &mut session);
        for _ in 0..7 {
            rotation.tick(&mut session);
        }
        rotation.set_enabled(false, &mut session);
        assert_eq!(session.rotation_counter(), 0);
        rotation.set_enabled(true, &mut session);
        assert_eq!(image_index(session.rotation_counter(), IMAGE_COUNT), 0);
    }

    #[test]
    fn interval_change_keeps_counter_and_reschedules() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.set_enabled(true, &mut session);
        rotation.tick(&mut session);
        let before = rotation.generation();
        rotation.select_interval(RotationInterval::Minute1);
        assert!(rotation.generation() > before);
        assert_eq!(session.rotation_counter(), 1);
        assert_eq!(rotation.active_interval(), Some(RotationInterval::Minute1));
    }

    #[test]
    fn interval_lookup() {
        assert_eq!(RotationInterval::from_secs(30), Some(RotationInterval::Seconds30));
        assert_eq!(RotationInterval::from_secs(45), None);
        assert_eq!(
            RotationInterval::from_label("01:00 (1 minute)"),
            Some(RotationInterval::Minute1)
        );
        assert_eq!(RotationInterval::Minute1.duration(), Duration::from_secs(60));
    }

    #[test]
    fn image_index_wraps() {
        assert_eq!(image_index(0, 4), 0);
        assert_eq!(image_index(5, 4), 1);
        assert_eq!(image_index(u64::MAX, 4), 3);
    }

    /// Wake-ups (of `slice_ms` each) until the schedule reports a tick.
    fn wakeups_until_tick(schedule: &mut TickSchedule, rotation: &Rotation, slice_ms: u32) -> u32 {
        (1..=10_000)
            .find(|_| schedule.advance(rotation, slice_ms))
            .expect("tick within bound")
    }

    #[test]
    fn schedule_ticks_once_per_interval() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.set_enabled(true, &mut session);
        let mut schedule = TickSchedule::default();

        // first wake-up arms the countdown, then 15s worth of 250ms slices
        assert_eq!(wakeups_until_tick(&mut schedule, &rotation, 250), 1 + 60);
        assert_eq!(wakeups_until_tick(&mut schedule, &rotation, 250), 60);
    }

    #[test]
    fn shorter_interval_takes_effect_without_waiting_out_old_one() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        rotation.select_interval(RotationInterval::Minute1);
        rotation.set_enabled(true, &mut session);
        let mut schedule = TickSchedule::default();

        assert!(!schedule.advance(&rotation, 250));
        for _ in 0..4 {
            assert!(!schedule.advance(&rotation, 250));
        }
        assert_eq!(schedule.remaining_ms(), Some(59_000));

        rotation.select_interval(RotationInterval::Seconds15);
        assert!(!schedule.advance(&rotation, 250));
        assert_eq!(schedule.remaining_ms(), Some(15_000));
        assert_eq!(wakeups_until_tick(&mut schedule, &rotation, 250), 60);
    }

    #[test]
    fn schedule_disarms_while_static_and_rearms_on_enable() {
        let mut session = Session::new();
        let mut rotation = Rotation::new();
        let mut schedule = TickSchedule::default();

        assert!(!schedule.advance(&rotation, 250));
        assert_eq!(schedule.remaining_ms(), None);

        rotation.set_enabled(true, &mut session);
        assert!(!schedule.advance(&rotation, 250));
        assert_eq!(schedule.remaining_ms(), Some(15_000));
        for _ in 0..10 {
            schedule.advance(&rotation, 250);
        }

        rotation.set_enabled(false, &mut session);
        assert!(!schedule.advance(&rotation, 250));
        assert_eq!(schedule.remaining_ms(), None);

        rotation.set_enabled(true, &mut session);
        assert!(!schedule.advance(&rotation, 250));
        assert_eq!(schedule.remaining_ms(), Some(15_000));
    }
}
