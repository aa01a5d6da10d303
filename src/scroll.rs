use std::time::{Duration, Instant};

/// Host-side scrollable surface the picker reads and drives.
///
/// Implementations own the raw vertical offset. `animate_to` is
/// fire-and-forget: the picker updates its selection immediately and never
/// waits for the animation to finish.
pub trait ScrollView {
    /// Current raw vertical scroll offset.
    fn scroll_y(&self) -> i32;

    /// Jump to an offset without animation.
    fn scroll_to(&mut self, y: i32);

    /// Animate to an offset with linear interpolation over `duration`.
    fn animate_to(&mut self, y: i32, duration: Duration);

    /// Halt any in-flight momentum or animation at the current offset.
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct ActiveScroll {
    from: i32,
    to: i32,
    /// Set on the first tick after the animation was issued.
    start: Option<Instant>,
    duration: Duration,
}

/// Self-contained [`ScrollView`] with a bounded offset and linear animation,
/// advanced by explicit `tick` calls from the host loop.
#[derive(Debug, Default)]
pub struct LinearScroll {
    offset: i32,
    max_offset: i32,
    active: Option<ActiveScroll>,
}

impl LinearScroll {
    pub fn new(max_offset: i32) -> Self {
        Self {
            offset: 0,
            max_offset: max_offset.max(0),
            active: None,
        }
    }

    /// Update the largest reachable offset, clamping the current one.
    pub fn set_max_offset(&mut self, max_offset: i32) {
        self.max_offset = max_offset.max(0);
        self.offset = self.offset.clamp(0, self.max_offset);
    }

    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the active animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(mut active) = self.active else {
            return;
        };
        let start = *active.start.get_or_insert(now);
        let elapsed = now.duration_since(start);
        let t = if active.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / active.duration.as_secs_f32()).min(1.0)
        };
        self.offset = lerp_i32(active.from, active.to, t).clamp(0, self.max_offset);
        self.active = if t >= 1.0 { None } else { Some(active) };
    }
}

impl ScrollView for LinearScroll {
    fn scroll_y(&self) -> i32 {
        self.offset
    }

    fn scroll_to(&mut self, y: i32) {
        self.active = None;
        self.offset = y.clamp(0, self.max_offset);
    }

    fn animate_to(&mut self, y: i32, duration: Duration) {
        self.active = Some(ActiveScroll {
            from: self.offset,
            to: y.clamp(0, self.max_offset),
            start: None,
            duration,
        });
    }

    fn stop(&mut self) {
        self.active = None;
    }
}

/// Linear interpolation for i32 values.
fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i32
}
