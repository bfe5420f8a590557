//! Animation helpers for the reveal crossfade.
//!
//! `Crossfade` is deadline-based rather than frame-based: it is constructed
//! with a start instant and a duration, and every query takes an explicit
//! `now`. The render loop asks for the current `FadePair`; tests walk the
//! timeline with synthetic instants and never sleep.

use std::time::{Duration, Instant};

/// A value which can be linearly interpolated with another value of the
/// same type. `delta` runs from 0.0 (self) to 1.0 (`to`).
pub trait Lerp {
    fn lerp(&self, to: &Self, delta: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, to: &Self, delta: f32) -> Self {
        self + (to - self) * delta
    }
}

/// Default crossfade length, matching the original 0.35 s reveal.
pub const DURATION_CROSSFADE: Duration = Duration::from_millis(350);

/// Quadratic ease out - fast start, slow end.
/// Good for elements entering the screen.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease in - slow start, fast end.
/// Good for elements leaving the screen.
#[inline]
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Opacity value for fade transitions (0.0 = invisible, 1.0 = fully visible)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opacity(pub f32);

impl Opacity {
    pub const INVISIBLE: Self = Self(0.0);
    pub const VISIBLE: Self = Self(1.0);

    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Lerp for Opacity {
    fn lerp(&self, to: &Self, delta: f32) -> Self {
        Self(self.0 + (to.0 - self.0) * delta)
    }
}

/// The two opacities a crossfade holds at one instant: the layer on its way
/// out and the layer on its way in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadePair {
    pub outgoing: Opacity,
    pub incoming: Opacity,
}

impl FadePair {
    /// Before any crossfade: outgoing layer fully shown, incoming hidden.
    pub const AT_START: Self = Self {
        outgoing: Opacity::VISIBLE,
        incoming: Opacity::INVISIBLE,
    };

    /// After the crossfade: outgoing layer gone, incoming fully shown.
    pub const AT_END: Self = Self {
        outgoing: Opacity::INVISIBLE,
        incoming: Opacity::VISIBLE,
    };
}

/// A timed two-layer fade. The outgoing layer eases in (accelerates out of
/// view); the incoming layer eases out (decelerates into view). The two run
/// concurrently over the same window of time.
#[derive(Clone, Copy, Debug)]
pub struct Crossfade {
    started_at: Instant,
    duration: Duration,
}

impl Crossfade {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Linear progress through the fade at `now`, clamped to 0.0..=1.0.
    /// A zero-duration fade is complete immediately.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// Eased opacities for both layers at `now`.
    pub fn opacities_at(&self, now: Instant) -> FadePair {
        let t = self.progress_at(now);
        FadePair {
            outgoing: Opacity::VISIBLE.lerp(&Opacity::INVISIBLE, ease_in_quad(t)),
            incoming: Opacity::INVISIBLE.lerp(&Opacity::VISIBLE, ease_out_quad(t)),
        }
    }
}
