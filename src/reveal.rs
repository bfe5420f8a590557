//! The intro -> revealed presentation machine, kept free of UI types.
//!
//! One window face at a time: the intro waits for a click, then a single
//! irreversible transition crossfades the fragment into view. The phase flip
//! is the idempotence guard - it happens synchronously when the transition is
//! requested, so a second click landing mid-animation is already rejected.
//! All timing flows through explicit `Instant` parameters.

use std::time::{Duration, Instant};

use crate::transitions::{Crossfade, FadePair};

/// Which face of the window the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting for the user to click through.
    Intro,
    /// The fragment is (or is becoming) visible. Terminal.
    Revealed,
}

#[derive(Debug)]
pub struct RevealState {
    phase: RevealPhase,
    crossfade_duration: Duration,
    /// In-flight crossfade; present only between activation and settling.
    crossfade: Option<Crossfade>,
    /// Whether the intro layer is still part of the element tree.
    intro_mounted: bool,
}

impl RevealState {
    pub fn new(crossfade_duration: Duration) -> Self {
        Self {
            phase: RevealPhase::Intro,
            crossfade_duration,
            crossfade: None,
            intro_mounted: true,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    pub fn intro_mounted(&self) -> bool {
        self.intro_mounted
    }

    /// The sole transition. Returns whether this call started the reveal;
    /// every later call is a no-op. The phase flips before the crossfade is
    /// constructed, never on animation completion.
    pub fn activate_intro(&mut self, now: Instant) -> bool {
        if self.phase == RevealPhase::Revealed {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        self.crossfade = Some(Crossfade::new(now, self.crossfade_duration));
        true
    }

    /// Opacity pair (intro layer, content layer) at `now`.
    pub fn opacities(&self, now: Instant) -> FadePair {
        match (self.phase, &self.crossfade) {
            (RevealPhase::Intro, _) => FadePair::AT_START,
            (RevealPhase::Revealed, Some(fade)) => fade.opacities_at(now),
            (RevealPhase::Revealed, None) => FadePair::AT_END,
        }
    }

    /// Advance the timeline. Once the crossfade deadline passes, the intro
    /// layer is unmounted and the crossfade dropped. Returns true when no
    /// further animation frames are needed.
    pub fn settle(&mut self, now: Instant) -> bool {
        match &self.crossfade {
            None => true,
            Some(fade) if fade.is_complete_at(now) => {
                self.crossfade = None;
                self.intro_mounted = false;
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions::DURATION_CROSSFADE;

    fn machine() -> (RevealState, Instant) {
        (RevealState::new(DURATION_CROSSFADE), Instant::now())
    }

    #[test]
    fn test_fresh_state_shows_intro_only() {
        let (state, t0) = machine();
        assert_eq!(state.phase(), RevealPhase::Intro);
        assert!(state.intro_mounted());
        assert!(!state.is_revealed());
        assert_eq!(state.opacities(t0), FadePair::AT_START);
    }

    #[test]
    fn test_activation_flips_phase_synchronously() {
        let (mut state, t0) = machine();
        assert!(state.activate_intro(t0));
        // Revealed immediately, not at animation completion
        assert!(state.is_revealed());
        // The intro stays mounted until the crossfade settles
        assert!(state.intro_mounted());
    }

    #[test]
    fn test_repeated_activation_transitions_exactly_once() {
        let (mut state, t0) = machine();
        let mut transitions = 0;
        for i in 0..5 {
            if state.activate_intro(t0 + Duration::from_millis(i * 10)) {
                transitions += 1;
            }
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_second_click_mid_animation_is_rejected_and_changes_nothing() {
        let (mut state, t0) = machine();
        assert!(state.activate_intro(t0));
        let before = state.opacities(t0 + Duration::from_millis(200));
        assert!(!state.activate_intro(t0 + Duration::from_millis(100)));
        // The rejected click did not restart the crossfade clock
        let after = state.opacities(t0 + Duration::from_millis(200));
        assert_eq!(before, after);
    }

    #[test]
    fn test_settle_before_deadline_keeps_intro_mounted() {
        let (mut state, t0) = machine();
        state.activate_intro(t0);
        assert!(!state.settle(t0 + Duration::from_millis(100)));
        assert!(state.intro_mounted());
    }

    #[test]
    fn test_settle_after_deadline_unmounts_intro() {
        let (mut state, t0) = machine();
        state.activate_intro(t0);
        assert!(state.settle(t0 + DURATION_CROSSFADE));
        assert!(!state.intro_mounted());
        // Content fully opaque from here on
        assert_eq!(state.opacities(t0 + DURATION_CROSSFADE), FadePair::AT_END);
        assert_eq!(
            state.opacities(t0 + Duration::from_secs(60)),
            FadePair::AT_END
        );
    }

    #[test]
    fn test_settle_is_idempotent_once_complete() {
        let (mut state, t0) = machine();
        state.activate_intro(t0);
        assert!(state.settle(t0 + DURATION_CROSSFADE));
        assert!(state.settle(t0 + DURATION_CROSSFADE + Duration::from_millis(1)));
        assert!(!state.intro_mounted());
    }

    #[test]
    fn test_settle_without_activation_needs_no_frames() {
        let (mut state, t0) = machine();
        assert!(state.settle(t0));
        // Intro untouched: nothing was running
        assert!(state.intro_mounted());
        assert_eq!(state.phase(), RevealPhase::Intro);
    }

    #[test]
    fn test_opacities_track_the_crossfade() {
        let (mut state, t0) = machine();
        state.activate_intro(t0);
        let mid = state.opacities(t0 + DURATION_CROSSFADE / 2);
        assert!(mid.outgoing.value() < 1.0);
        assert!(mid.incoming.value() > 0.0);
    }
}
