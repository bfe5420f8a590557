//! Application lifecycle: the process-wide session owning the one window.
//!
//! Two layers. `Lifecycle` is the pure create-or-reuse decision machine - it
//! tracks whether a window instance exists and answers launch/reactivate/show
//! requests with a `ShowDirective`, so the singleton properties are testable
//! without a windowing environment. `AppSession` is the GPUI global wrapping
//! it: it holds the actual `WindowHandle`, probes it for liveness (a handle
//! goes stale when the user closes the window), executes directives, and
//! sweeps stray windows at launch.

use gpui::{App, BorrowAppContext, Global, WindowHandle};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{FragmentError, NotifyResultExt, Result};
use crate::window::RevealWindow;

/// What the lifecycle machine wants done with the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowDirective {
    /// No live window: create one, show it, activate the app.
    CreateAndShow,
    /// A window is already on screen: bring it to front without recreating.
    FocusExisting,
}

/// Pure create-or-reuse decision logic. At most one window is ever alive;
/// every operation preserves that.
#[derive(Debug, Default)]
pub struct Lifecycle {
    window_alive: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_alive(&self) -> bool {
        self.window_alive
    }

    /// Launch and the explicit menu action run the same sequence:
    /// create-if-absent, otherwise refocus.
    pub fn show(&mut self) -> ShowDirective {
        if self.window_alive {
            ShowDirective::FocusExisting
        } else {
            self.window_alive = true;
            ShowDirective::CreateAndShow
        }
    }

    /// Reopen request from the platform. With windows already visible this
    /// never creates anything; otherwise it is exactly `show`.
    pub fn reactivate(&mut self, has_visible_windows: bool) -> ShowDirective {
        if has_visible_windows {
            ShowDirective::FocusExisting
        } else {
            self.show()
        }
    }

    /// The window is gone (user closed it, or creation failed).
    pub fn window_closed(&mut self) {
        self.window_alive = false;
    }
}

/// Process-wide session state. Registered as a GPUI global in the bootstrap
/// closure; lives until process exit.
pub struct AppSession {
    config: AppConfig,
    lifecycle: Lifecycle,
    window: Option<WindowHandle<RevealWindow>>,
}

impl Global for AppSession {}

impl AppSession {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new(),
            window: None,
        }
    }

    /// Probe the held handle; a failing update means the window was closed
    /// out from under us. Reconciling before every decision is what resets
    /// the reveal to a fresh intro on the next show request.
    fn reconcile(&mut self, cx: &mut App) {
        if let Some(handle) = self.window {
            let alive = handle.update(cx, |_, _, _| ()).is_ok();
            if !alive {
                info!(
                    event_type = "window_closed",
                    "Reveal window was closed; dropping the stale handle"
                );
                self.window = None;
                self.lifecycle.window_closed();
            }
        }
    }

    /// Create-if-absent, show, focus. Used by launch and the menu action.
    pub fn ensure_window(&mut self, cx: &mut App) -> Result<ShowDirective> {
        self.reconcile(cx);
        let directive = self.lifecycle.show();
        self.apply(directive, cx)?;
        Ok(directive)
    }

    /// Reopen request. Always handled; the return value acknowledges that.
    pub fn reactivate(&mut self, has_visible_windows: bool, cx: &mut App) -> bool {
        self.reconcile(cx);
        let directive = self.lifecycle.reactivate(has_visible_windows);
        self.apply(directive, cx).log_err();
        true
    }

    fn apply(&mut self, directive: ShowDirective, cx: &mut App) -> Result<()> {
        match directive {
            ShowDirective::FocusExisting => {
                if let Some(handle) = self.window {
                    handle
                        .update(cx, |_, window, _| window.activate_window())
                        .map_err(|e| FragmentError::Window(e.to_string()))?;
                }
                cx.activate(true);
                info!(event_type = "window_refocused", "Window brought to front");
            }
            ShowDirective::CreateAndShow => match RevealWindow::open(&self.config, cx) {
                Ok(handle) => {
                    self.window = Some(handle);
                    cx.activate(true);
                    info!(event_type = "window_created", "Reveal window opened");
                }
                Err(e) => {
                    // Roll the pure machine back so a later request retries
                    self.lifecycle.window_closed();
                    return Err(e);
                }
            },
        }
        Ok(())
    }

    /// Silently close anything that is not the session's window.
    pub fn close_stray_windows(&mut self, cx: &mut App) {
        let Some(ours) = self.window else { return };
        let ours_id = ours.window_id();
        let strays: Vec<_> = cx
            .windows()
            .into_iter()
            .filter(|w| w.window_id() != ours_id)
            .collect();
        for stray in strays {
            warn!(
                event_type = "stray_window_closed",
                window_id = ?stray.window_id(),
                "Closing unexpected window"
            );
            stray
                .update(cx, |_, window, _| window.remove_window())
                .warn_on_err();
        }
    }
}

/// Install the session global. Called once from the bootstrap closure.
pub fn init(cx: &mut App, config: AppConfig) {
    cx.set_global(AppSession::new(config));
}

/// Launch sequence: show the window, then sweep strays.
pub fn launch(cx: &mut App) {
    cx.update_global::<AppSession, _>(|session, cx| {
        session.ensure_window(cx).log_err();
        session.close_stray_windows(cx);
    });
}

/// Dock reopen. GPUI only delivers this when no windows are visible, so the
/// visible-windows flag is derived from the open-window list.
pub fn reactivate(cx: &mut App) {
    let has_visible_windows = !cx.windows().is_empty();
    cx.update_global::<AppSession, _>(|session, cx| {
        session.reactivate(has_visible_windows, cx);
    });
}

/// Menu action: re-show the window.
pub fn explicit_show(cx: &mut App) {
    cx.update_global::<AppSession, _>(|session, cx| {
        session.ensure_window(cx).log_err();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count the windows a directive sequence leaves open, assuming every
    /// `CreateAndShow` opens one.
    fn open_windows(directives: &[ShowDirective], closes: usize) -> isize {
        let created = directives
            .iter()
            .filter(|d| **d == ShowDirective::CreateAndShow)
            .count() as isize;
        created - closes as isize
    }

    #[test]
    fn test_launch_creates_exactly_one_window() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.show(), ShowDirective::CreateAndShow);
        assert!(lifecycle.window_alive());
    }

    #[test]
    fn test_repeated_show_reuses_the_window() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.show();
        let directives: Vec<_> = (0..4).map(|_| lifecycle.show()).collect();
        assert_eq!(first, ShowDirective::CreateAndShow);
        assert!(directives.iter().all(|d| *d == ShowDirective::FocusExisting));
    }

    #[test]
    fn test_reactivate_with_visible_windows_never_creates() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.show();
        for _ in 0..3 {
            assert_eq!(lifecycle.reactivate(true), ShowDirective::FocusExisting);
        }
        assert!(lifecycle.window_alive());
    }

    #[test]
    fn test_reactivate_without_windows_creates_when_absent() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.reactivate(false), ShowDirective::CreateAndShow);
        // A second reopen reuses it
        assert_eq!(lifecycle.reactivate(false), ShowDirective::FocusExisting);
    }

    #[test]
    fn test_close_then_reactivate_creates_a_fresh_window() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.show();
        lifecycle.window_closed();
        assert!(!lifecycle.window_alive());
        assert_eq!(lifecycle.reactivate(false), ShowDirective::CreateAndShow);
    }

    #[test]
    fn test_failed_creation_rolls_back() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.show(), ShowDirective::CreateAndShow);
        // Creation failed; the machine must allow a retry
        lifecycle.window_closed();
        assert_eq!(lifecycle.show(), ShowDirective::CreateAndShow);
    }

    #[test]
    fn test_singleton_invariant_across_sequences() {
        // Launch, several reopens, a close, another launch-equivalent, more
        // reopens: never more than one window open at a time.
        let mut lifecycle = Lifecycle::new();
        let mut directives = Vec::new();
        let mut closes = 0;

        directives.push(lifecycle.show());
        directives.push(lifecycle.reactivate(true));
        directives.push(lifecycle.reactivate(false));
        assert_eq!(open_windows(&directives, closes), 1);

        lifecycle.window_closed();
        closes += 1;
        assert_eq!(open_windows(&directives, closes), 0);

        directives.push(lifecycle.reactivate(false));
        directives.push(lifecycle.show());
        directives.push(lifecycle.reactivate(true));
        assert_eq!(open_windows(&directives, closes), 1);
    }
}
