//! The reveal window: intro layer, content layer, and the crossfade glue.
//!
//! Both layers are built at construction and stay in the element tree
//! together - the intro overlays the content until its fade-out settles,
//! then it is unmounted for good. The pure timeline lives in
//! [`crate::reveal`]; this module only forwards clicks into it and drives
//! re-renders while a crossfade is running.

use std::time::{Duration, Instant};

use gpui::{
    div, prelude::*, px, relative, size, App, Bounds, Context, FocusHandle, Focusable, FontWeight,
    MouseButton, MouseDownEvent, ScrollHandle, SharedString, Timer, TitlebarOptions, Window,
    WindowBackgroundAppearance, WindowBounds, WindowHandle, WindowKind, WindowOptions,
};
use tracing::{debug, info};

use crate::config::{AppConfig, ContentConfig};
use crate::error::{FragmentError, Result};
use crate::reveal::RevealState;
use crate::theme::Theme;

/// Tick interval for the crossfade driver task.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const INTRO_HEADING_SIZE: f32 = 64.0;
const CONTENT_HEADING_SIZE: f32 = 58.0;
const BODY_TEXT_SIZE: f32 = 16.0;
const LINK_TEXT_SIZE: f32 = 15.0;
const CONTENT_MAX_WIDTH: f32 = 800.0;
const CONTENT_GAP: f32 = 16.0;
const CONTENT_INSET_X: f32 = 28.0;
const CONTENT_INSET_Y: f32 = 32.0;

pub struct RevealWindow {
    content: ContentConfig,
    theme: Theme,
    reveal: RevealState,
    focus_handle: FocusHandle,
    scroll_handle: ScrollHandle,
}

impl RevealWindow {
    pub fn new(config: &AppConfig, cx: &mut Context<Self>) -> Self {
        Self {
            content: config.content.clone(),
            theme: Theme::dark(),
            reveal: RevealState::new(config.crossfade_duration()),
            focus_handle: cx.focus_handle(),
            scroll_handle: ScrollHandle::new(),
        }
    }

    /// Open the window with the chrome the original uses: centered 1280x720,
    /// transparent titlebar with hidden title text, regular window controls.
    pub fn open(config: &AppConfig, cx: &mut App) -> Result<WindowHandle<Self>> {
        let bounds = Bounds::centered(
            None,
            size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.window.title.clone())),
                appears_transparent: true,
                ..Default::default()
            }),
            window_background: WindowBackgroundAppearance::Opaque,
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let config_for_view = config.clone();
        let handle = cx
            .open_window(options, |_, cx| {
                cx.new(|cx| RevealWindow::new(&config_for_view, cx))
            })
            .map_err(|e| FragmentError::Window(e.to_string()))?;

        handle
            .update(cx, |view, window, cx| {
                let focus_handle = view.focus_handle(cx);
                window.focus(&focus_handle);
            })
            .map_err(|e| FragmentError::Window(e.to_string()))?;

        Ok(handle)
    }

    /// Intro click: flip the machine, then drive frames until it settles.
    fn begin_reveal(&mut self, cx: &mut Context<Self>) {
        if !self.reveal.activate_intro(Instant::now()) {
            debug!(
                event_type = "reveal_noop",
                "Reveal already triggered; ignoring input"
            );
            return;
        }
        info!(event_type = "reveal_started", "Crossfading to the fragment");
        cx.notify();

        cx.spawn(async move |this, cx| {
            loop {
                Timer::after(FRAME_INTERVAL).await;
                let settled = cx
                    .update(|cx| {
                        this.update(cx, |view, cx| {
                            let settled = view.reveal.settle(Instant::now());
                            cx.notify();
                            settled
                        })
                        .unwrap_or(true)
                    })
                    .unwrap_or(true);
                if settled {
                    break;
                }
            }
            debug!(
                event_type = "reveal_settled",
                "Crossfade complete; intro layer unmounted"
            );
        })
        .detach();
    }

    fn render_intro(&self, opacity: f32, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("intro")
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(self.theme.background)
            .opacity(opacity)
            .cursor_pointer()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, _window, cx| {
                    this.begin_reveal(cx);
                }),
            )
            .child(
                div()
                    .px(px(24.))
                    .max_w(px(1100.))
                    .text_size(px(INTRO_HEADING_SIZE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(self.theme.accent)
                    .text_center()
                    .child(SharedString::from(self.content.heading.clone())),
            )
    }

    fn render_content(&self, opacity: f32, _cx: &mut Context<Self>) -> impl IntoElement {
        let paragraphs: Vec<SharedString> = self
            .content
            .body
            .split("\n\n")
            .map(|p| SharedString::from(p.to_string()))
            .collect();

        div()
            .id("fragment-scroll")
            .absolute()
            .inset_0()
            .overflow_y_scroll()
            .track_scroll(&self.scroll_handle)
            .opacity(opacity)
            .child(
                // Centers when the text fits, grows past the viewport (and
                // scrolls) when it does not.
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .w_full()
                    .min_h(relative(1.))
                    .px(px(CONTENT_INSET_X))
                    .py(px(CONTENT_INSET_Y))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap(px(CONTENT_GAP))
                            .max_w(px(CONTENT_MAX_WIDTH))
                            .child(
                                div()
                                    .text_size(px(CONTENT_HEADING_SIZE))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(self.theme.accent)
                                    .text_center()
                                    .child(SharedString::from(self.content.heading.clone())),
                            )
                            .children(paragraphs.into_iter().map(|paragraph| {
                                div()
                                    .text_size(px(BODY_TEXT_SIZE))
                                    .text_color(self.theme.body_text)
                                    .text_center()
                                    .child(paragraph)
                            }))
                            .child(
                                div()
                                    .text_size(px(LINK_TEXT_SIZE))
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(self.theme.link)
                                    .text_center()
                                    .child(SharedString::from(self.content.link_label.clone())),
                            ),
                    ),
            )
    }
}

impl Focusable for RevealWindow {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RevealWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fade = self.reveal.opacities(Instant::now());

        div()
            .size_full()
            .relative()
            .bg(self.theme.background)
            .track_focus(&self.focus_handle)
            .child(self.render_content(fade.incoming.value(), cx))
            .when(self.reveal.intro_mounted(), |el| {
                el.child(self.render_intro(fade.outgoing.value(), cx))
            })
    }
}
