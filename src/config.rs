use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Crossfade length in milliseconds for the intro -> fragment reveal.
pub const DEFAULT_CROSSFADE_MS: u64 = 350;

/// Logical window size.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

const WINDOW_TITLE: &str = "Dr. Ni’s Final Challenge";
const FRAGMENT_HEADING: &str = "Dr. Ni’s Last Fragment";
const SUBMISSION_LINK: &str = "Submit: exun.co/25/hardware/bonus";

const FRAGMENT_BODY: &str = r#"“The Sensory Profile of Memory”

If you are reading this, you have successfully reconstructed the final layer of my workstation — the only environment capable of revealing this fragment.
You have passed every technical threshold I placed before you.

Now for the last test.

The world believed my research was about shrinking matter. They were wrong.
It was about expanding perception — discovering meaning in the smallest, most overlooked components of our machines.

Your final task is simple:

⭐ Final Task: Rate and Describe the Flavor of a RAM Stick ⭐

Imagine — purely in fiction — that a RAM stick had a flavor.
Using creativity, humor, and your own interpretive brilliance:

1. Describe what you think a RAM stick tastes like.
2. Rate that flavor out of 10.

There are no rules.
There are no wrong answers.

When you are done, submit your description and rating to the judges.

— Dr. Tai Ni
“Memory is more than storage. It is experience.”"#;

/// Everything the window and its state machine are configured with. All
/// values are compiled-in; the structs stay serde-plain data so the content
/// is injected, never reached for from inside the machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub content: ContentConfig,
    #[serde(default = "default_crossfade_ms", rename = "crossfadeMs")]
    pub crossfade_ms: u64,
}

/// Window chrome: title (shown in the Dock/app switcher; the titlebar itself
/// is transparent) and logical size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// The narrative text behind the reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Heading on both the intro screen and the revealed fragment.
    pub heading: String,
    pub body: String,
    /// Informational only; no submission is performed.
    #[serde(rename = "linkLabel")]
    pub link_label: String,
}

fn default_crossfade_ms() -> u64 {
    DEFAULT_CROSSFADE_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window: WindowConfig::default(),
            content: ContentConfig::default(),
            crossfade_ms: DEFAULT_CROSSFADE_MS,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: WINDOW_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            heading: FRAGMENT_HEADING.to_string(),
            body: FRAGMENT_BODY.to_string(),
            link_label: SUBMISSION_LINK.to_string(),
        }
    }
}

impl AppConfig {
    pub fn crossfade_duration(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_the_fragment() {
        let config = AppConfig::default();
        assert_eq!(config.content.heading, "Dr. Ni’s Last Fragment");
        assert!(config.content.body.contains("Final Task"));
        assert!(config.content.link_label.starts_with("Submit:"));
    }

    #[test]
    fn test_default_crossfade_matches_original() {
        let config = AppConfig::default();
        assert_eq!(config.crossfade_duration(), Duration::from_millis(350));
    }
}
