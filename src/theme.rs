use gpui::{rgb, Rgba};

/// The single dark palette the app ships. Kept out of the render code so the
/// state machine and layout stay color-blind.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Rgba,
    /// Ice-blue used for both headings.
    pub accent: Rgba,
    pub body_text: Rgba,
    pub link: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: rgb(0x000000),
            accent: rgb(0x99ccff),
            body_text: rgb(0xffffff),
            link: rgb(0x0a84ff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
