use crossterm::style::{Color, StyledContent, Stylize};
use vbc::config::ThemeMode;
use vbc::video::Verdict;

/// Output palette. `None` colors mean plain text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent: Option<Color>,
    pub muted: Option<Color>,
    pub success: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
}

impl Theme {
    /// For light terminal backgrounds
    pub fn light() -> Self {
        Self {
            accent: Some(Color::Rgb { r: 135, g: 75, b: 253 }), // #874bfd
            muted: Some(Color::Rgb { r: 90, g: 90, b: 90 }),
            success: Some(Color::Rgb { r: 13, g: 94, b: 58 }), // #0d5e3a
            warning: Some(Color::Rgb { r: 153, g: 101, b: 21 }), // #996515
            error: Some(Color::Rgb { r: 170, g: 30, b: 30 }),
        }
    }

    /// For dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            accent: Some(Color::Rgb { r: 125, g: 86, b: 244 }), // #7d56f4
            muted: Some(Color::Rgb { r: 120, g: 120, b: 120 }),
            success: Some(Color::Rgb { r: 80, g: 250, b: 150 }), // #50fa96
            warning: Some(Color::Rgb { r: 255, g: 215, b: 95 }), // #ffd75f
            error: Some(Color::Rgb { r: 255, g: 95, b: 95 }),
        }
    }

    pub fn plain() -> Self {
        Self {
            accent: None,
            muted: None,
            success: None,
            warning: None,
            error: None,
        }
    }

    /// Resolve the configured mode. `no_color` and `NO_COLOR` always win.
    pub fn resolve(mode: ThemeMode, no_color: bool) -> Self {
        if no_color || std::env::var_os("NO_COLOR").is_some() {
            return Self::plain();
        }
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::None => Self::plain(),
            ThemeMode::Auto => {
                if detect_light_background(std::env::var("COLORFGBG").ok().as_deref()) {
                    Self::light()
                } else {
                    Self::dark()
                }
            }
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Option<Color> {
        match verdict {
            Verdict::Fits => self.success,
            Verdict::FitsWithDsc => self.warning,
            Verdict::InsufficientBandwidth | Verdict::NoDsc => self.error,
        }
    }

    pub fn paint(&self, text: impl Into<String>, color: Option<Color>) -> StyledContent<String> {
        let text: String = text.into();
        match color {
            Some(color) => text.with(color),
            None => text.stylize(),
        }
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;x;bg"); bg 7 or 15 is light.
fn detect_light_background(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg == 7 || bg == 15)
        .unwrap_or(false)
}
