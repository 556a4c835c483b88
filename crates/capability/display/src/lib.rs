//! 点阵显示能力。
//!
//! [`DisplayCapability`] 抽象设备上的 8×8 点阵驱动：滚动文字、整屏设置像素、清屏。
//! 真实驱动在进程外；[`VirtualDisplay`] 是无头帧缓冲实现，记录当前帧与最近一条文字。

use domain::{Color, Pattern};
use std::sync::Mutex;
use tracing::info;

/// 显示错误。
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("scroll speed must be positive, got {0}")]
    InvalidScrollSpeed(f64),
    #[error("display unavailable: {0}")]
    Unavailable(String),
}

/// 点阵显示能力。
pub trait DisplayCapability: Send + Sync {
    /// 滚动显示文字；`scroll_speed` 为每步停留秒数。
    fn show_message(&self, text: &str, scroll_speed: f64, color: Color)
    -> Result<(), DisplayError>;

    /// 整屏设置 64 个像素。
    fn set_pixels(&self, pattern: &Pattern) -> Result<(), DisplayError>;

    /// 熄灭所有像素。
    fn clear(&self) -> Result<(), DisplayError>;
}

/// 最近一次滚动文字。
#[derive(Debug, Clone, PartialEq)]
pub struct ScrolledText {
    pub text: String,
    pub color: Color,
    pub scroll_speed: f64,
}

#[derive(Debug, Default)]
struct Screen {
    frame: Pattern,
    last_text: Option<ScrolledText>,
    writes: u64,
}

/// 无头帧缓冲。
#[derive(Debug, Default)]
pub struct VirtualDisplay {
    screen: Mutex<Screen>,
}

impl VirtualDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前帧。
    pub fn frame(&self) -> Pattern {
        self.screen
            .lock()
            .map(|screen| screen.frame.clone())
            .unwrap_or_default()
    }

    /// 最近一次滚动的文字。
    pub fn last_text(&self) -> Option<ScrolledText> {
        self.screen
            .lock()
            .ok()
            .and_then(|screen| screen.last_text.clone())
    }

    /// 累计写屏次数。
    pub fn writes(&self) -> u64 {
        self.screen.lock().map(|screen| screen.writes).unwrap_or(0)
    }

    fn update<F>(&self, apply: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut Screen),
    {
        let mut screen = self
            .screen
            .lock()
            .map_err(|_| DisplayError::Unavailable("framebuffer lock poisoned".to_string()))?;
        apply(&mut screen);
        screen.writes += 1;
        Ok(())
    }
}

impl DisplayCapability for VirtualDisplay {
    fn show_message(
        &self,
        text: &str,
        scroll_speed: f64,
        color: Color,
    ) -> Result<(), DisplayError> {
        if !(scroll_speed.is_finite() && scroll_speed > 0.0) {
            return Err(DisplayError::InvalidScrollSpeed(scroll_speed));
        }
        self.update(|screen| {
            // 文字滚完后屏幕回到全黑
            screen.frame = ledfleet_pattern::blank();
            screen.last_text = Some(ScrolledText {
                text: text.to_string(),
                color,
                scroll_speed,
            });
        })?;
        info!(
            target: "ledfleet.display",
            chars = text.chars().count(),
            scroll_speed,
            "text_scrolled"
        );
        Ok(())
    }

    fn set_pixels(&self, pattern: &Pattern) -> Result<(), DisplayError> {
        self.update(|screen| screen.frame = pattern.clone())?;
        info!(target: "ledfleet.display", lit = pattern.lit_count(), "pixels_set");
        Ok(())
    }

    fn clear(&self) -> Result<(), DisplayError> {
        self.update(|screen| screen.frame = ledfleet_pattern::blank())?;
        info!(target: "ledfleet.display", "display_cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Icon;

    #[test]
    fn new_display_is_dark() {
        let display = VirtualDisplay::new();
        assert_eq!(display.frame().lit_count(), 0);
        assert_eq!(display.writes(), 0);
    }

    #[test]
    fn non_positive_scroll_speed_is_rejected() {
        let display = VirtualDisplay::new();
        let err = display
            .show_message("hi", 0.0, Color::new(1, 2, 3))
            .expect_err("zero speed");
        assert!(matches!(err, DisplayError::InvalidScrollSpeed(_)));
        assert_eq!(display.last_text(), None);
        assert_eq!(display.writes(), 0);
    }

    #[test]
    fn clear_after_icon_blanks_frame() {
        let display = VirtualDisplay::new();
        let heart = ledfleet_pattern::render(Icon::Heart, Color::new(255, 0, 0));
        display.set_pixels(&heart).expect("set");
        assert_eq!(display.frame(), heart);
        display.clear().expect("clear");
        assert_eq!(display.frame(), ledfleet_pattern::blank());
        assert_eq!(display.writes(), 2);
    }
}
