//! 图案库：图标 → 8×8 图案。
//!
//! 掩码为编译期常量（行优先，1 = 点亮）。渲染只做一件事：
//! 掩码位置填入请求颜色，其余为黑色。无状态、无副作用。

use domain::{Color, Icon, Mood, PATTERN_LEN, Pattern, ValidationError};

#[rustfmt::skip]
pub const HEART_MASK: [u8; PATTERN_LEN] = [
    0, 1, 1, 0, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    0, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 0, 0, 1, 1, 0, 0, 0,
];

#[rustfmt::skip]
pub const SMILEY_HAPPY_MASK: [u8; PATTERN_LEN] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 0,
    0, 1, 1, 0, 0, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 0, 0, 0, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    0, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
pub const SMILEY_SAD_MASK: [u8; PATTERN_LEN] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 0,
    0, 1, 1, 0, 0, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 0, 0, 0, 0, 1, 1,
];

/// 图标对应的掩码。
pub fn mask(icon: Icon) -> &'static [u8; PATTERN_LEN] {
    match icon {
        Icon::Heart => &HEART_MASK,
        Icon::SmileyHappy => &SMILEY_HAPPY_MASK,
        Icon::SmileySad => &SMILEY_SAD_MASK,
    }
}

/// 渲染图标。
pub fn render(icon: Icon, color: Color) -> Pattern {
    Pattern::from_mask(mask(icon), color)
}

/// 按表情字符串渲染笑脸；`happy` / `sad` 之外返回校验错误。
pub fn render_smiley(mood: &str, color: Color) -> Result<Pattern, ValidationError> {
    let mood = Mood::parse(mood)?;
    Ok(render(Icon::smiley(mood), color))
}

/// 整屏单色。
pub fn solid(color: Color) -> Pattern {
    Pattern::filled(color)
}

/// 全黑（清屏）。
pub fn blank() -> Pattern {
    solid(Color::BLACK)
}
