//! 颜色与 8×8 图案。

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 点阵边长。
pub const GRID_SIDE: usize = 8;

/// 图案像素数（恒为 64）。
pub const PATTERN_LEN: usize = GRID_SIDE * GRID_SIDE;

/// RGB 颜色，线上表示为 `[r, g, b]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从原始整数通道构造颜色。
    ///
    /// 通道数必须为 3，每个通道必须落在 `[0, 255]`。
    pub fn from_channels(channels: &[i64]) -> Result<Self, ValidationError> {
        if channels.len() != 3 {
            return Err(ValidationError::ColorArity(channels.len()));
        }
        let mut out = [0u8; 3];
        for (channel, value) in channels.iter().copied().enumerate() {
            out[channel] = u8::try_from(value)
                .map_err(|_| ValidationError::ColorRange { channel, value })?;
        }
        Ok(Self::from(out))
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.channels()
    }
}

/// 8×8 图案，行优先。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern([Color; PATTERN_LEN]);

impl Pattern {
    /// 整屏单色。
    pub fn filled(color: Color) -> Self {
        Self([color; PATTERN_LEN])
    }

    /// 按掩码着色：非零位置取 `color`，其余为黑色。
    pub fn from_mask(mask: &[u8; PATTERN_LEN], color: Color) -> Self {
        let mut cells = [Color::BLACK; PATTERN_LEN];
        for (cell, lit) in cells.iter_mut().zip(mask.iter()) {
            if *lit != 0 {
                *cell = color;
            }
        }
        Self(cells)
    }

    pub fn cells(&self) -> &[Color; PATTERN_LEN] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        Some(self.0[row * GRID_SIDE + col])
    }

    /// 非黑像素数。
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|cell| **cell != Color::BLACK).count()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::filled(Color::BLACK)
    }
}
