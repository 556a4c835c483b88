//! 点阵显示领域模型：颜色、图案、显示命令与校验错误。
//!
//! 所有能力模块共享本 crate 中的类型：
//! - [`Color`] / [`Pattern`]：8×8 点阵的像素数据
//! - [`DisplayRequest`]：调用方给出的原始（未校验）显示请求
//! - [`DisplayCommand`]：校验后的显示命令，可编码为线上报文
//! - [`ValidationError`]：请求离开控制端之前的校验失败

pub mod color;
pub mod command;
pub mod error;

pub use color::{Color, GRID_SIDE, PATTERN_LEN, Pattern};
pub use command::{DisplayCommand, DisplayRequest, EncodedCommand, Icon, Mood, endpoints};
pub use error::ValidationError;
