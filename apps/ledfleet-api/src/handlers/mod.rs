//! Handlers 模块

pub mod dispatch;
pub mod display;
pub mod hosts;
pub mod messages;
pub mod system;

pub use dispatch::*;
pub use display::*;
pub use hosts::*;
pub use messages::*;
pub use system::*;
