//! 显示命令：原始请求、校验后的命令与线上编码。
//!
//! 流程：调用方构造 [`DisplayRequest`] → [`DisplayRequest::validate`] 得到
//! [`DisplayCommand`] → [`DisplayCommand::encode`] 得到 [`EncodedCommand`]（接口路径 + 报文体）。

use crate::color::Color;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// 设备端命令接口路径。
pub mod endpoints {
    pub const SET_MESSAGE: &str = "/set_message";
    pub const SET_HEART: &str = "/set_heart";
    pub const SET_SMILEY: &str = "/set_smiley";
    pub const CLEAR: &str = "/clear";
}

/// 笑脸表情。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
}

impl Mood {
    /// 解析表情；`happy` / `sad` 之外（包括空串）一律拒绝。
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            other => Err(ValidationError::UnknownMood(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 支持的图标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Heart,
    SmileyHappy,
    SmileySad,
}

impl Icon {
    pub fn smiley(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Self::SmileyHappy,
            Mood::Sad => Self::SmileySad,
        }
    }

    /// 按图标名与表情解析。`heart` 忽略表情；`smiley` 必须带合法表情。
    pub fn parse(name: &str, mood: Option<&str>) -> Result<Self, ValidationError> {
        match name {
            "heart" => Ok(Self::Heart),
            "smiley" => Mood::parse(mood.unwrap_or_default()).map(Self::smiley),
            other => Err(ValidationError::UnknownIcon(other.to_string())),
        }
    }

    pub fn mood(&self) -> Option<Mood> {
        match self {
            Self::Heart => None,
            Self::SmileyHappy => Some(Mood::Happy),
            Self::SmileySad => Some(Mood::Sad),
        }
    }
}

/// 原始显示请求（尚未校验）。
///
/// JSON 形式：`{"type":"text","text":..,"color":[..],"author":..}`、
/// `{"type":"icon","icon":"smiley","mood":"happy","color":[..]}`、`{"type":"clear"}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayRequest {
    Text {
        text: String,
        color: Vec<i64>,
        #[serde(default)]
        author: String,
    },
    Icon {
        icon: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mood: Option<String>,
        color: Vec<i64>,
    },
    Clear,
}

impl DisplayRequest {
    pub fn text(text: impl Into<String>, color: Vec<i64>, author: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            color,
            author: author.into(),
        }
    }

    pub fn heart(color: Vec<i64>) -> Self {
        Self::Icon {
            icon: "heart".to_string(),
            mood: None,
            color,
        }
    }

    pub fn smiley(mood: impl Into<String>, color: Vec<i64>) -> Self {
        Self::Icon {
            icon: "smiley".to_string(),
            mood: Some(mood.into()),
            color,
        }
    }

    /// 校验并转换为 [`DisplayCommand`]。空文本与空作者均合法。
    pub fn validate(self) -> Result<DisplayCommand, ValidationError> {
        match self {
            Self::Text {
                text,
                color,
                author,
            } => Ok(DisplayCommand::ShowText {
                text,
                color: Color::from_channels(&color)?,
                author,
            }),
            Self::Icon { icon, mood, color } => {
                let icon = Icon::parse(&icon, mood.as_deref())?;
                Ok(DisplayCommand::ShowIcon {
                    icon,
                    color: Color::from_channels(&color)?,
                })
            }
            Self::Clear => Ok(DisplayCommand::Clear),
        }
    }

    /// 校验后直接编码。
    pub fn encode(self) -> Result<EncodedCommand, ValidationError> {
        self.validate().map(|command| command.encode())
    }
}

/// 校验后的显示命令，自描述编码：`{"type":"text"|"icon"|"clear", ...}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayCommand {
    #[serde(rename = "text")]
    ShowText {
        text: String,
        color: Color,
        author: String,
    },
    #[serde(rename = "icon")]
    ShowIcon { icon: Icon, color: Color },
    Clear,
}

impl DisplayCommand {
    /// 命令种类（日志用）。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShowText { .. } => "text",
            Self::ShowIcon { .. } => "icon",
            Self::Clear => "clear",
        }
    }

    /// 编码为设备端接口请求。
    pub fn encode(&self) -> EncodedCommand {
        match self {
            Self::ShowText {
                text,
                color,
                author,
            } => EncodedCommand {
                endpoint: endpoints::SET_MESSAGE,
                body: Some(json!({ "message": text, "color": color, "author": author })),
            },
            Self::ShowIcon {
                icon: Icon::Heart,
                color,
            } => EncodedCommand {
                endpoint: endpoints::SET_HEART,
                body: Some(json!({ "color": color })),
            },
            Self::ShowIcon {
                icon: icon @ (Icon::SmileyHappy | Icon::SmileySad),
                color,
            } => EncodedCommand {
                endpoint: endpoints::SET_SMILEY,
                body: Some(json!({
                    "mood": icon.mood().map(|mood| mood.as_str()),
                    "color": color,
                })),
            },
            Self::Clear => EncodedCommand {
                endpoint: endpoints::CLEAR,
                body: None,
            },
        }
    }
}

/// 线上请求：接口路径 + 可选 JSON 报文体。
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedCommand {
    pub endpoint: &'static str,
    pub body: Option<serde_json::Value>,
}
