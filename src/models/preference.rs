//! 屏幕外观偏好
//!
//! 四项枚举设置，以固定键名的字符串形式保存。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

pub const KEY_LAYOUT: &str = "layout";
pub const KEY_FONT_SIZE: &str = "fontSize";
pub const KEY_ACCENT_MODE: &str = "accentMode";
pub const KEY_HIGH_CONTRAST: &str = "highContrast";

/// 无法识别的偏好取值
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownPreference {
    pub kind: &'static str,
    pub value: String,
}

/// 页面布局
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Compact,
    #[default]
    Comfortable,
    Wide,
}

/// 字号
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

/// 开关型设置
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    On,
    Off,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Comfortable => "comfortable",
            Layout::Wide => "wide",
        }
    }
}

impl FromStr for Layout {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Layout::Compact),
            "comfortable" => Ok(Layout::Comfortable),
            "wide" => Ok(Layout::Wide),
            other => Err(UnknownPreference {
                kind: KEY_LAYOUT,
                value: other.to_string(),
            }),
        }
    }
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
        }
    }
}

impl FromStr for FontSize {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "normal" => Ok(FontSize::Normal),
            "large" => Ok(FontSize::Large),
            other => Err(UnknownPreference {
                kind: KEY_FONT_SIZE,
                value: other.to_string(),
            }),
        }
    }
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::On => "on",
            Toggle::Off => "off",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On)
    }
}

impl FromStr for Toggle {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Toggle::On),
            "off" => Ok(Toggle::Off),
            other => Err(UnknownPreference {
                kind: "toggle",
                value: other.to_string(),
            }),
        }
    }
}

/// 屏幕偏好设置
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPreferences {
    pub layout: Layout,
    pub font_size: FontSize,
    pub accent_mode: Toggle,
    pub high_contrast: Toggle,
}

impl Default for ScreenPreferences {
    fn default() -> Self {
        Self {
            layout: Layout::Comfortable,
            font_size: FontSize::Normal,
            accent_mode: Toggle::On,
            high_contrast: Toggle::Off,
        }
    }
}

impl ScreenPreferences {
    /// 从键值对解析；缺失或非法的取值保留默认值
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| pairs.get(key).map(String::as_str);

        Self {
            layout: read(KEY_LAYOUT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.layout),
            font_size: read(KEY_FONT_SIZE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.font_size),
            accent_mode: read(KEY_ACCENT_MODE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.accent_mode),
            high_contrast: read(KEY_HIGH_CONTRAST)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.high_contrast),
        }
    }

    /// 写出四个固定键
    pub fn to_pairs(&self) -> HashMap<String, String> {
        HashMap::from([
            (KEY_LAYOUT.to_string(), self.layout.as_str().to_string()),
            (KEY_FONT_SIZE.to_string(), self.font_size.as_str().to_string()),
            (
                KEY_ACCENT_MODE.to_string(),
                self.accent_mode.as_str().to_string(),
            ),
            (
                KEY_HIGH_CONTRAST.to_string(),
                self.high_contrast.as_str().to_string(),
            ),
        ])
    }

    /// 页面根元素上应挂载的 CSS 类
    pub fn css_classes(&self) -> Vec<String> {
        let mut classes = vec![
            format!("layout-{}", self.layout.as_str()),
            format!("font-size-{}", self.font_size.as_str()),
        ];
        if !self.accent_mode.is_on() {
            classes.push("accent-off".to_string());
        }
        if self.high_contrast.is_on() {
            classes.push("high-contrast".to_string());
        }
        classes
    }
}
