//! 偏好设置 DTO

use serde::Serialize;

use crate::models::preference::ScreenPreferences;

/// 偏好设置响应，附带页面应挂载的 CSS 类
#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub client_id: String,
    pub preferences: ScreenPreferences,
    pub css_classes: Vec<String>,
}

impl PreferenceResponse {
    pub fn new(client_id: String, preferences: ScreenPreferences) -> Self {
        Self {
            client_id,
            css_classes: preferences.css_classes(),
            preferences,
        }
    }
}
