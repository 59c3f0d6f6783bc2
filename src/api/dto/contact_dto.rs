//! 联系表单 DTO

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ContactAcceptedResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for ContactAcceptedResponse {
    fn default() -> Self {
        Self {
            status: "accepted",
            message: "Message sent successfully!",
        }
    }
}
