//! 联系表单

use serde::{Deserialize, Serialize};

use crate::security::validation::{RequestValidator, Sanitizable, Validatable, ValidationResult};

/// 访客提交的联系表单
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// 转发给联系后端的请求体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRelayBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn relay_body(&self) -> ContactRelayBody {
        let project_type = self.project_type.as_deref().unwrap_or_default();
        let subject = self.subject.clone().unwrap_or_else(|| {
            let kind = if project_type.is_empty() {
                "No project type"
            } else {
                project_type
            };
            format!("New message from {} - {}", self.name, kind)
        });

        let message = format!(
            "Project Type: {}\nBudget: {}\nTimeline: {}\nMessage: {}",
            project_type,
            self.budget.as_deref().unwrap_or_default(),
            self.timeline.as_deref().unwrap_or_default(),
            self.message
        );

        ContactRelayBody {
            name: self.name.clone(),
            email: self.email.clone(),
            subject,
            message,
        }
    }
}

impl Validatable for ContactMessage {
    fn validate(&self) -> ValidationResult<()> {
        let validator = RequestValidator::new();
        validator.validate_length("name", &self.name, Some(1), Some(100))?;
        validator.validate_email("email", &self.email)?;
        validator.validate_length("message", &self.message, Some(1), Some(5000))?;
        if let Some(subject) = &self.subject {
            validator.validate_length("subject", subject, None, Some(200))?;
        }
        Ok(())
    }
}

impl Sanitizable for ContactMessage {
    fn sanitize(&mut self) {
        self.name = RequestValidator::sanitize_string(&self.name);
        self.email = RequestValidator::sanitize_string(&self.email);
        self.message = RequestValidator::sanitize_string(&self.message);
        for field in [
            &mut self.subject,
            &mut self.project_type,
            &mut self.budget,
            &mut self.timeline,
        ] {
            if let Some(value) = field.as_mut() {
                *value = RequestValidator::sanitize_string(value);
            }
        }
    }
}
