//! 数据模型模块
//!
//! 对话消息、屏幕偏好、联系表单与简历文件。

pub mod contact;
pub mod conversation;
pub mod preference;
pub mod resume;

pub use contact::{ContactMessage, ContactRelayBody};
pub use conversation::{ConversationMessage, Role};
pub use preference::{FontSize, Layout, ScreenPreferences, Toggle};
pub use resume::{ResumeFile, ResumeKind};
