//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod chat_handler;
pub mod contact_handler;
pub mod faq_handler;
pub mod preference_handler;
pub mod resume_handler;

pub use chat_handler::*;
pub use contact_handler::*;
pub use faq_handler::*;
pub use preference_handler::*;
pub use resume_handler::*;
