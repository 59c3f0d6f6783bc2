//! Folio - 作品集网站后端
//!
//! 以静态问答表为核心的规则式聊天应答，外加屏幕偏好、简历下载和
//! 联系表单等站点接口。

pub mod api;
pub mod config;
pub mod error;
pub mod faq;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
