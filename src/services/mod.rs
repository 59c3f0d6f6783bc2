//! 服务模块

pub mod chat;
pub mod contact;
pub mod preference;
pub mod remote;
pub mod resume;
pub mod showcase;

pub use chat::{ChatReply, ChatRequest, ChatService, ChatServiceImpl, ChatSource, create_chat_service};
pub use contact::{ContactService, HttpContactRelay, LogContactSink, create_contact_service};
pub use preference::{MemoryPreferenceStore, PreferenceStore, create_preference_store};
pub use remote::{ChatBackend, HttpChatBackend, RemoteChatRequest, RemoteChatResponse, create_chat_backend};
pub use resume::{ResumeService, ResumeSummary};
