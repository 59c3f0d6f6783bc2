use crate::faq::FaqResponder;
use crate::observability::AppMetrics;
use crate::services::chat::ChatService;
use crate::services::contact::ContactService;
use crate::services::preference::PreferenceStore;
use crate::services::resume::ResumeService;
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Chat pipeline (FAQ, showcase, remote backend)
    pub chat_service: Arc<dyn ChatService>,
    /// FAQ responder used directly by the `/faq` routes
    pub faq: Arc<FaqResponder>,
    /// Per-client screen preferences
    pub preference_store: Arc<dyn PreferenceStore>,
    /// Resume PDF delivery
    pub resume_service: Arc<ResumeService>,
    /// Contact form relay
    pub contact_service: Arc<dyn ContactService>,
    /// Request and chat counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chat_service", &"Arc<dyn ChatService>")
            .field("faq_entries", &self.faq.corpus().len())
            .field("preference_store", &"Arc<dyn PreferenceStore>")
            .field("resume_service", &self.resume_service)
            .field("contact_service", &"Arc<dyn ContactService>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        chat_service: Box<dyn ChatService>,
        faq: Arc<FaqResponder>,
        preference_store: Box<dyn PreferenceStore>,
        resume_service: ResumeService,
        contact_service: Box<dyn ContactService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            chat_service: Arc::from(chat_service),
            faq,
            preference_store: Arc::from(preference_store),
            resume_service: Arc::new(resume_service),
            contact_service: Arc::from(contact_service),
            metrics,
        }
    }
}
