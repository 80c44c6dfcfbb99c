//! Form models and the submit operations behind each panel.
//!
//! A submit runs synchronously to completion: input check, optional spelling
//! step, the main call, then rendering. The outcome is a `Submission` the
//! panel stores as-is.

use crate::api_client::{ApiClient, ApiClientError};
use crate::notifications::Notification;
use crate::pipeline;
use crate::render::{self, RenderedResults};
use crate::types::{Language, OrganizationRequest, SearchRequest, MAX_RESULT_SIZE, MIN_RESULT_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter a {field}.")]
    EmptyInput { field: &'static str },
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

/// What a panel shows below its form.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelStatus {
    Idle,
    /// Input rejected before any request was sent.
    Warning(String),
    Failed(String),
    Results(RenderedResults),
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub notices: Vec<Notification>,
    pub status: PanelStatus,
}

impl Submission {
    fn rejected(err: SubmitError) -> Self {
        let message = err.to_string();
        Self {
            notices: vec![Notification::warning(message.clone())],
            status: PanelStatus::Warning(message),
        }
    }

    fn failed(mut notices: Vec<Notification>, err: &ApiClientError) -> Self {
        let message = failure_message(err);
        notices.push(Notification::error(message.clone()));
        Self {
            notices,
            status: PanelStatus::Failed(message),
        }
    }

    fn succeeded(mut notices: Vec<Notification>, rendered: RenderedResults) -> Self {
        notices.push(Notification::success(rendered.summary.clone()));
        Self {
            notices,
            status: PanelStatus::Results(rendered),
        }
    }
}

pub fn failure_message(err: &ApiClientError) -> String {
    match err {
        ApiClientError::Timeout => "Request timed out. Please try again.".to_string(),
        other => format!("Request failed: {}", other),
    }
}

fn clamp_size(size: u8) -> u8 {
    size.clamp(MIN_RESULT_SIZE, MAX_RESULT_SIZE)
}

// ============================================================================
// Search form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub size: u8,
    /// Alpha in tenths, 0..=10.
    pub alpha_tenths: u8,
    pub use_vector: bool,
    pub use_spelling: bool,
}

impl SearchForm {
    pub fn new(size: u8, alpha: f64) -> Self {
        let alpha_tenths = (alpha.clamp(0.0, 1.0) * 10.0).round() as u8;
        Self {
            query: String::new(),
            size: clamp_size(size),
            alpha_tenths,
            use_vector: true,
            use_spelling: false,
        }
    }

    pub fn alpha(&self) -> f64 {
        f64::from(self.alpha_tenths) / 10.0
    }

    pub fn increase_size(&mut self) {
        self.size = clamp_size(self.size.saturating_add(1));
    }

    pub fn decrease_size(&mut self) {
        self.size = clamp_size(self.size.saturating_sub(1));
    }

    pub fn increase_alpha(&mut self) {
        self.alpha_tenths = (self.alpha_tenths + 1).min(10);
    }

    pub fn decrease_alpha(&mut self) {
        self.alpha_tenths = self.alpha_tenths.saturating_sub(1);
    }

    pub fn to_request(&self, language: Language) -> Result<SearchRequest, SubmitError> {
        if self.query.trim().is_empty() {
            return Err(SubmitError::EmptyInput { field: "query" });
        }
        Ok(SearchRequest {
            query: self.query.clone(),
            size: clamp_size(self.size),
            alpha: self.alpha(),
            use_vector: self.use_vector,
            language,
            use_spelling: self.use_spelling,
        })
    }
}

pub async fn submit_search(api: &ApiClient, form: &SearchForm, language: Language) -> Submission {
    let request = match form.to_request(language) {
        Ok(request) => request,
        Err(err) => return Submission::rejected(err),
    };

    let mut notices = Vec::new();
    let resolved = pipeline::resolve_query(api, &request.query, request.use_spelling).await;
    if let Some(note) = resolved.correction_note {
        notices.push(Notification::info(note));
    }
    if let Some(warning) = resolved.warning {
        notices.push(Notification::warning(warning));
    }
    let request = SearchRequest {
        query: resolved.final_query,
        ..request
    };

    match api.search(&request).await {
        Ok(response) => Submission::succeeded(notices, render::render_search(&response, language)),
        Err(err) => {
            tracing::warn!(error = %err, language = %language, "search failed");
            Submission::failed(notices, &err)
        }
    }
}

// ============================================================================
// Organization form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationForm {
    pub search_term: String,
    pub size: u8,
}

impl OrganizationForm {
    pub fn new(size: u8) -> Self {
        Self {
            search_term: String::new(),
            size: clamp_size(size),
        }
    }

    pub fn increase_size(&mut self) {
        self.size = clamp_size(self.size.saturating_add(1));
    }

    pub fn decrease_size(&mut self) {
        self.size = clamp_size(self.size.saturating_sub(1));
    }

    pub fn to_request(&self) -> Result<OrganizationRequest, SubmitError> {
        if self.search_term.trim().is_empty() {
            return Err(SubmitError::EmptyInput {
                field: "search term",
            });
        }
        Ok(OrganizationRequest::new(
            self.search_term.clone(),
            clamp_size(self.size),
        ))
    }
}

pub async fn submit_organizations(api: &ApiClient, form: &OrganizationForm) -> Submission {
    let request = match form.to_request() {
        Ok(request) => request,
        Err(err) => return Submission::rejected(err),
    };
    match api.search_organizations(&request).await {
        Ok(result) => Submission::succeeded(Vec::new(), render::render_organizations(&result)),
        Err(err) => {
            tracing::warn!(error = %err, "organization search failed");
            Submission::failed(Vec::new(), &err)
        }
    }
}

// ============================================================================
// Health check
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Unchecked,
    Reachable { payload: String },
    Unhealthy { message: String },
}

pub async fn check_health(api: &ApiClient) -> HealthStatus {
    match api.check_health().await {
        Ok(payload) => HealthStatus::Reachable {
            payload: serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string()),
        },
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            HealthStatus::Unhealthy {
                message: health_failure_message(&err),
            }
        }
    }
}

pub fn health_failure_message(err: &ApiClientError) -> String {
    match err {
        ApiClientError::Http { status, .. } => format!("API returned status: {}", status),
        ApiClientError::Decode(reason) => format!("Unreadable health payload: {}", reason),
        other => format!("Cannot connect to API: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_rejected_before_dispatch() {
        let mut form = SearchForm::new(10, 0.5);
        form.query = "   ".to_string();
        let err = form.to_request(Language::Az).unwrap_err();
        assert!(matches!(err, SubmitError::EmptyInput { field: "query" }));
        assert_eq!(err.to_string(), "Please enter a query.");
    }

    #[test]
    fn blank_term_is_rejected_before_dispatch() {
        let form = OrganizationForm::new(10);
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "Please enter a search term."
        );
    }

    #[test]
    fn size_stays_within_bounds() {
        let mut form = SearchForm::new(50, 0.5);
        form.increase_size();
        assert_eq!(form.size, MAX_RESULT_SIZE);
        let mut form = SearchForm::new(1, 0.5);
        form.decrease_size();
        assert_eq!(form.size, MIN_RESULT_SIZE);
        assert_eq!(SearchForm::new(0, 0.5).size, MIN_RESULT_SIZE);
    }

    #[test]
    fn alpha_moves_in_tenths() {
        let mut form = SearchForm::new(10, 0.5);
        form.increase_alpha();
        assert_eq!(form.alpha(), 0.6);
        for _ in 0..20 {
            form.increase_alpha();
        }
        assert_eq!(form.alpha(), 1.0);
        for _ in 0..20 {
            form.decrease_alpha();
        }
        assert_eq!(form.alpha(), 0.0);
    }

    #[test]
    fn request_carries_form_values() {
        let mut form = SearchForm::new(5, 0.3);
        form.query = "copper wire".to_string();
        form.use_vector = false;
        form.use_spelling = true;
        let request = form.to_request(Language::Ru).unwrap();
        assert_eq!(request.query, "copper wire");
        assert_eq!(request.size, 5);
        assert_eq!(request.alpha, 0.3);
        assert!(!request.use_vector);
        assert!(request.use_spelling);
        assert_eq!(request.language, Language::Ru);
    }

    #[test]
    fn timeout_gets_retry_hint() {
        assert_eq!(
            failure_message(&ApiClientError::Timeout),
            "Request timed out. Please try again."
        );
        assert_eq!(
            failure_message(&ApiClientError::ConnectionFailed("refused".into())),
            "Request failed: connection failed: refused"
        );
    }

    #[test]
    fn health_messages_distinguish_status_from_transport() {
        let status = ApiClientError::Http {
            status: 503,
            body: String::new(),
        };
        assert_eq!(health_failure_message(&status), "API returned status: 503");
        assert_eq!(
            health_failure_message(&ApiClientError::Timeout),
            "Cannot connect to API: request timed out."
        );
    }
}
