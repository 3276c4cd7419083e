//! User Notifications
//!
//! Blocking browser alerts and the submission status they report.

use leptos::prelude::window;

/// Progress of a search submission
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    /// Short name used for the form's `data-status` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Pending => "pending",
            SubmitStatus::Succeeded => "succeeded",
            SubmitStatus::Failed(_) => "failed",
        }
    }

    /// Alert text for a finished submission
    pub fn alert_message(&self) -> Option<String> {
        match self {
            SubmitStatus::Succeeded => Some("搜尋成功！".to_string()),
            SubmitStatus::Failed(msg) => Some(format!("發生錯誤：{}", msg)),
            SubmitStatus::Idle | SubmitStatus::Pending => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<&Result<T, E>> for SubmitStatus {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => SubmitStatus::Succeeded,
            Err(e) => SubmitStatus::Failed(e.to_string()),
        }
    }
}

/// Status of the newest submission in a form.
///
/// Submissions may overlap; a reply only updates `status` when it belongs
/// to the most recent submission, so a stale reply cannot mark a pending
/// search as finished.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submissions {
    latest: u32,
    status: SubmitStatus,
}

impl Submissions {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Start a submission and return its id
    pub fn begin(&mut self) -> u32 {
        self.latest += 1;
        self.status = SubmitStatus::Pending;
        self.latest
    }

    /// Record the reply for submission `id` and return its own outcome
    pub fn finish<T, E: std::fmt::Display>(&mut self, id: u32, result: &Result<T, E>) -> SubmitStatus {
        let outcome = SubmitStatus::from(result);
        if id == self.latest {
            self.status = outcome.clone();
        }
        outcome
    }
}

/// Show a modal alert, blocking until dismissed
pub fn blocking_alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        web_sys::console::error_2(&"[ALERT] Failed to show alert:".into(), &e);
    }
}
