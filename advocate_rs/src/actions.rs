//! Call-to-action seams.
//!
//! "Contact Me", "Work with me" and "Download Full Resume" are handed to a
//! [`PageActions`] implementation. The page ships with [`TraceActions`],
//! which only records that the button was pressed; a real contact service
//! or file endpoint plugs in by implementing the trait.

use tracing::info;

use crate::error::ActionError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageAction {
    Contact,
    DownloadResume,
}

impl PageAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PageAction::Contact => "contact",
            PageAction::DownloadResume => "download_resume",
        }
    }
}

pub trait PageActions {
    fn contact(&self) -> Result<(), ActionError>;
    fn download_resume(&self) -> Result<(), ActionError>;

    fn dispatch(&self, action: PageAction) -> Result<(), ActionError> {
        match action {
            PageAction::Contact => self.contact(),
            PageAction::DownloadResume => self.download_resume(),
        }
    }
}

/// Default actions: emit a trace event and succeed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceActions;

impl PageActions for TraceActions {
    fn contact(&self) -> Result<(), ActionError> {
        info!(action = "contact", "contact clicked");
        Ok(())
    }

    fn download_resume(&self) -> Result<(), ActionError> {
        info!(action = "download_resume", "resume download clicked");
        Ok(())
    }
}

/// Non-fatal message shown to the visitor after an action fails.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Feedback {
    pub action: PageAction,
    pub message: String,
}

impl Feedback {
    pub fn from_error(action: PageAction, err: &ActionError) -> Self {
        let message = match (action, err) {
            (PageAction::Contact, ActionError::Unavailable) => {
                "Contact is not available right now. Please try again later.".to_string()
            }
            (PageAction::DownloadResume, ActionError::Unavailable) => {
                "The resume download is not available right now.".to_string()
            }
            (_, ActionError::Rejected(reason)) => reason.clone(),
        };
        Self { action, message }
    }
}

/// Run `action` and turn any failure into visitor feedback.
pub fn run_action(actions: &(impl PageActions + ?Sized), action: PageAction) -> Option<Feedback> {
    match actions.dispatch(action) {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!(action = action.as_str(), error = %err, "page action failed");
            Some(Feedback::from_error(action, &err))
        }
    }
}
