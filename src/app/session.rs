//! Login gate. There is no real authentication; submitting a valid name
//! waits a moment and opens the dashboard, logout returns here.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::app::events::AppEvent;

pub const MIN_NAME_CHARS: usize = 2;
const SUBMIT_DELAY_MS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("name is required")]
    NameRequired,
    #[error("name is too short")]
    NameTooShort,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub name: String,
    pub error: Option<LoginError>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn reset(&mut self) {
        self.name.clear();
        self.error = None;
        self.submitting = false;
    }

    /// Validates the name field: required, minimum length counted in
    /// characters so Persian names are measured correctly.
    pub fn validate(&self) -> Result<(), LoginError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(LoginError::NameRequired);
        }
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(LoginError::NameTooShort);
        }
        Ok(())
    }
}

/// Simulated submit latency before the session opens.
pub fn spawn_login_delay(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;
        let _ = tx.send(AppEvent::LoginCompleted).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_required_error() {
        let form = LoginForm {
            name: "   ".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.validate(), Err(LoginError::NameRequired));
    }

    #[test]
    fn single_character_name_is_too_short() {
        let form = LoginForm {
            name: "a".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.validate(), Err(LoginError::NameTooShort));
    }

    #[test]
    fn persian_name_length_counted_in_chars() {
        let form = LoginForm {
            name: "آرش".to_string(),
            ..LoginForm::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = LoginForm {
            name: "someone".to_string(),
            error: Some(LoginError::NameTooShort),
            submitting: true,
        };
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.error.is_none());
        assert!(!form.submitting);
    }
}
