//! UI Screen State
//!
//! The explicit screen machine: which top-level view is on display and the
//! data it carries. Transitions are plain constructors so the flow stays
//! testable without a DOM.

use crate::models::User;

/// Top-level UI states
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Startup: the stored token is being validated
    Validating,
    /// Login form, optionally pre-filled with an email
    Login { prefill: Option<String> },
    /// Account creation form
    Registration,
    /// Post-registration greeting for the created user
    Welcome { user: User },
    /// The authenticated todo board
    Board,
}

impl Screen {
    /// Where startup validation lands: the board for a live session,
    /// otherwise a blank login form.
    pub fn after_validation(valid: bool) -> Self {
        if valid {
            Screen::Board
        } else {
            Screen::login()
        }
    }

    /// A blank login form.
    pub fn login() -> Self {
        Screen::Login { prefill: None }
    }

    /// Where logout lands: a blank login form, whatever was on display.
    pub fn after_logout() -> Self {
        Screen::login()
    }

    /// Login form pre-filled with the email of a just-created account.
    pub fn login_as(user: &User) -> Self {
        Screen::Login {
            prefill: Some(user.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_session_lands_on_board() {
        assert_eq!(Screen::after_validation(true), Screen::Board);
    }

    #[test]
    fn test_rejected_session_lands_on_blank_login() {
        assert_eq!(
            Screen::after_validation(false),
            Screen::Login { prefill: None }
        );
    }

    #[test]
    fn test_logout_routes_to_a_blank_login() {
        // Even a session that was just validated onto the board ends up on
        // the login form, with nothing pre-filled.
        assert_eq!(Screen::after_logout(), Screen::Login { prefill: None });
    }

    #[test]
    fn test_welcome_routes_back_with_the_new_email() {
        let user = User {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert_eq!(
            Screen::login_as(&user),
            Screen::Login {
                prefill: Some("ada@example.com".to_string())
            }
        );
    }
}
