//! Fixed console text of the chat session.

use crate::settings::{API_KEY_SETTING, DEFAULT_MODEL};

/// Prompt shown before each line of input.
pub const USER_LABEL: &str = "User > ";

/// Label printed in front of every response.
pub const ASSISTANT_LABEL: &str = "Gemini > ";

pub const TURN_ERROR_PREFIX: &str = "Error during API call:";

pub const TURN_ERROR_HINT: &str = "Please ensure your 'Gemini:ApiKey' is correct and valid.";

pub const FAREWELL: &str = "Exiting application.";

pub const READY: &str = "Gemini Console App Ready. Type 'exit' to quit.";

/// Command users run to store the API key in the per-user secret store.
pub const SET_KEY_COMMAND: &str = "gemterm secrets set \"Gemini:ApiKey\" \"YOUR_ACTUAL_API_KEY\"";

/// The error line for a failed turn.
pub fn turn_error_line(message: &str) -> String {
    format!("{TURN_ERROR_PREFIX} {message}")
}

/// Line printed before the client is constructed.
pub fn initializing_line() -> String {
    format!("Initializing chat client with Google Gemini ({DEFAULT_MODEL})...")
}

/// The three-line diagnostic printed when the API key is missing.
pub fn missing_credential_lines() -> [String; 3] {
    [
        format!("--- ERROR: The '{API_KEY_SETTING}' secret was not found. ---"),
        "ACTION REQUIRED: Please set the key using the following command:".to_string(),
        format!("   {SET_KEY_COMMAND}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_lines_verbatim() {
        assert_eq!(
            missing_credential_lines(),
            [
                "--- ERROR: The 'Gemini:ApiKey' secret was not found. ---".to_string(),
                "ACTION REQUIRED: Please set the key using the following command:".to_string(),
                "   gemterm secrets set \"Gemini:ApiKey\" \"YOUR_ACTUAL_API_KEY\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_turn_error_line() {
        assert_eq!(
            turn_error_line("authentication failed: API key not valid"),
            "Error during API call: authentication failed: API key not valid"
        );
    }

    #[test]
    fn test_hint_and_command_name_the_setting() {
        assert!(TURN_ERROR_HINT.contains(API_KEY_SETTING));
        assert!(SET_KEY_COMMAND.contains(API_KEY_SETTING));
    }

    #[test]
    fn test_initializing_line_names_model() {
        assert!(initializing_line().contains("gemini-2.5-flash"));
    }
}
