//! Texts, which bot sends to users

pub(crate) const START_ERROR: &str = "An error occurred while processing your request.";

pub(crate) const HELP_MENU: &str = "Select help section:";
pub(crate) const HELP_GENERAL: &str = "
📚 <b>General Help</b>
Basic bot usage information...
";
pub(crate) const HELP_FAQ: &str = "
❓ <b>Frequently Asked Questions</b>
Q: Question 1?
A: Answer 1
";
pub(crate) const SECTION_NOT_FOUND: &str = "Section not found";
pub(crate) const NO_COMMANDS: &str = "No commands available.";
pub(crate) const CALLBACK_FAILED: &str = "Something went wrong, try /help again.";

pub(crate) const UNKNOWN_MESSAGE: &str =
    "Sorry, I didn't understand that command. Try /help for assistance.";

/// `first_name` should be already escaped
pub(crate) fn welcome_new(first_name: &str) -> String {
    format!("Welcome {first_name}! Your data has been stored.")
}

/// `first_name` should be already escaped
pub(crate) fn welcome_back(first_name: &str) -> String {
    format!("Welcome back {first_name}! You're already registered.")
}
