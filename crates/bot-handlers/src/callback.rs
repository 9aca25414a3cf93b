use crate::{FLAG_SEP, HELP_FLAG};

/// Parsed payload of pressed inline button
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HelpCallback {
    /// Requested help section, not validated
    Section(String),
    Malformed,
}

impl HelpCallback {
    pub(crate) fn section<S: AsRef<str>>(name: S) -> String {
        format!("{HELP_FLAG}{FLAG_SEP}{}", name.as_ref())
    }
}

impl From<&str> for HelpCallback {
    fn from(value: &str) -> Self {
        match value.split_once(FLAG_SEP) {
            // section is everything after the first separator
            Some((HELP_FLAG, section)) => Self::Section(section.to_string()),
            Some(_) | None => Self::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use HelpCallback::*;

    #[test]
    fn test_parse_help_callback() {
        let section = |s: &str| Section(s.to_string());
        let table = [
            ("help_general", section("general")),
            ("help_commands", section("commands")),
            ("help_faq", section("faq")),
            ("help_xyz", section("xyz")),
            ("help_with_underscores", section("with_underscores")),
            ("help_", section("")),
            ("help", Malformed),
            ("", Malformed),
            ("notify_general", Malformed),
            ("_general", Malformed),
        ];
        for (i, (input, expected)) in table.into_iter().enumerate() {
            assert_eq!(HelpCallback::from(input), expected, "test table[{i}]: {input}");
        }
    }

    #[test]
    fn test_make_section_payload() {
        assert_eq!(HelpCallback::section("faq"), "help_faq");
        assert_eq!(
            HelpCallback::from(HelpCallback::section("general").as_str()),
            Section("general".to_string())
        );
    }
}
