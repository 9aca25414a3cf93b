use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Register and get a welcome message")]
    Start,
    #[command(description = "Show help sections")]
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_NAME: &str = "welcome_bot";

    #[test]
    fn test_parse_commands() {
        let table = [
            ("/start", Some(Command::Start)),
            ("/start@welcome_bot", Some(Command::Start)),
            ("/start@other_bot", None),
            // deep link payload is ignored
            ("/start ref123", Some(Command::Start)),
            ("/help", Some(Command::Help)),
            ("/help me", Some(Command::Help)),
            ("/unknown", None),
            ("hello", None),
        ];
        for (i, (text, expected)) in table.into_iter().enumerate() {
            assert_eq!(Command::parse(text, BOT_NAME).ok(), expected, "test table[{i}]");
        }
    }

    #[test]
    fn test_bot_commands() {
        let descriptions: Vec<_> = Command::bot_commands()
            .into_iter()
            .map(|c| c.description)
            .collect();
        assert_eq!(
            descriptions,
            ["Register and get a welcome message", "Show help sections"]
        );
    }
}
