//! Classification of incoming chat text.

/// What the bot should do with a text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incoming<'a> {
    Start,
    Help,
    /// Any other slash command; never forwarded.
    UnknownCommand,
    Question(&'a str),
}

/// `/start`, `/help` (optionally addressed as `/cmd@BotName`), other commands, or a question.
pub fn classify(text: &str) -> Incoming<'_> {
    let Some(command) = text.strip_prefix('/') else {
        return Incoming::Question(text);
    };

    let word = command.split_whitespace().next().unwrap_or_default();
    let name = word.split_once('@').map_or(word, |(name, _)| name);
    match name {
        "start" => Incoming::Start,
        "help" => Incoming::Help,
        _ => Incoming::UnknownCommand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(classify("Где Мона Лиза?"), Incoming::Question("Где Мона Лиза?"));
        assert_eq!(classify("a /start inside"), Incoming::Question("a /start inside"));
    }

    #[test]
    fn test_known_commands() {
        assert_eq!(classify("/start"), Incoming::Start);
        assert_eq!(classify("/start@RdfRelayBot"), Incoming::Start);
        assert_eq!(classify("/help please"), Incoming::Help);
        assert_eq!(classify("/help@RdfRelayBot"), Incoming::Help);
    }

    #[test]
    fn test_other_commands_are_not_forwarded() {
        assert_eq!(classify("/status"), Incoming::UnknownCommand);
        assert_eq!(classify("/"), Incoming::UnknownCommand);
        assert_eq!(classify("/starting"), Incoming::UnknownCommand);
    }
}
