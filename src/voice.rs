#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Next,
    Previous,
    ToggleDebug,
}

/// Events as delivered by a continuously-listening speech recogniser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Partial hypothesis while the user is still speaking
    Recognizing(String),
    /// Final text of an utterance
    Recognized(String),
    NoMatch,
}

/// Keyword match; "next" wins over "back"/"previous", which win over "debug"
pub fn parse_command(text: &str) -> Option<VoiceCommand> {
    let text = text.to_lowercase();
    if text.contains("next") {
        Some(VoiceCommand::Next)
    } else if text.contains("back") || text.contains("previous") {
        Some(VoiceCommand::Previous)
    } else if text.contains("debug") {
        Some(VoiceCommand::ToggleDebug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("Next."), Some(VoiceCommand::Next));
        assert_eq!(parse_command("go back"), Some(VoiceCommand::Previous));
        assert_eq!(
            parse_command("Previous shirt please"),
            Some(VoiceCommand::Previous)
        );
        assert_eq!(parse_command("DEBUG"), Some(VoiceCommand::ToggleDebug));
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_keyword_precedence() {
        assert_eq!(
            parse_command("not back, the next one"),
            Some(VoiceCommand::Next)
        );
        assert_eq!(parse_command("debug going back"), Some(VoiceCommand::Previous));
    }

    #[test]
    fn test_keywords_inside_words_still_match() {
        // Plain substring matching, as the recogniser's punctuation varies
        assert_eq!(parse_command("backpack"), Some(VoiceCommand::Previous));
    }
}
