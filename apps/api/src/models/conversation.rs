use serde::Deserialize;

/// One turn of the caller-held conversation. Never stored server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

/// Flattens a conversation into `role: content` lines.
pub fn render_transcript(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: &str, content: &str) -> ConversationMessage {
        ConversationMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_transcript_keeps_order_one_line_per_message() {
        let messages = vec![
            msg("assistant", "What do you enjoy at school?"),
            msg("user", "Maths and drawing"),
        ];
        assert_eq!(
            render_transcript(&messages),
            "assistant: What do you enjoy at school?\nuser: Maths and drawing"
        );
    }

    #[test]
    fn test_empty_conversation_renders_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn test_message_requires_role_and_content() {
        let err = serde_json::from_str::<ConversationMessage>(r#"{"role": "user"}"#);
        assert!(err.is_err());
    }
}
