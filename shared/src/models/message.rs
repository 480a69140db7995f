use crate::{Result, SharedError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Message {
    pub id: String,

    pub sender_id: String,

    #[validate(length(min = 1, max = 2000, message = "Message cannot be empty"))]
    pub body: String,

    pub sent_at: DateTime<Utc>,
}

/// A two-party conversation, stored wholesale with its messages inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,

    /// User ids of both parties, order not significant.
    pub participants: [String; 2],

    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn involves(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// The other party's id, from `user_id`'s point of view.
    pub fn counterpart(&self, user_id: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| p.as_str() != user_id)
            .map(|p| p.as_str())
    }

    /// Appends a validated message. Messages are append-only; there is no
    /// edit or delete.
    pub fn push_message(&mut self, message: Message) -> Result<()> {
        message
            .validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        if !self.involves(&message.sender_id) {
            return Err(SharedError::Unauthorized(format!(
                "user {} is not part of conversation {}",
                message.sender_id, self.id
            )));
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn create_test_conversation() -> Conversation {
        Conversation {
            id: "conv-1".to_string(),
            participants: ["user-1".to_string(), "user-2".to_string()],
            messages: Vec::new(),
        }
    }

    fn message(sender: &str, body: &str) -> Message {
        Message {
            id: "msg-1".to_string(),
            sender_id: sender.to_string(),
            body: body.to_string(),
            sent_at: "2024-01-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_push_message_appends() {
        let mut conv = create_test_conversation();
        conv.push_message(message("user-1", "Ola!")).unwrap();
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.last_message().unwrap().body, "Ola!");
    }

    #[test]
    fn test_push_message_rejects_outsider() {
        let mut conv = create_test_conversation();
        let result = conv.push_message(message("user-9", "hi"));
        assert!(matches!(result, Err(SharedError::Unauthorized(_))));
        assert!(conv.messages.is_empty());
    }

    #[test]
    fn test_push_message_rejects_empty_body() {
        let mut conv = create_test_conversation();
        assert!(conv.push_message(message("user-1", "")).is_err());
    }

    #[test]
    fn test_counterpart() {
        let conv = create_test_conversation();
        assert_eq!(conv.counterpart("user-1"), Some("user-2"));
        assert_eq!(conv.counterpart("user-2"), Some("user-1"));
        assert!(conv.involves("user-1"));
        assert!(!conv.involves("user-9"));
    }
}
