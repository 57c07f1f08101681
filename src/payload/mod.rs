//! Sample inbound-event payload
//!
//! A fixed messaging-event fixture POSTed at the webhook endpoint to
//! exercise its event path. The structure mirrors the platform's wire
//! format: an object type wrapping entries, each carrying change records
//! whose value holds sender metadata, contacts, and messages. The fixture
//! is static; nothing here is parsed back or generated per run.

use serde::{Deserialize, Serialize};

/// Top-level inbound messaging event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageEvent {
    /// Object type, e.g. `whatsapp_business_account`
    pub object: String,
    /// Account-level entries carrying the changes
    pub entry: Vec<Entry>,
}

/// One account entry within an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: String,
    pub changes: Vec<Change>,
}

/// A change record within an entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Change {
    /// Changed field, `messages` for inbound messages
    pub field: String,
    pub value: ChangeValue,
}

/// The value object of a change record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeValue {
    pub messaging_product: String,
    pub metadata: Metadata,
    pub contacts: Vec<Contact>,
    pub messages: Vec<InboundMessage>,
}

/// Receiving-number metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    pub display_phone_number: String,
    pub phone_number_id: String,
}

/// Sender contact record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub profile: Profile,
    pub wa_id: String,
}

/// Contact profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
}

/// A single inbound message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundMessage {
    /// Sender identifier
    #[serde(rename = "from")]
    pub sender: String,
    pub id: String,
    pub timestamp: String,
    /// Message type, `text` for the fixture
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: TextBody,
}

/// Text message body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBody {
    pub body: String,
}

impl MessageEvent {
    /// The fixed sample event: one inbound text message
    pub fn sample() -> Self {
        Self {
            object: "whatsapp_business_account".to_string(),
            entry: vec![Entry {
                id: "0".to_string(),
                changes: vec![Change {
                    field: "messages".to_string(),
                    value: ChangeValue {
                        messaging_product: "whatsapp".to_string(),
                        metadata: Metadata {
                            display_phone_number: "16505551111".to_string(),
                            phone_number_id: "123456123".to_string(),
                        },
                        contacts: vec![Contact {
                            profile: Profile {
                                name: "test user name".to_string(),
                            },
                            wa_id: "16315551181".to_string(),
                        }],
                        messages: vec![InboundMessage {
                            sender: "16315551181".to_string(),
                            id: "ABGGFlA5Fpa".to_string(),
                            timestamp: "1504902988".to_string(),
                            message_type: "text".to_string(),
                            text: TextBody {
                                body: "this is a test message".to_string(),
                            },
                        }],
                    },
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_text_body() {
        let event = MessageEvent::sample();
        assert_eq!(
            event.entry[0].changes[0].value.messages[0].text.body,
            "this is a test message"
        );
    }

    #[test]
    fn test_sample_wire_field_names() {
        let json = serde_json::to_value(MessageEvent::sample()).unwrap();
        let message = &json["entry"][0]["changes"][0]["value"]["messages"][0];

        // Serde renames must match the platform wire format
        assert_eq!(message["from"], "16315551181");
        assert_eq!(message["type"], "text");
        assert!(message.get("sender").is_none());
        assert!(message.get("message_type").is_none());
    }

    #[test]
    fn test_sample_round_trip() {
        let event = MessageEvent::sample();
        let json = serde_json::to_string(&event).unwrap();
        let parsed: MessageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_sample_shape() {
        let event = MessageEvent::sample();
        assert_eq!(event.object, "whatsapp_business_account");
        assert_eq!(event.entry.len(), 1);
        assert_eq!(event.entry[0].changes.len(), 1);

        let value = &event.entry[0].changes[0].value;
        assert_eq!(value.messaging_product, "whatsapp");
        assert_eq!(value.contacts[0].profile.name, "test user name");
        assert_eq!(value.metadata.phone_number_id, "123456123");
    }
}
