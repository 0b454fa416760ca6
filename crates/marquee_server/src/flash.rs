//! Flash notification payloads.
//!
//! The data contract behind the directory's banner messages: the
//! rendering collaborator shows `message` styled by `category`.

use serde::Serialize;

/// Notification category, driving banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    /// The submitted action went through
    Success,
    /// The submitted action failed
    Error,
}

/// A one-shot notification attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    /// Banner styling category
    pub category: FlashCategory,
    /// Text shown to the user
    pub message: String,
}

impl Flash {
    /// A success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    /// An error banner.
    ///
    /// Persistence failures use a generic message here; the underlying
    /// cause goes to the log, never to the client.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_serializes_with_lowercase_category() {
        let flash = Flash::success("Venue The Musical Hop was successfully listed!");
        let json = serde_json::to_value(&flash).unwrap();
        assert_eq!(json["category"], "success");
        assert_eq!(
            json["message"],
            "Venue The Musical Hop was successfully listed!"
        );
    }
}
