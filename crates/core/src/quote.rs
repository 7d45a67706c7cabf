use serde::{Deserialize, Serialize};

/// A persisted quote with its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique, monotonically assigned by the storage engine.
    pub id: i64,
    pub quote: String,
    pub author: Option<String>,
}

/// Insert payload for a new quote, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub quote: String,
    pub author: Option<String>,
}

impl NewQuote {
    /// Creates a new quote payload.
    pub fn new(quote: impl Into<String>, author: Option<String>) -> Self {
        Self {
            quote: quote.into(),
            author,
        }
    }

    /// Attaches a storage-assigned id, producing the persisted form.
    pub fn with_id(self, id: i64) -> Quote {
        Quote {
            id,
            quote: self.quote,
            author: self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serializes_author_as_null_when_absent() {
        let quote = Quote {
            id: 1,
            quote: "Cogito, ergo sum".to_string(),
            author: None,
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["quote"], "Cogito, ergo sum");
        assert!(json["author"].is_null());
    }

    #[test]
    fn test_with_id_preserves_fields() {
        let new = NewQuote::new("Know thyself", Some("Socrates".to_string()));
        let quote = new.with_id(42);

        assert_eq!(quote.id, 42);
        assert_eq!(quote.quote, "Know thyself");
        assert_eq!(quote.author.as_deref(), Some("Socrates"));
    }
}
