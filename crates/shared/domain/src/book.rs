//! Book record owned by the book service.
//!
//! Serialized in camelCase to match the sibling services' wire format.

use serde::{Deserialize, Serialize};

/// Book as exchanged with the book service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier assigned by the book service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Book title
    pub name: String,
    /// Optional synopsis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning author's email
    #[serde(default)]
    pub author_id: String,
    /// Owning author's display name
    #[serde(default)]
    pub author_name: String,
    /// Set once the book content is validated and the book is closed
    #[serde(default)]
    pub is_complete: bool,
}

impl Book {
    /// Stamp the owning author's identity onto the record.
    pub fn with_author(mut self, author_id: &str, author_name: &str) -> Self {
        self.author_id = author_id.to_string();
        self.author_name = author_name.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_wire_format_is_camel_case() {
        let book = Book {
            id: None,
            name: "Emma".to_string(),
            description: None,
            author_id: String::new(),
            author_name: String::new(),
            is_complete: false,
        }
        .with_author("jane@example.com", "Jane Austen");

        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["authorId"], "jane@example.com");
        assert_eq!(json["authorName"], "Jane Austen");
        assert_eq!(json["isComplete"], false);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_book_deserializes_with_missing_optional_fields() {
        let book: Book = serde_json::from_str(r#"{"id":"b-1","name":"Emma"}"#).unwrap();

        assert_eq!(book.id.as_deref(), Some("b-1"));
        assert!(book.author_id.is_empty());
        assert!(!book.is_complete);
    }
}
