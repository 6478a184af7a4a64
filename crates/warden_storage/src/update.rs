//! Document update operations.

use serde_json::{Map, Value};
use warden_error::{StorageError, StorageErrorKind, StorageResult};

/// A stored document.
pub type Document = Map<String, Value>;

/// Field-level update applied atomically to one document.
///
/// # Examples
///
/// ```
/// use warden_storage::{Document, DocumentUpdate};
///
/// let update = DocumentUpdate::new()
///     .set("user_id", 7)
///     .add_to_set("channels", -100)
///     .set_on_insert("created_at", "2024-01-01T00:00:00Z");
///
/// let mut doc = Document::new();
/// update.apply(&mut doc, true).unwrap();
/// update.apply(&mut doc, false).unwrap();
/// assert_eq!(doc["channels"].as_array().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpdate {
    set: Document,
    set_on_insert: Document,
    add_to_set: Vec<(String, Value)>,
}

impl DocumentUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set.insert(field.into(), value.into());
        self
    }

    /// Write a field only when the document is created by this update.
    pub fn set_on_insert(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_on_insert.insert(field.into(), value.into());
        self
    }

    /// Append to an array field unless the value is already present.
    pub fn add_to_set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_to_set.push((field.into(), value.into()));
        self
    }

    /// Apply the update to a document.
    ///
    /// `inserted` tells whether the document is being created.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if an `add_to_set` field holds something other than
    /// an array.
    pub fn apply(&self, document: &mut Document, inserted: bool) -> StorageResult<()> {
        for (field, value) in &self.set {
            document.insert(field.clone(), value.clone());
        }
        if inserted {
            for (field, value) in &self.set_on_insert {
                document
                    .entry(field.clone())
                    .or_insert_with(|| value.clone());
            }
        }
        for (field, value) in &self.add_to_set {
            let entry = document
                .entry(field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            let Value::Array(items) = entry else {
                return Err(StorageError::new(StorageErrorKind::Conflict(field.clone())));
            };
            if !items.contains(value) {
                items.push(value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_overwrites() {
        let mut doc = Document::new();
        DocumentUpdate::new().set("reason", "r1").apply(&mut doc, true).unwrap();
        DocumentUpdate::new().set("reason", "r2").apply(&mut doc, false).unwrap();
        assert_eq!(doc["reason"], json!("r2"));
    }

    #[test]
    fn test_set_on_insert_only_on_insert() {
        let mut doc = Document::new();
        DocumentUpdate::new()
            .set_on_insert("created_at", "first")
            .apply(&mut doc, true)
            .unwrap();
        DocumentUpdate::new()
            .set_on_insert("created_at", "second")
            .apply(&mut doc, false)
            .unwrap();
        assert_eq!(doc["created_at"], json!("first"));
    }

    #[test]
    fn test_add_to_set_conflict() {
        let mut doc = Document::new();
        doc.insert("channels".to_string(), json!("not an array"));
        let result = DocumentUpdate::new()
            .add_to_set("channels", 1)
            .apply(&mut doc, false);
        assert!(matches!(
            result.unwrap_err().kind,
            StorageErrorKind::Conflict(_)
        ));
    }
}
