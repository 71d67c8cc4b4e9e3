use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social-style contact handle used only as a contact key, never authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(String);

impl Handle {
    /// A handle is accepted only if it is non-empty and starts with `@`.
    pub fn parse(raw: &str) -> Result<Self, HandleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(HandleError::Empty);
        }
        if !trimmed.starts_with('@') {
            return Err(HandleError::MissingPrefix {
                handle: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handle validation failure, surfaced to the caller before any document is
/// generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("handle must not be empty")]
    Empty,
    #[error("handle '{handle}' must start with @")]
    MissingPrefix { handle: String },
}

/// Identifier isolating one visitor session's contact records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Fallback session for callers that do not name one.
    pub fn local() -> Self {
        Self("local".to_string())
    }
}

/// Session-scoped contact entry; overwritten on resubmission, never durable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub handle: Handle,
    pub score: u8,
    pub recommendations: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Storage abstraction over the in-memory session maps so the service can be
/// exercised in isolation. Implementations must keep sessions isolated from
/// each other and apply last-write-wins per handle within a session.
pub trait SessionDirectory: Send + Sync {
    fn upsert(
        &self,
        session: &SessionId,
        record: ContactRecord,
    ) -> Result<ContactRecord, DirectoryError>;
    fn fetch(
        &self,
        session: &SessionId,
        handle: &Handle,
    ) -> Result<Option<ContactRecord>, DirectoryError>;
}

/// Error enumeration for directory adapters.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("session directory unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_prefixed_handles() {
        let handle = Handle::parse("@johndoe").expect("valid handle");
        assert_eq!(handle.as_str(), "@johndoe");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let handle = Handle::parse("  @johndoe ").expect("valid handle");
        assert_eq!(handle.as_str(), "@johndoe");
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        assert_eq!(
            Handle::parse("johndoe"),
            Err(HandleError::MissingPrefix {
                handle: "johndoe".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Handle::parse("   "), Err(HandleError::Empty));
    }
}
