//! Input validation: entity names.
//!
//! Workspace-context validation lives in the application layer because it
//! inspects the filesystem through a port; the name rule here is pure.

use crate::domain::error::DomainError;

/// Minimum accepted name length, after trimming surrounding whitespace.
pub const MIN_NAME_LEN: usize = 3;

/// Files or directories whose presence marks a monorepo root.
///
/// Advisory only: `package.json` exists in any npm package directory, not
/// just roots. The check never inspects file contents.
pub const ROOT_MARKERS: [&str; 4] = ["turbo.json", "package.json", "apps", "packages"];

/// Validate an entity name before any filesystem operation.
///
/// The rule is purely about length: names of 0-2 characters (after
/// trimming) are rejected, 3 or more are accepted regardless of content.
pub fn validate_entity_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".into(),
        });
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: format!("name must be at least {MIN_NAME_LEN} characters"),
        });
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
