//! Note identifier generation.
//!
//! Ids are random v4 UUIDs rendered in lowercase hyphenated form, the same
//! shape the service has always handed out. Generation never looks at the
//! current collection, so `create` does not pay for a scan to find a free id.

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}
