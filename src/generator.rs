//! Short id generation
//!
//! Ids are the first [`SHORT_ID_LEN`] characters of a random UUID v4. The
//! hyphenated form only has its first hyphen at index 8, so every id is six
//! lowercase hex digits: 16^6 = 16,777,216 possible values. By the birthday
//! bound a collision becomes more likely than not after about 4,800 ids.
//! Collisions are not detected; the later write replaces the earlier mapping.

use uuid::Uuid;

/// Length of every generated short id
pub const SHORT_ID_LEN: usize = 6;

/// Source of fresh short ids.
///
/// Implementations are pure: they never consult the store.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Truncated UUID v4 generator
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SHORT_ID_LEN);
        id
    }
}
