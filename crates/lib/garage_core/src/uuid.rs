//! Helper for generating UUIDv7 (timestamp-sortable UUIDs).
//!
//! Vehicle ids are generated app-side as UUIDv7 so listings sorted by id come
//! back in creation order. User ids keep PG's gen_random_uuid() (v4).

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}
