//! Tagged record identifiers.
//!
//! Ids are minted as `<tag>-<uuid>` with a UUIDv7 tail: the tag keeps them
//! greppable in logs ("post-…", "conv-…"), the v7 tail keeps them unique
//! under concurrent creation and roughly time-ordered.

use uuid::Uuid;

/// New account id.
pub fn user() -> String {
    tagged("user")
}

/// New listing id.
pub fn post() -> String {
    tagged("post")
}

/// New conversation id.
pub fn conversation() -> String {
    tagged("conv")
}

/// New message id.
pub fn message() -> String {
    tagged("msg")
}

fn tagged(tag: &str) -> String {
    format!("{tag}-{}", Uuid::now_v7().simple())
}
