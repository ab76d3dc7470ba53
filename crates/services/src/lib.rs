//! # services
//!
//! Application services for Finders. Each service owns one slice of the
//! use-cases (accounts, listings, likes, conversations), talks to storage
//! exclusively through the `domains` ports, and stays transport-neutral:
//! the web layer calls these, but so could a CLI or a test harness.

pub mod auth;
pub mod chat;
pub mod likes;
pub mod posts;

pub use auth::AuthService;
pub use chat::{ChatService, ConversationWithPeer};
pub use likes::LikeService;
pub use posts::{AuthoredPost, NewPost, PostService};
