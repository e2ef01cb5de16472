//! Data models
//!
//! Shared between the server and API clients. Every record carries its
//! public id as `<entity>_id` and Unix-millisecond timestamps.

pub mod billing;
pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod serde_helpers;
pub mod user;

// Re-exports
pub use billing::*;
pub use dining_table::*;
pub use food::*;
pub use invoice::*;
pub use menu::*;
pub use order::*;
pub use order_item::*;
pub use user::*;
