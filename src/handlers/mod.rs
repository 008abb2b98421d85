//! HTTP request handlers.

pub mod admins;
pub mod extract;
pub mod http;
pub mod voters;
pub mod votes;

pub use admins::*;
pub use http::*;
pub use voters::*;
pub use votes::*;
