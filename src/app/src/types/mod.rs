//! Domain-based type organization
//!
//! - directory: Department and student records as delivered by the backend
//! - error: User-facing load failures
//! - view: View model handed to the shells

pub mod directory;
pub mod error;
pub mod view;

pub use directory::*;
pub use error::*;
pub use view::*;
