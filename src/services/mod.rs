//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits for
//! dependency inversion, so every service is testable with mocks.

mod post_service;
mod user_service;

pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};
