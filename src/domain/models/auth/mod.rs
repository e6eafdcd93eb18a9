pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, BearerToken};
pub use authentication_request::RequiredRoles;
