pub mod request;

pub use request::{LogoutRequest, RefreshTokenRequest};
