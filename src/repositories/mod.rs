//! 데이터 액세스 계층

pub mod users;

pub use users::{InMemoryUserStore, UserRepository, UserStore};
