//! 공통 유틸리티

pub mod deadline;

pub use deadline::with_deadline;
