//! CLI command implementations

pub mod account;
pub mod context;
pub mod gamify;
pub mod init;
pub mod share;
pub mod status;
pub mod train;
pub mod workouts;
