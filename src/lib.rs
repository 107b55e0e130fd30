pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod range;
pub mod repos;
pub mod ui;

pub use error::{ChangelogError, Result};
