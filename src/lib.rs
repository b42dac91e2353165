pub mod check;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod git;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{BumpError, Result};
