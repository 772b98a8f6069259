//! Look up EC2 instances by tag and store their public dns names to files.

pub mod app;
pub mod aws_config;
pub mod config;
pub mod ec2;
pub mod error;
pub mod output;

pub use app::App;
pub use error::{Error, Result};
