//! Text input and output for Packer.
//!
//! - [`reader`] turns lines such as `8 : (1,15.3,€34)` into tasks
//! - [`writer`] renders packages, one line each, as comma-joined indices or `-`

pub mod reader;
pub mod writer;

pub use reader::{parse_task, TaskReader};
pub use writer::{format_package, render_packages, PackageWriter};
