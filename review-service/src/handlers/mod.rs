pub mod check;
pub mod meta;
pub mod upload;

pub use check::{check_usage, run_check};
pub use meta::{health_check, index, ping, version};
pub use upload::upload_document;
