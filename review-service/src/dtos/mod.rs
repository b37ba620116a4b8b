pub mod check;
pub mod upload;

pub use check::{CheckRequest, CheckResponse, ReviewResult};
pub use upload::UploadResponse;
