pub mod body_limit;
pub mod catch_panic;
pub mod latency;
pub mod request_id;
