pub mod config;
pub mod dtos;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod review;
pub mod startup;
