pub mod catalog;
pub mod config;
pub mod export;
pub mod projection;

pub mod error;
