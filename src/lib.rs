pub mod api;
pub mod cli;
pub mod config;
pub mod ddns;
pub mod error;
pub mod ip;

pub use error::{DdnsError, Result};

#[cfg(test)]
mod tests;
