#![doc = include_str!("../README.md")]

pub mod client;
mod error;

pub use client::{ApiConfiguration, Client, ClientSettings};
pub use error::{ApiError, MissingFieldError};
