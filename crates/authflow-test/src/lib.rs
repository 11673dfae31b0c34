#![doc = include_str!("../README.md")]

mod api;

pub use api::start_endpoint_mock;
