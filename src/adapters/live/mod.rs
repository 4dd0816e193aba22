//! Live adapters that talk to real HTTP endpoints.

pub mod http;
pub mod openai;
