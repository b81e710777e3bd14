//! Interface layer - inbound adapters

pub mod http;
