//! Application layer - Summary use cases over the host ports

pub mod dto;
pub mod ports;
pub mod services;
