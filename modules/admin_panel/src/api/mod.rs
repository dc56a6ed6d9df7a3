//! API layer - REST surface and the two client implementations

pub mod http;
pub mod native;
pub mod rest;
