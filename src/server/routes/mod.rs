//! HTTP route modules

pub mod items;
