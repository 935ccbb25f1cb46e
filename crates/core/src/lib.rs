#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod session;
pub mod transcript;
pub mod wizard;

