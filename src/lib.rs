#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod app;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod filter;
pub mod handler;
pub mod healthcheck;
pub mod port;
pub mod transformer;

#[cfg(test)]
mod test_support;

pub use dispatcher::EventDispatcher;
pub use domain::EventRecord;
pub use error::EventError;
pub use filter::EventFilter;
pub use healthcheck::{healthcheck, healthcheck_with_port};
pub use port::EventHandler;
pub use transformer::EventTransformer;
