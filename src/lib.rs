pub mod config;
pub mod error;
pub mod graph;
pub mod io;

pub use error::{GraphError, Result};
