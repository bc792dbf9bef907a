pub mod error;

pub use error::{ColorError, Result};
