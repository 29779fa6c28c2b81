pub mod env;
pub mod error;
pub mod logger;

pub use env::{Environment, init_defaults};
pub use error::{GlobalError, Result};
