mod env;
mod logging;
mod task;
mod test_logger;
pub mod types;

pub use env::*;
pub use logging::*;
pub use task::*;
pub use test_logger::*;
