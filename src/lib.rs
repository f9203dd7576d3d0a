pub mod config;
pub mod error;
pub mod log;
pub mod ringbuffer;

pub use config::Config;
pub use error::{Result, RingStackError};
pub use ringbuffer::RingStack;
