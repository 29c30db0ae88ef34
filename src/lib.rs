pub mod config;
pub mod dns;
pub mod error;
pub mod resolver;
pub mod robots;

pub use config::ResolverConfig;
pub use error::{ArgusError, ResolverError, RobotsError, Result};
pub use resolver::{AsyncResolver, Response};
pub use robots::Evaluator;
