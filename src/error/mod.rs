mod app;
mod config;
mod http;
mod notify;
mod sink;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use notify::NotifyError;
pub use sink::SinkError;
pub use validation::ValidationError;
