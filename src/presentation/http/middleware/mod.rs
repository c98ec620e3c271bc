// src/presentation/http/middleware/mod.rs
mod rate_limit;
mod security_headers;

pub use rate_limit::{BURST_SIZE, REQUESTS_PER_SECOND, rate_limit_layer};
pub use security_headers::{cors_layer, security_header_layers};
