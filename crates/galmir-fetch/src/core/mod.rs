//! Pure decisions for fetching: how a status is treated and when to retry.

mod retry;
mod validation;

pub use retry::RetryPolicy;
pub use validation::{StatusClass, classify_status};
