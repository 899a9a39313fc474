//! Response validation.
//!
//! - [`keywords::KeywordSet`]: the expected-topic keywords for one caller
//! - [`response::validate_response`]: the pure acceptance check

pub mod keywords;
pub mod response;
