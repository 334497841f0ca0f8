pub use submission::{error_chain_fmt, json_error_handler, preflight, SubmissionError};

pub mod contact;
pub mod health_check;
pub mod quote_request;
pub mod submission;
