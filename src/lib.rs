pub use crate::errors::{
    print_error, to_source_span, unspanned, ErrorCategory, ErrorKind, ErrorReporting,
    MastheadError, SourceContext, ValidationContext,
};
pub use crate::rules::{is_valid_email_shape, is_valid_name};

pub mod cli;
pub mod errors;
pub mod filter;
pub mod headline;
pub mod rules;
