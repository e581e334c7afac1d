//! Integration tests for argcheck-validator.

mod concurrency;
mod schema_files;
mod wrapped_calls;
