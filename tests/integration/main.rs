//! Integration test harness.

mod cli_test;
mod ext_test;
mod markup_test;
