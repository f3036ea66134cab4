//! Settings Resolution Tests

mod load_tests;
mod provider_tests;
