//! Integration tests for the wizard example generator

mod cli_context;
mod failure_modes;
mod test_utils;
