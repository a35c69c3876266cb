//! Argument rules shared by both builders

pub mod validation;
