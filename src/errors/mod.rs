//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the compilation
//! phases. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical, syntactic and semantic phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
