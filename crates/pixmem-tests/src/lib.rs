//! Integration tests for pixmem crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between pixel iteration, pixel access and color conversion.
