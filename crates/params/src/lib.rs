//! Constant values for Saturnin cryptographic operations
//!
//! This crate holds the sizes, parameter ranges and round-constant generator
//! seeds shared by the block cipher and the Saturnin-Short AEAD.

#![no_std]

pub mod utils;
