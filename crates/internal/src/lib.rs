//! Internal utilities for the Saturnin library
//!
//! Nothing in here is part of the stable public API. The helpers are shared
//! between the block cipher and the AEAD layer.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
