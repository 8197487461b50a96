//! # IO Module
//!
//! Outer surface of the backend: the command-line driver and the mappers
//! between the `shared` DTOs and domain types.

pub mod cli;
pub mod mappers;
