//! Core domain types and the outbound gateway trait.

pub mod entities;
pub mod gateway;
