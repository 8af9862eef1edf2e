//! Domain Models - The vocabulary of the shelter registry
//!
//! Every name here should match how shelter staff talk about the system.

pub mod animal;
pub mod kind;
pub mod shelter;
