//! Domain logic and core data structures
//!
//! This module contains pure signature-pad data types that are independent
//! of any rendering target, input source, or network transport.

pub mod core;
pub mod drawing;
pub mod stroke;
