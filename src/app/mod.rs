//! Application orchestration layer
//!
//! This module coordinates between input capture, the domain model, the
//! drawing surface, and the store client. It owns the submission flow's
//! state machine and the controller that sequences network requests.

pub mod controller;
pub mod state;
