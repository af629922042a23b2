//! Page modules for the three top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own their form signal and hand completed requests back to the root
//! controller from context; no page touches storage directly.

pub mod dashboard;
pub mod login;
pub mod signup;
