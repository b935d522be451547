//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome (guards, layout shells, navigation)
//! around route pages and read the signed-in session from the
//! `AuthContext` provider.

pub mod guard;
pub mod layout;
pub mod sidebar;
