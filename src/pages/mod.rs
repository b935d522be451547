//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and backend calls. Portal pages take the
//! bearer header from `AuthContext` at the moment they issue a call and
//! report failures inline; none of them retries.

pub mod admin;
pub mod customer;
pub mod employee;
pub(crate) mod forms;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
