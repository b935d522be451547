//! Backend access: wire types, the HTTP transport seam, the auth service and
//! the portal REST client.

pub mod auth;
pub mod bank;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
