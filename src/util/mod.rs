pub mod breadcrumbs;
pub mod cookie;
pub mod filter;
pub mod guard;

#[cfg(test)]
pub(crate) mod testing;
