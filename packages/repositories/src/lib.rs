pub mod client;

pub use client::{ClientRepository, RepositoryError};

#[cfg(test)]
mod test_helpers;
