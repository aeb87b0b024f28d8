//! HTTP surface of the school services.
//!
//! One library backs three binaries: `management` owns professors, classes
//! and students; `reservas` and `atividades` own their records and check the
//! management ids they reference before every write.

pub mod app;
pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_util;
