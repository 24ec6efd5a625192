//! Toy banking application: clients owning saving and checking accounts, an active account
//! per client, transfers between clients and aggregate reports.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod banking;
pub mod client;
pub mod config;
pub mod csv;
pub mod errors;
pub mod report;

/// Client identifier. Unique across [`banking::Banking`]
pub type ClientName = String;
/// Position of an account in its owner's account list
pub type AccountID = usize;
/// Number given to a client when registered in [`banking::Banking`]. Unique within one bank
pub type Registration = u64;
