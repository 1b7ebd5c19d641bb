//! investsim: long-horizon periodic investment simulator.
//!
//! Compares purchase-timing policies (fixed-interval averaging, buy-on-dip,
//! two-fund reallocation) over fixed monthly price series, with tiered
//! transaction commissions and interest on idle cash.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
