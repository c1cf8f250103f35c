//! Contracts for the Stock Analysis Agent
//!
//! Defines the request/response value objects exchanged over the wire and
//! the schema-level constraints enforced on inbound data. These types are
//! the stable surface of the agent: the analysis logic behind them is a
//! placeholder and may change, the contract may not.

pub mod analysis;

pub use analysis::*;
