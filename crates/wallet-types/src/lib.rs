//! Common types module for the wallet state layer.
//!
//! This module defines the data types shared by the state slices: normalized
//! tables, swap provider payloads, persisted transactions, address-book
//! records, network descriptors and the active wallet abstraction.

/// Address-book records and the reserved synthetic entry ids.
pub mod address_book;
/// Network descriptors keyed by chain id.
pub mod networks;
/// Id-indexed tables with an explicit insertion order.
pub mod normalized;
/// Storage namespaces for persisted slices.
pub mod storage;
/// Swap provider payloads and swap form inputs.
pub mod swap;
/// Persisted transaction records and per-hash fetch state.
pub mod transactions;
/// Utility functions for parsing and display.
pub mod utils;
/// Active wallet abstraction.
pub mod wallet;

// Re-export all types for convenient access
pub use address_book::*;
pub use networks::{deserialize_networks, NetworkConfig, NetworksConfig};
pub use normalized::NormalizedTable;
pub use storage::*;
pub use swap::*;
pub use transactions::*;
pub use utils::{addresses_match, parse_float, truncate_id};
pub use wallet::{WalletInstance, WatchOnlyWallet};
