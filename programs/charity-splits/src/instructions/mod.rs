#![allow(ambiguous_glob_reexports)]

pub mod create_fee_split;
pub mod initialize_protocol;
pub mod inspect_fee_split;
pub mod update_protocol_config;

pub use create_fee_split::*;
pub use initialize_protocol::*;
pub use inspect_fee_split::*;
pub use update_protocol_config::*;
