//! Test helpers for Charity Splits Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! - All imports from solana_sdk::* (not modular crates like solana_pubkey)
//! - Mint accounts MUST have owner explicitly set to spl_token::id()

#![allow(dead_code)]

pub mod serialization;

pub use accounts::*;
pub use errors::*;
pub use instructions::*;
pub use serialization::*;

use mollusk_svm::Mollusk;

/// Setup Mollusk for testing
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// For Anchor workspace: tests are in programs/charity-splits/tests,
/// binary is at workspace_root/target/deploy/
pub fn setup_mollusk() -> Mollusk {
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    Mollusk::new(&instructions::PROGRAM_ID, "charity_splits")
}
