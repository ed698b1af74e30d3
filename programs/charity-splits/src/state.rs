use anchor_lang::prelude::*;

use crate::fee_split::{FeeBreakdown, FeeSplit};

/// Global protocol configuration (single instance)
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct ProtocolConfig {
    /// Authority that can update config (initially program upgrade authority)
    pub authority: Pubkey,
    /// Wallet that receives the buyback share of every new token
    pub buyback_wallet: Pubkey,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
}

/// Fee split recorded for a token at launch, one per mint
/// Never updated or closed after creation
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct TokenFeeSplit {
    /// Launch timestamp
    pub created_at: i64,
    /// Token mint this split applies to
    pub mint: Pubkey,
    /// Launching creator (mint authority at launch)
    pub creator: Pubkey,
    /// Charity wallet receiving the charity share
    pub charity_wallet: Pubkey,
    /// Buyback wallet snapshotted from protocol config at launch
    pub buyback_wallet: Pubkey,
    pub charity_bps: u16,
    pub buyback_bps: u16,
    pub creator_bps: u16,
    /// Schema version for future upgrades
    pub version: u8,
    /// Tier the creator selected (informational; reads derive from the bps)
    pub donation_tier: u8,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Number of recipients with a non-zero share (2 or 3)
    pub recipient_count: u8,
    pub reserved: [u8; 6],
}

impl TokenFeeSplit {
    pub fn fee_split(&self) -> FeeSplit {
        FeeSplit::from_stored(self.charity_bps, self.buyback_bps, self.creator_bps)
    }

    pub fn breakdown(&self) -> FeeBreakdown {
        FeeBreakdown::from_stored(
            Some(self.charity_bps),
            Some(self.buyback_bps),
            Some(self.creator_bps),
        )
    }
}

// Compile-time size assertions to catch accidental struct changes
// ProtocolConfig: see PROTOCOL_CONFIG_SIZE = 73
const _: () = assert!(std::mem::size_of::<ProtocolConfig>() == 65); // 73 - 8 (discriminator added by Anchor)

// TokenFeeSplit: see TOKEN_FEE_SPLIT_SIZE = 160
const _: () = assert!(std::mem::size_of::<TokenFeeSplit>() == 152); // 160 - 8 (discriminator added by Anchor)
