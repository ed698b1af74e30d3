use anchor_lang::prelude::*;

#[event]
pub struct ProtocolConfigCreated {
    pub authority: Pubkey,
    pub buyback_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProtocolConfigUpdated {
    pub authority: Pubkey,
    pub old_buyback_wallet: Pubkey,
    pub new_buyback_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FeeSplitCreated {
    pub fee_split: Pubkey,
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub charity_wallet: Pubkey,
    pub buyback_wallet: Pubkey,
    pub donation_tier: u8,
    pub charity_bps: u16,
    pub buyback_bps: u16,
    pub creator_bps: u16,
    pub recipient_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct FeeSplitInspected {
    pub fee_split: Pubkey,
    pub mint: Pubkey,
    /// Tier derived from the stored bps (None = Custom)
    pub derived_tier: Option<u8>,
    pub label: String,
    pub charity_percent: String,
    pub buyback_percent: String,
    pub creator_percent: String,
    pub recipient_count: u8,
    pub anomaly: bool,
    pub timestamp: i64,
}
