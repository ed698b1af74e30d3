// Fee pool partition (10000 bps = the whole pool, which is 1% of trade volume)
pub const BASE_CHARITY_BPS: u16 = 7500;       // 75%
pub const BASE_BUYBACK_BPS: u16 = 500;        // 5%, fixed for every tier
pub const BASE_CREATOR_BPS: u16 = 2000;       // 20% before donation
pub const TOTAL_FEE_BPS: u16 = 10000;

// Creator-selectable donation tiers (percent of the creator's base share)
pub const DONATION_TIERS: [u8; 5] = [0, 25, 50, 75, 100];

// Percentage points a raw donation percent may drift from a tier and still
// be considered a candidate during derivation
pub const TIER_SNAP_TOLERANCE: u8 = 5;

// Schema version written to new fee split records
pub const TOKEN_FEE_SPLIT_VERSION: u8 = 1;

// PDA seeds
pub const PROTOCOL_CONFIG_SEED: &[u8] = b"protocol_config";
pub const FEE_SPLIT_SEED: &[u8] = b"fee_split";

// Account sizes for zero-copy structs
// ProtocolConfig: discriminator (8) + authority (32) + buyback_wallet (32) + bump (1)
pub const PROTOCOL_CONFIG_SIZE: usize = 8 + 32 + 32 + 1; // 73 bytes

// TokenFeeSplit size calculation:
// - discriminator: 8
// - created_at: 8
// - mint, creator, charity_wallet, buyback_wallet: 4 * 32 = 128
// - charity_bps, buyback_bps, creator_bps: 3 * 2 = 6
// - version, donation_tier, bump, recipient_count: 4
// - reserved (keeps the struct 8-byte aligned): 6
// Total: 8 + 8 + 128 + 6 + 4 + 6 = 160
pub const TOKEN_FEE_SPLIT_SIZE: usize = 160;

const _: () = assert!(
    BASE_CHARITY_BPS as u32 + BASE_BUYBACK_BPS as u32 + BASE_CREATOR_BPS as u32
        == TOTAL_FEE_BPS as u32
);
