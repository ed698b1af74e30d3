//! Serialization helpers for zero-copy Anchor structs
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Zero-copy structs use raw bytes with 8-byte Anchor discriminator prefix
//! Layout must match #[repr(C)] struct definitions exactly

use solana_sdk::pubkey::Pubkey;

pub const PROTOCOL_CONFIG_SIZE: usize = 73;
pub const TOKEN_FEE_SPLIT_SIZE: usize = 160;

// Anchor discriminators (first 8 bytes of sha256("account:StructName"))
pub const PROTOCOL_CONFIG_DISCRIMINATOR: [u8; 8] = [0xcf, 0x5b, 0xfa, 0x1c, 0x98, 0xb3, 0xd7, 0xd1];
pub const TOKEN_FEE_SPLIT_DISCRIMINATOR: [u8; 8] = [0x53, 0xc8, 0x61, 0x72, 0x2a, 0xac, 0xce, 0x85];

// TokenFeeSplit field offsets (including discriminator)
pub const OFFSET_CREATED_AT: usize = 8;
pub const OFFSET_MINT: usize = 16;
pub const OFFSET_CREATOR: usize = 48;
pub const OFFSET_CHARITY_WALLET: usize = 80;
pub const OFFSET_BUYBACK_WALLET: usize = 112;
pub const OFFSET_CHARITY_BPS: usize = 144;
pub const OFFSET_BUYBACK_BPS: usize = 146;
pub const OFFSET_CREATOR_BPS: usize = 148;
pub const OFFSET_VERSION: usize = 150;
pub const OFFSET_DONATION_TIER: usize = 151;
pub const OFFSET_BUMP: usize = 152;
pub const OFFSET_RECIPIENT_COUNT: usize = 153;

/// Serialize ProtocolConfig for test account data
///
/// Layout (zero-copy #[repr(C)]):
/// - 8 bytes: discriminator
/// - 32 bytes: authority
/// - 32 bytes: buyback_wallet
/// - 1 byte: bump
pub fn serialize_protocol_config(authority: Pubkey, buyback_wallet: Pubkey, bump: u8) -> Vec<u8> {
    let mut data = vec![0u8; PROTOCOL_CONFIG_SIZE];

    data[0..8].copy_from_slice(&PROTOCOL_CONFIG_DISCRIMINATOR);
    data[8..40].copy_from_slice(&authority.to_bytes());
    data[40..72].copy_from_slice(&buyback_wallet.to_bytes());
    data[72] = bump;

    data
}

/// Field values of a TokenFeeSplit record
#[derive(Clone, Copy, Debug)]
pub struct FeeSplitData {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub charity_wallet: Pubkey,
    pub buyback_wallet: Pubkey,
    pub charity_bps: u16,
    pub buyback_bps: u16,
    pub creator_bps: u16,
    pub donation_tier: u8,
    pub bump: u8,
    pub recipient_count: u8,
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    Pubkey::try_from(&data[offset..offset + 32]).unwrap()
}

/// Serialize TokenFeeSplit for test account data
///
/// Layout (zero-copy #[repr(C)]):
/// - 8 bytes: discriminator
/// - 8 bytes: created_at
/// - 4 * 32 bytes: mint, creator, charity_wallet, buyback_wallet
/// - 3 * 2 bytes: charity_bps, buyback_bps, creator_bps
/// - 4 bytes: version, donation_tier, bump, recipient_count
/// - 6 bytes: reserved
pub fn serialize_token_fee_split(fields: &FeeSplitData, created_at: i64) -> Vec<u8> {
    let mut data = vec![0u8; TOKEN_FEE_SPLIT_SIZE];

    data[0..8].copy_from_slice(&TOKEN_FEE_SPLIT_DISCRIMINATOR);
    data[OFFSET_CREATED_AT..OFFSET_MINT].copy_from_slice(&created_at.to_le_bytes());
    data[OFFSET_MINT..OFFSET_CREATOR].copy_from_slice(&fields.mint.to_bytes());
    data[OFFSET_CREATOR..OFFSET_CHARITY_WALLET].copy_from_slice(&fields.creator.to_bytes());
    data[OFFSET_CHARITY_WALLET..OFFSET_BUYBACK_WALLET]
        .copy_from_slice(&fields.charity_wallet.to_bytes());
    data[OFFSET_BUYBACK_WALLET..OFFSET_CHARITY_BPS]
        .copy_from_slice(&fields.buyback_wallet.to_bytes());
    data[OFFSET_CHARITY_BPS..OFFSET_BUYBACK_BPS].copy_from_slice(&fields.charity_bps.to_le_bytes());
    data[OFFSET_BUYBACK_BPS..OFFSET_CREATOR_BPS].copy_from_slice(&fields.buyback_bps.to_le_bytes());
    data[OFFSET_CREATOR_BPS..OFFSET_VERSION].copy_from_slice(&fields.creator_bps.to_le_bytes());
    data[OFFSET_VERSION] = 1;
    data[OFFSET_DONATION_TIER] = fields.donation_tier;
    data[OFFSET_BUMP] = fields.bump;
    data[OFFSET_RECIPIENT_COUNT] = fields.recipient_count;

    data
}

/// Read TokenFeeSplit fields back from raw account data
pub fn deserialize_token_fee_split(data: &[u8]) -> FeeSplitData {
    assert_eq!(&data[0..8], &TOKEN_FEE_SPLIT_DISCRIMINATOR);

    FeeSplitData {
        mint: read_pubkey(data, OFFSET_MINT),
        creator: read_pubkey(data, OFFSET_CREATOR),
        charity_wallet: read_pubkey(data, OFFSET_CHARITY_WALLET),
        buyback_wallet: read_pubkey(data, OFFSET_BUYBACK_WALLET),
        charity_bps: read_u16(data, OFFSET_CHARITY_BPS),
        buyback_bps: read_u16(data, OFFSET_BUYBACK_BPS),
        creator_bps: read_u16(data, OFFSET_CREATOR_BPS),
        donation_tier: data[OFFSET_DONATION_TIER],
        bump: data[OFFSET_BUMP],
        recipient_count: data[OFFSET_RECIPIENT_COUNT],
    }
}
