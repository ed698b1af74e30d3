use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod fee_split;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("7s1QXs8hXtFDVtfHTiqMP4ztNh6Uiw83dSyP9Qdhn6QP");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Charity Splits",
    project_url: "https://github.com/charity-splits/charity-splits",
    contacts: "link:https://github.com/charity-splits/charity-splits/security",
    policy: "https://github.com/charity-splits/charity-splits/blob/main/SECURITY.md",
    source_code: "https://github.com/charity-splits/charity-splits"
}

#[program]
pub mod charity_splits {
    use super::*;

    /// Initializes the protocol configuration
    /// Can only be called once by the program's upgrade authority
    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        buyback_wallet: Pubkey,
    ) -> Result<()> {
        instructions::initialize_protocol::handler(ctx, buyback_wallet)
    }

    /// Updates the buyback wallet for future launches
    /// Only callable by current protocol authority
    pub fn update_protocol_config(
        ctx: Context<UpdateProtocolConfig>,
        new_buyback_wallet: Pubkey,
    ) -> Result<()> {
        instructions::update_protocol_config::handler(ctx, new_buyback_wallet)
    }

    /// Records the immutable fee split chosen at token launch
    /// Signer must be the mint authority
    pub fn create_fee_split(
        ctx: Context<CreateFeeSplit>,
        donate_percent: u8,
        charity_wallet: Pubkey,
    ) -> Result<()> {
        instructions::create_fee_split::handler(ctx, donate_percent, charity_wallet)
    }

    /// Returns and emits the display breakdown of a recorded fee split
    /// Permissionless - anyone can call
    pub fn inspect_fee_split(ctx: Context<InspectFeeSplit>) -> Result<FeeSplitReport> {
        instructions::inspect_fee_split::handler(ctx)
    }
}
