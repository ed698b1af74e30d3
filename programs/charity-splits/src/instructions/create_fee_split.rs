use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token_interface::Mint;

use crate::{
    constants::{
        FEE_SPLIT_SEED, PROTOCOL_CONFIG_SEED, TOKEN_FEE_SPLIT_SIZE, TOKEN_FEE_SPLIT_VERSION,
    },
    errors::ErrorCode,
    events::FeeSplitCreated,
    fee_split::{compute_fee_split, DonationTier},
    state::{ProtocolConfig, TokenFeeSplit},
};

#[derive(Accounts)]
pub struct CreateFeeSplit<'info> {
    #[account(
        init,
        payer = creator,
        space = TOKEN_FEE_SPLIT_SIZE,
        seeds = [FEE_SPLIT_SEED, mint.key().as_ref()],
        bump
    )]
    pub token_fee_split: AccountLoader<'info, TokenFeeSplit>,

    #[account(
        constraint = mint.mint_authority == COption::Some(creator.key()) @ ErrorCode::Unauthorized
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    /// Launching creator, pays rent for the record
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Records the fee split for a newly launched token
/// The record is immutable; a mint can only be recorded once
pub fn handler(
    ctx: Context<CreateFeeSplit>,
    donate_percent: u8,
    charity_wallet: Pubkey,
) -> Result<()> {
    let tier = DonationTier::try_from(donate_percent)?;

    require!(charity_wallet != Pubkey::default(), ErrorCode::ZeroAddress);

    let creator = ctx.accounts.creator.key();
    let buyback_wallet = ctx.accounts.protocol_config.load()?.buyback_wallet;
    require!(
        charity_wallet != creator && charity_wallet != buyback_wallet && creator != buyback_wallet,
        ErrorCode::DuplicateRecipient
    );

    let split = compute_fee_split(tier);
    let recipient_count = split.recipients().len() as u8;

    let mint = ctx.accounts.mint.key();
    let timestamp = Clock::get()?.unix_timestamp;

    let fee_split = &mut ctx.accounts.token_fee_split.load_init()?;

    fee_split.created_at = timestamp;
    fee_split.mint = mint;
    fee_split.creator = creator;
    fee_split.charity_wallet = charity_wallet;
    fee_split.buyback_wallet = buyback_wallet;
    fee_split.charity_bps = split.charity_bps;
    fee_split.buyback_bps = split.buyback_bps;
    fee_split.creator_bps = split.creator_bps;
    fee_split.version = TOKEN_FEE_SPLIT_VERSION;
    fee_split.donation_tier = tier.percent();
    fee_split.bump = ctx.bumps.token_fee_split;
    fee_split.recipient_count = recipient_count;
    fee_split.reserved = [0; 6];

    #[cfg(feature = "verbose")]
    msg!(
        "Fee split for {}: {} ({} / {} / {} bps)",
        mint,
        tier,
        split.charity_bps,
        split.buyback_bps,
        split.creator_bps
    );

    emit!(FeeSplitCreated {
        fee_split: ctx.accounts.token_fee_split.key(),
        mint,
        creator,
        charity_wallet,
        buyback_wallet,
        donation_tier: tier.percent(),
        charity_bps: split.charity_bps,
        buyback_bps: split.buyback_bps,
        creator_bps: split.creator_bps,
        recipient_count,
        timestamp,
    });

    Ok(())
}
