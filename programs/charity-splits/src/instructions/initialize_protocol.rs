use anchor_lang::prelude::*;

use crate::{
    constants::{PROTOCOL_CONFIG_SEED, PROTOCOL_CONFIG_SIZE},
    errors::ErrorCode,
    events::ProtocolConfigCreated,
    state::ProtocolConfig,
    ID,
};

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    #[account(
        init,
        payer = authority,
        space = PROTOCOL_CONFIG_SIZE,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &anchor_lang::solana_program::bpf_loader_upgradeable::id()
            @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Initializes the protocol configuration
/// Can only be called once by the program's upgrade authority
pub fn handler(ctx: Context<InitializeProtocol>, buyback_wallet: Pubkey) -> Result<()> {
    require!(buyback_wallet != Pubkey::default(), ErrorCode::ZeroAddress);

    // program_data must be the loader PDA for this program
    let (expected_program_data, _) = Pubkey::find_program_address(
        &[ID.as_ref()],
        &anchor_lang::solana_program::bpf_loader_upgradeable::id(),
    );
    require!(
        ctx.accounts.program_data.key() == expected_program_data,
        ErrorCode::Unauthorized
    );

    let data = ctx.accounts.program_data.try_borrow_data()?;

    // UpgradeableLoaderState::ProgramData:
    // - 4 bytes: discriminant
    // - 8 bytes: slot
    // - 1 byte: Option discriminant for upgrade_authority
    // - 32 bytes: upgrade_authority pubkey (if Some)
    require!(data.len() >= 45, ErrorCode::Unauthorized);
    require!(data[12] == 1, ErrorCode::Unauthorized); // immutable programs cannot initialize

    let upgrade_authority =
        Pubkey::try_from(&data[13..45]).map_err(|_| ErrorCode::Unauthorized)?;
    require!(
        upgrade_authority == ctx.accounts.authority.key(),
        ErrorCode::Unauthorized
    );
    drop(data);

    let protocol_config = &mut ctx.accounts.protocol_config.load_init()?;

    protocol_config.authority = ctx.accounts.authority.key();
    protocol_config.buyback_wallet = buyback_wallet;
    protocol_config.bump = ctx.bumps.protocol_config;

    emit!(ProtocolConfigCreated {
        authority: ctx.accounts.authority.key(),
        buyback_wallet,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
