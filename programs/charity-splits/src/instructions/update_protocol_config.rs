use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_CONFIG_SEED, errors::ErrorCode, events::ProtocolConfigUpdated,
    state::ProtocolConfig,
};

#[derive(Accounts)]
pub struct UpdateProtocolConfig<'info> {
    #[account(
        mut,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump,
        constraint = protocol_config.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    pub authority: Signer<'info>,
}

/// Updates the buyback wallet used by future launches
/// Fee splits already recorded keep the wallet they were created with
pub fn handler(ctx: Context<UpdateProtocolConfig>, new_buyback_wallet: Pubkey) -> Result<()> {
    require!(new_buyback_wallet != Pubkey::default(), ErrorCode::ZeroAddress);

    let protocol_config = &mut ctx.accounts.protocol_config.load_mut()?;
    let old_buyback_wallet = protocol_config.buyback_wallet;

    protocol_config.buyback_wallet = new_buyback_wallet;

    emit!(ProtocolConfigUpdated {
        authority: ctx.accounts.authority.key(),
        old_buyback_wallet,
        new_buyback_wallet,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
