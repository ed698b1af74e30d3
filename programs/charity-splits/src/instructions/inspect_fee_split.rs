use anchor_lang::prelude::*;

use crate::{
    constants::{FEE_SPLIT_SEED, TOTAL_FEE_BPS},
    events::FeeSplitInspected,
    fee_split::FeeBreakdown,
    state::TokenFeeSplit,
};

#[derive(Accounts)]
pub struct InspectFeeSplit<'info> {
    #[account(
        seeds = [FEE_SPLIT_SEED, token_fee_split.load()?.mint.as_ref()],
        bump = token_fee_split.load()?.bump
    )]
    pub token_fee_split: AccountLoader<'info, TokenFeeSplit>,
}

/// Display breakdown returned to the caller (Anchor return data)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeeSplitReport {
    /// Tier derived from the stored bps (None = Custom)
    pub derived_tier: Option<u8>,
    pub label: String,
    pub charity_percent: String,
    pub buyback_percent: String,
    pub creator_percent: String,
    pub recipient_count: u8,
    pub anomaly: bool,
}

impl From<FeeBreakdown> for FeeSplitReport {
    fn from(breakdown: FeeBreakdown) -> Self {
        Self {
            derived_tier: breakdown.tier.map(|tier| tier.percent()),
            label: breakdown.label,
            charity_percent: breakdown.charity_percent,
            buyback_percent: breakdown.buyback_percent,
            creator_percent: breakdown.creator_percent,
            recipient_count: breakdown.recipient_count,
            anomaly: breakdown.anomaly,
        }
    }
}

/// Reports the display breakdown of a recorded fee split
/// Permissionless. Anomalous records are reported, never rejected or rewritten.
pub fn handler(ctx: Context<InspectFeeSplit>) -> Result<FeeSplitReport> {
    let fee_split = ctx.accounts.token_fee_split.load()?;
    let report = FeeSplitReport::from(fee_split.breakdown());

    if report.anomaly {
        let stored = fee_split.fee_split();
        msg!(
            "Fee split for {} sums to {} bps, expected {}: {} / {} / {}",
            fee_split.mint,
            stored.total_bps(),
            TOTAL_FEE_BPS,
            stored.charity_bps,
            stored.buyback_bps,
            stored.creator_bps
        );
    }

    emit!(FeeSplitInspected {
        fee_split: ctx.accounts.token_fee_split.key(),
        mint: fee_split.mint,
        derived_tier: report.derived_tier,
        label: report.label.clone(),
        charity_percent: report.charity_percent.clone(),
        buyback_percent: report.buyback_percent.clone(),
        creator_percent: report.creator_percent.clone(),
        recipient_count: report.recipient_count,
        anomaly: report.anomaly,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(report)
}
