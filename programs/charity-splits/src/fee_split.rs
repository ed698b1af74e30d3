//! Fee split engine
//!
//! Partitions the 10000 bps fee pool between the charity, the buyback
//! mechanism and the token creator. The creator picks a [`DonationTier`] at
//! launch; [`compute_fee_split`] maps it to a [`FeeSplit`] whose three fields
//! are persisted. Everything that reads a persisted triple goes through
//! [`derive_tier_from_bps`], [`is_bps_anomaly`] and [`FeeBreakdown`].
//!
//! Missing stored fields are handled differently on purpose: derivation
//! assumes the base default for a missing field, the anomaly check assumes
//! zero.

use std::fmt;

use crate::{
    constants::{
        BASE_BUYBACK_BPS, BASE_CHARITY_BPS, BASE_CREATOR_BPS, TIER_SNAP_TOLERANCE, TOTAL_FEE_BPS,
    },
    errors::ErrorCode,
};

/// Percent of the creator's base share redirected to charity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DonationTier {
    KeepAll = 0,
    Quarter = 25,
    Half = 50,
    ThreeQuarters = 75,
    GiveAll = 100,
}

impl DonationTier {
    /// All tiers in ascending order
    pub const ALL: [DonationTier; 5] = [
        DonationTier::KeepAll,
        DonationTier::Quarter,
        DonationTier::Half,
        DonationTier::ThreeQuarters,
        DonationTier::GiveAll,
    ];

    pub const fn percent(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DonationTier {
    type Error = ErrorCode;

    fn try_from(percent: u8) -> std::result::Result<Self, Self::Error> {
        match percent {
            0 => Ok(DonationTier::KeepAll),
            25 => Ok(DonationTier::Quarter),
            50 => Ok(DonationTier::Half),
            75 => Ok(DonationTier::ThreeQuarters),
            100 => Ok(DonationTier::GiveAll),
            _ => Err(ErrorCode::InvalidDonationTier),
        }
    }
}

impl fmt::Display for DonationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonationTier::KeepAll => f.write_str("Keep All"),
            DonationTier::GiveAll => f.write_str("Give All"),
            DonationTier::Quarter | DonationTier::Half | DonationTier::ThreeQuarters => {
                write!(f, "{}% to Charity", self.percent())
            }
        }
    }
}

/// Party entitled to a share of the fee pool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeeRecipient {
    Charity,
    Buyback,
    Creator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeShare {
    pub recipient: FeeRecipient,
    pub bps: u16,
}

/// Three-way basis point allocation of the fee pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub charity_bps: u16,
    pub buyback_bps: u16,
    pub creator_bps: u16,
    /// Part of the creator's base share moved to charity
    pub donated_creator_bps: u16,
}

impl FeeSplit {
    /// Rebuilds a split from stored fields as-is
    /// Does not validate; use [`is_bps_anomaly`] for integrity
    pub fn from_stored(charity_bps: u16, buyback_bps: u16, creator_bps: u16) -> Self {
        Self {
            charity_bps,
            buyback_bps,
            creator_bps,
            donated_creator_bps: charity_bps
                .saturating_sub(BASE_CHARITY_BPS)
                .min(BASE_CREATOR_BPS),
        }
    }

    pub fn total_bps(&self) -> u32 {
        self.charity_bps as u32 + self.buyback_bps as u32 + self.creator_bps as u32
    }

    pub fn shares(&self) -> [FeeShare; 3] {
        [
            FeeShare { recipient: FeeRecipient::Charity, bps: self.charity_bps },
            FeeShare { recipient: FeeRecipient::Buyback, bps: self.buyback_bps },
            FeeShare { recipient: FeeRecipient::Creator, bps: self.creator_bps },
        ]
    }

    /// Shares with a non-zero allocation, in charity, buyback, creator order
    pub fn recipients(&self) -> Vec<FeeShare> {
        self.shares().into_iter().filter(|s| s.bps > 0).collect()
    }

    /// Splits a collected fee amount according to this allocation
    /// Floor division per share; rounding dust is added to the charity share.
    /// Returns None on overflow or when the shares exceed the amount.
    pub fn allocate(&self, amount: u64) -> Option<FeeAllocation> {
        let charity = share_of(amount, self.charity_bps)?;
        let buyback = share_of(amount, self.buyback_bps)?;
        let creator = share_of(amount, self.creator_bps)?;

        let dust = amount
            .checked_sub(charity)?
            .checked_sub(buyback)?
            .checked_sub(creator)?;

        Some(FeeAllocation {
            charity: charity.checked_add(dust)?,
            buyback,
            creator,
        })
    }
}

/// Concrete amounts owed to each recipient for one fee collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeAllocation {
    pub charity: u64,
    pub buyback: u64,
    pub creator: u64,
}

impl FeeAllocation {
    pub fn total(&self) -> Option<u64> {
        self.charity.checked_add(self.buyback)?.checked_add(self.creator)
    }
}

/// Share of `total` for `bps`, rounded down
/// Returns None on overflow
pub fn share_of(total: u64, bps: u16) -> Option<u64> {
    (total as u128)
        .checked_mul(bps as u128)?
        .checked_div(TOTAL_FEE_BPS as u128)?
        .try_into()
        .ok()
}

/// Computes the split for a donation tier
///
/// The donated amount is rounded half away from zero. Every current tier
/// divides exactly, so rounding only matters if tiers are extended.
pub fn compute_fee_split(tier: DonationTier) -> FeeSplit {
    let donated_creator_bps =
        ((tier.percent() as u32 * BASE_CREATOR_BPS as u32 + 50) / 100) as u16;

    FeeSplit {
        charity_bps: BASE_CHARITY_BPS + donated_creator_bps,
        buyback_bps: BASE_BUYBACK_BPS,
        creator_bps: BASE_CREATOR_BPS - donated_creator_bps,
        donated_creator_bps,
    }
}

/// Recovers the donation tier a stored triple was computed from
///
/// Missing fields take their base default. A tier within
/// `TIER_SNAP_TOLERANCE` points of the raw donation percent is only a
/// candidate: it is accepted when its exact split matches all three fields.
/// Anything else, including a triple one unit off a canonical split, is None.
pub fn derive_tier_from_bps(
    charity_bps: Option<u16>,
    buyback_bps: Option<u16>,
    creator_bps: Option<u16>,
) -> Option<DonationTier> {
    let charity = charity_bps.unwrap_or(BASE_CHARITY_BPS);
    let buyback = buyback_bps.unwrap_or(BASE_BUYBACK_BPS);
    let creator = creator_bps.unwrap_or(BASE_CREATOR_BPS);

    let scale = BASE_CREATOR_BPS as i32;
    let donated = (charity as i32 - BASE_CHARITY_BPS as i32).clamp(0, scale);

    // |donated / scale * 100 - tier| <= tolerance, multiplied through by scale
    let tolerance = TIER_SNAP_TOLERANCE as i32 * scale;

    DonationTier::ALL
        .into_iter()
        .filter(|tier| (donated * 100 - tier.percent() as i32 * scale).abs() <= tolerance)
        .find(|tier| {
            let expected = compute_fee_split(*tier);
            expected.charity_bps == charity
                && expected.buyback_bps == buyback
                && expected.creator_bps == creator
        })
}

/// True when the fields (missing = 0) do not sum to `TOTAL_FEE_BPS`
pub fn is_bps_anomaly(
    charity_bps: Option<u16>,
    buyback_bps: Option<u16>,
    creator_bps: Option<u16>,
) -> bool {
    let total = charity_bps.unwrap_or(0) as u32
        + buyback_bps.unwrap_or(0) as u32
        + creator_bps.unwrap_or(0) as u32;
    total != TOTAL_FEE_BPS as u32
}

pub fn tier_label(tier: Option<DonationTier>) -> String {
    match tier {
        Some(tier) => tier.to_string(),
        None => "Custom".to_string(),
    }
}

/// Formats basis points as a percent with two decimals ("75.00")
pub fn bps_to_percent(bps: u16) -> String {
    format!("{}.{:02}", bps / 100, bps % 100)
}

/// Display summary of a stored fee split
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub tier: Option<DonationTier>,
    pub label: String,
    pub charity_percent: String,
    pub buyback_percent: String,
    pub creator_percent: String,
    pub recipient_count: u8,
    pub anomaly: bool,
}

impl FeeBreakdown {
    pub fn from_stored(
        charity_bps: Option<u16>,
        buyback_bps: Option<u16>,
        creator_bps: Option<u16>,
    ) -> Self {
        let tier = derive_tier_from_bps(charity_bps, buyback_bps, creator_bps);
        let shown = FeeSplit::from_stored(
            charity_bps.unwrap_or(BASE_CHARITY_BPS),
            buyback_bps.unwrap_or(BASE_BUYBACK_BPS),
            creator_bps.unwrap_or(BASE_CREATOR_BPS),
        );

        Self {
            tier,
            label: tier_label(tier),
            charity_percent: bps_to_percent(shown.charity_bps),
            buyback_percent: bps_to_percent(shown.buyback_bps),
            creator_percent: bps_to_percent(shown.creator_bps),
            recipient_count: shown.recipients().len() as u8,
            anomaly: is_bps_anomaly(charity_bps, buyback_bps, creator_bps),
        }
    }

    /// False when the percentages should be shown with a warning
    pub fn is_trusted(&self) -> bool {
        !self.anomaly
    }
}
