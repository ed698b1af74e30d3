use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Donation tier must be one of 0, 25, 50, 75 or 100")]
    InvalidDonationTier,

    #[msg("Address cannot be zero")]
    ZeroAddress,

    #[msg("Creator, charity and buyback wallets must be distinct")]
    DuplicateRecipient,

    #[msg("Unauthorized")]
    Unauthorized,
}
