use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Offered and wanted token mints must be different")]
    SameTokenMints,
    #[msg("Token mint does not match the mint recorded in the offer")]
    MintMismatch,
    #[msg("Signer is not the maker of this offer")]
    Unauthorized,
    #[msg("Source token account holds less than the required amount")]
    InsufficientBalance,
}
