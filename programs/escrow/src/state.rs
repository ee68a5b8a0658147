use anchor_lang::prelude::*;

/// Offer account describing a proposed asset-for-asset trade. Lives at a
/// PDA derived from the maker and a maker-chosen id; its paired vault is
/// the associated token account of `token_mint_a` owned by this account.
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Offer {
    /// Maker-chosen discriminator, part of the PDA derivation
    pub id: u64,
    /// Wallet that created the offer and funded the vault
    pub maker: Pubkey,
    /// Mint of the token held in the vault
    pub token_mint_a: Pubkey,
    /// Mint of the token the maker wants in return
    pub token_mint_b: Pubkey,
    /// Amount of Token B (in minor units) required to fulfill
    pub token_b_wanted_amount: u64,
    /// Bump seed for PDA derivation (cached for efficiency)
    pub bump: u8,
}
