use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
    },
};

use crate::constants::OFFER_SEED;
use crate::errors::EscrowError;
use crate::state::Offer;

#[derive(Accounts)]
pub struct CancelOffer<'info> {
    /// The maker who created the offer; only they may cancel it
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Offer account recording the exchange terms (closed on success).
    /// Seeds use the offer's recorded maker; a foreign signer is caught
    /// by the maker check, not an address mismatch.
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::Unauthorized,
        has_one = token_mint_a @ EscrowError::MintMismatch,
        seeds = [OFFER_SEED, offer.maker.as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint of the vaulted token
    pub token_mint_a: Account<'info, Mint>,

    /// Vault holding Token A, authority is the offer PDA (closed on success)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's associated token account for Token A (receives the refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
    )]
    pub maker_token_account_a: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CancelOffer<'info> {
    /// Return the full vault balance to the maker, then close the vault
    /// and refund its rent
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            &self.offer.id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.token_mint_a.to_account_info(),
            to: self.maker_token_account_a.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );

        transfer_checked(cpi_ctx, self.vault.amount, self.token_mint_a.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );

        close_account(cpi_ctx)
    }
}

pub fn handler(ctx: Context<CancelOffer>) -> Result<()> {
    ctx.accounts.refund_and_close_vault()?;

    msg!("offer {} cancelled", ctx.accounts.offer.id);
    Ok(())
}
