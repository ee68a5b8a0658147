use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::constants::OFFER_SEED;
use crate::errors::EscrowError;
use crate::state::Offer;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct MakeOffer<'info> {
    /// The maker who sets the exchange terms and deposits Token A
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Offer account that records the exchange terms
    #[account(
        init,
        payer = maker,
        space = Offer::DISCRIMINATOR.len() + Offer::INIT_SPACE,
        seeds = [OFFER_SEED, maker.key().as_ref(), id.to_le_bytes().as_ref()],
        bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint of the token the maker deposits
    pub token_mint_a: Account<'info, Mint>,

    /// Mint of the token the maker wants to receive
    pub token_mint_b: Account<'info, Mint>,

    /// Maker's associated token account for Token A (source of the deposit)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
    )]
    pub maker_token_account_a: Account<'info, TokenAccount>,

    /// Vault holding the deposited Token A, authority is the offer PDA
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeOffer<'info> {
    /// Record the exchange terms in the offer account
    pub fn record_terms(
        &mut self,
        id: u64,
        token_b_wanted_amount: u64,
        bumps: &MakeOfferBumps,
    ) -> Result<()> {
        self.offer.set_inner(Offer {
            id,
            maker: self.maker.key(),
            token_mint_a: self.token_mint_a.key(),
            token_mint_b: self.token_mint_b.key(),
            token_b_wanted_amount,
            bump: bumps.offer,
        });
        Ok(())
    }

    /// Transfer Token A from the maker into the vault
    pub fn deposit_to_vault(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.maker_token_account_a.to_account_info(),
            mint: self.token_mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.token_mint_a.decimals)
    }
}

pub fn handler(
    ctx: Context<MakeOffer>,
    id: u64,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> Result<()> {
    require_gt!(token_a_offered_amount, 0, EscrowError::InvalidAmount);
    require_gt!(token_b_wanted_amount, 0, EscrowError::InvalidAmount);
    require_keys_neq!(
        ctx.accounts.token_mint_a.key(),
        ctx.accounts.token_mint_b.key(),
        EscrowError::SameTokenMints
    );
    require_gte!(
        ctx.accounts.maker_token_account_a.amount,
        token_a_offered_amount,
        EscrowError::InsufficientBalance
    );

    ctx.accounts.record_terms(id, token_b_wanted_amount, &ctx.bumps)?;
    ctx.accounts.deposit_to_vault(token_a_offered_amount)?;

    msg!(
        "offer {} open: {} of mint A escrowed, wants {} of mint B",
        id,
        token_a_offered_amount,
        token_b_wanted_amount
    );
    Ok(())
}
