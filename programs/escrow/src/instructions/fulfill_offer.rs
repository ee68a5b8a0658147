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
pub struct FulfillOffer<'info> {
    /// The taker who accepts the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The original maker; receives Token B and both rent refunds
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Offer account recording the exchange terms (closed on success)
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a @ EscrowError::MintMismatch,
        has_one = token_mint_b @ EscrowError::MintMismatch,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Box<Account<'info, Offer>>,

    /// Mint of the vaulted token
    pub token_mint_a: Box<Account<'info, Mint>>,

    /// Mint of the token the maker is owed
    pub token_mint_b: Box<Account<'info, Mint>>,

    /// Vault holding Token A, authority is the offer PDA (closed on success)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's associated token account for Token A (receives the vault balance)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_a,
        associated_token::authority = taker,
    )]
    pub taker_token_account_a: Box<Account<'info, TokenAccount>>,

    /// Taker's associated token account for Token B (source of the payment)
    #[account(
        mut,
        associated_token::mint = token_mint_b,
        associated_token::authority = taker,
    )]
    pub taker_token_account_b: Box<Account<'info, TokenAccount>>,

    /// Maker's associated token account for Token B (receives the payment)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_b,
        associated_token::authority = maker,
    )]
    pub maker_token_account_b: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> FulfillOffer<'info> {
    /// Transfer the wanted amount of Token B from taker to maker
    pub fn pay_maker(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_token_account_b.to_account_info(),
            mint: self.token_mint_b.to_account_info(),
            to: self.maker_token_account_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, self.offer.token_b_wanted_amount, self.token_mint_b.decimals)
    }

    /// Release the full vault balance to the taker, then close the vault
    /// and refund its rent to the maker
    pub fn release_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            &self.offer.id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.token_mint_a.to_account_info(),
            to: self.taker_token_account_a.to_account_info(),
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

pub fn handler(ctx: Context<FulfillOffer>) -> Result<()> {
    require_gte!(
        ctx.accounts.taker_token_account_b.amount,
        ctx.accounts.offer.token_b_wanted_amount,
        EscrowError::InsufficientBalance
    );

    ctx.accounts.pay_maker()?;
    ctx.accounts.release_and_close_vault()?;

    msg!("offer {} fulfilled", ctx.accounts.offer.id);
    Ok(())
}
