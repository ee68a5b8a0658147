use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("43ezG6GzP3y2HK9R6pNMxH2pMj2vnqC9SEsLHBNYQLkK");

#[program]
pub mod escrow {
    use super::*;

    /// Create a new offer: maker deposits Token A into the vault and sets
    /// the amount of Token B wanted in exchange
    #[instruction(discriminator = 0)]
    pub fn make_offer(
        ctx: Context<MakeOffer>,
        id: u64,
        token_a_offered_amount: u64,
        token_b_wanted_amount: u64,
    ) -> Result<()> {
        instructions::make_offer::handler(ctx, id, token_a_offered_amount, token_b_wanted_amount)
    }

    /// Fulfill an offer: taker pays Token B to the maker and receives the
    /// vaulted Token A; offer and vault are closed
    #[instruction(discriminator = 1)]
    pub fn fulfill_offer(ctx: Context<FulfillOffer>) -> Result<()> {
        instructions::fulfill_offer::handler(ctx)
    }

    /// Cancel an offer: maker reclaims the vaulted Token A; offer and vault
    /// are closed
    #[instruction(discriminator = 2)]
    pub fn cancel_offer(ctx: Context<CancelOffer>) -> Result<()> {
        instructions::cancel_offer::handler(ctx)
    }
}
