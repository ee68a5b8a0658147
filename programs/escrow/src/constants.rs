/// Seed prefix for offer PDA derivation
pub const OFFER_SEED: &[u8] = b"offer";
