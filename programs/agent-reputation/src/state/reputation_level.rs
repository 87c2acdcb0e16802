use anchor_lang::prelude::*;

/// Standing bucket of a score. Readers use it to gate privileges off-chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReputationLevel {
    Novice,
    Contributor,
    Builder,
    Guardian,
    Legend,
}

impl ReputationLevel {
    pub fn from_score(score: u64) -> Self {
        match score {
            0..=100 => ReputationLevel::Novice,
            101..=500 => ReputationLevel::Contributor,
            501..=1_000 => ReputationLevel::Builder,
            1_001..=5_000 => ReputationLevel::Guardian,
            _ => ReputationLevel::Legend,
        }
    }
}
