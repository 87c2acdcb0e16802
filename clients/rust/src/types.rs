use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

/// Standing bucket of a score, from `Novice` (0..=100) up to `Legend` (5001+).
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReputationLevel {
    Novice,
    Contributor,
    Builder,
    Guardian,
    Legend,
}

/// Return data of `query_reputation`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct ReputationView {
    pub agent: Pubkey,
    pub name: String,
    pub metadata_uri: String,
    pub reputation_score: u64,
    pub projected_score: u64,
    pub pending_decay: u64,
    pub task_count: u64,
    pub vouch_count: u64,
    pub positive_vouches: u64,
    pub negative_vouches: u64,
    pub staked_amount: u64,
    pub registered_at: i64,
    pub last_active: i64,
    pub level: ReputationLevel,
}
