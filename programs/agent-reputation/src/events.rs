use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub decay_rate: u64,
    pub reward_amount: u64,
}

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub decay_rate: u64,
    pub reward_amount: u64,
    pub min_vouch_reputation: u64,
    pub trust_threshold: u64,
    pub max_trust_bps: u64,
}

#[event]
pub struct AgentRegistered {
    pub agent: Pubkey,
    pub name: String,
    pub metadata_uri: String,
    pub timestamp: i64,
}

#[event]
pub struct TaskCompleted {
    pub agent: Pubkey,
    pub task_id: String,
    pub proof_uri: String,
    pub reward: u64,
    pub task_count: u64,
    pub reputation_score: u64,
}

#[event]
pub struct VouchCast {
    pub voucher: Pubkey,
    pub target: Pubkey,
    pub vouch_id: u64,
    pub amount: u64,
    pub weight: u64,
    pub trust_weight_bps: u64,
    pub is_positive: bool,
    pub target_score: u64,
    pub voucher_staked: u64,
}

#[event]
pub struct ReputationDecayed {
    pub agent: Pubkey,
    pub decayed: u64,
    pub reputation_score: u64,
    pub timestamp: i64,
}
