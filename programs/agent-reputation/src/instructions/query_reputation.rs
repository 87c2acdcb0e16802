use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::{AgentProfile, Config, ReputationLevel};
use crate::utils::load_account;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
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
    pub level: ReputationLevel, // of the projected score
}

impl ReputationView {
    pub fn project(profile: AgentProfile, now: i64, decay_rate: u64) -> Self {
        let pending_decay = profile.pending_decay(now, decay_rate);
        let projected_score = profile.reputation_score - pending_decay;

        Self {
            agent: profile.agent,
            reputation_score: profile.reputation_score,
            projected_score,
            pending_decay,
            task_count: profile.task_count,
            vouch_count: profile.vouch_count,
            positive_vouches: profile.positive_vouches,
            negative_vouches: profile.negative_vouches,
            staked_amount: profile.staked_amount,
            registered_at: profile.registered_at,
            last_active: profile.last_active,
            name: profile.name,
            metadata_uri: profile.metadata_uri,
            level: ReputationLevel::from_score(projected_score),
        }
    }
}

/// Read-only: nothing here is marked `mut`.
#[derive(Accounts)]
pub struct QueryReputation<'info> {
    /// CHECK: owner and discriminator are checked by `load_account`
    pub agent_profile: UncheckedAccount<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> QueryReputation<'info> {
    pub fn query_reputation(&self) -> Result<ReputationView> {
        let profile: AgentProfile = load_account(&self.agent_profile, ErrorCode::AgentNotFound)?;
        let now = Clock::get()?.unix_timestamp;

        Ok(ReputationView::project(profile, now, self.config.decay_rate))
    }
}
