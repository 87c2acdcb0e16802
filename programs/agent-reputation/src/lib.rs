use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

#[program]
pub mod agent_reputation {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        min_stake: u64,
        decay_rate: u64,
        reward_amount: u64,
    ) -> Result<()> {
        ctx.accounts.initialize(min_stake, decay_rate, reward_amount)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        min_stake: Option<u64>,
        decay_rate: Option<u64>,
        reward_amount: Option<u64>,
        min_vouch_reputation: Option<u64>,
        trust_threshold: Option<u64>,
        max_trust_bps: Option<u64>,
    ) -> Result<()> {
        ctx.accounts.update_config(
            min_stake,
            decay_rate,
            reward_amount,
            min_vouch_reputation,
            trust_threshold,
            max_trust_bps,
        )
    }

    pub fn register_agent(
        ctx: Context<RegisterAgent>,
        name: String,
        metadata_uri: String,
    ) -> Result<()> {
        ctx.accounts.register_agent(name, metadata_uri)
    }

    pub fn complete_task(
        ctx: Context<CompleteTask>,
        task_id: String,
        proof_uri: String,
    ) -> Result<()> {
        ctx.accounts.complete_task(task_id, proof_uri)
    }

    pub fn vouch(
        ctx: Context<Vouch>,
        target_agent: Pubkey,
        amount: u64,
        is_positive: bool,
    ) -> Result<()> {
        ctx.accounts.vouch(target_agent, amount, is_positive)
    }

    pub fn decay(ctx: Context<Decay>) -> Result<()> {
        ctx.accounts.decay()
    }

    pub fn query_reputation(ctx: Context<QueryReputation>) -> Result<ReputationView> {
        ctx.accounts.query_reputation()
    }
}
