use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::TaskCompleted;
use crate::state::{AgentProfile, Config, TaskRecord};
use crate::utils::{init_pda, load_account, store_account};

#[derive(Accounts)]
pub struct CompleteTask<'info> {
    #[account(mut)]
    pub agent: Signer<'info>,

    /// CHECK: decoded in the handler so an unregistered signer maps to `Unauthorized`
    #[account(
        mut,
        seeds = [b"agent", agent.key().as_ref()],
        bump,
    )]
    pub agent_profile: UncheckedAccount<'info>,

    /// CHECK: created in the handler; a replayed task id fails with `DuplicateTask`
    #[account(mut)]
    pub task_record: UncheckedAccount<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> CompleteTask<'info> {
    pub fn complete_task(&mut self, task_id: String, proof_uri: String) -> Result<()> {
        let agent_key = self.agent.key();
        let mut profile: AgentProfile =
            load_account(&self.agent_profile, ErrorCode::Unauthorized)?;
        require_keys_eq!(profile.agent, agent_key, ErrorCode::Unauthorized);

        TaskRecord::validate(&task_id, &proof_uri)?;

        let task_seed = TaskRecord::seed_hash(&task_id);
        let bump = init_pda(
            &self.agent,
            &self.task_record,
            &[b"task", agent_key.as_ref(), task_seed.as_ref()],
            8 + TaskRecord::INIT_SPACE,
            &self.system_program,
            ErrorCode::DuplicateTask,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let reward = self.config.reward_amount;
        let reputation_score = profile.record_task(reward, now)?;

        let record = TaskRecord {
            agent: agent_key,
            task_id,
            proof_uri,
            reward,
            completed_at: now,
            bump,
        };
        store_account(&self.task_record, &record)?;
        store_account(&self.agent_profile, &profile)?;

        msg!("Task completed by {}: +{}", agent_key, reward);
        emit!(TaskCompleted {
            agent: agent_key,
            task_id: record.task_id,
            proof_uri: record.proof_uri,
            reward,
            task_count: profile.task_count,
            reputation_score,
        });

        Ok(())
    }
}
