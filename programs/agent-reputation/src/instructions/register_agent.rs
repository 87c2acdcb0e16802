use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::AgentRegistered;
use crate::state::AgentProfile;
use crate::utils::{init_pda, store_account};

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    #[account(mut)]
    pub agent: Signer<'info>,

    /// CHECK: created in the handler; a second registration fails with `AlreadyRegistered`
    #[account(mut)]
    pub agent_profile: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterAgent<'info> {
    pub fn register_agent(&mut self, name: String, metadata_uri: String) -> Result<()> {
        let agent_key = self.agent.key();
        let now = Clock::get()?.unix_timestamp;

        // validate before paying for the account
        let mut profile = AgentProfile::new(agent_key, name, metadata_uri, now, 0)?;

        profile.bump = init_pda(
            &self.agent,
            &self.agent_profile,
            &[b"agent", agent_key.as_ref()],
            8 + AgentProfile::INIT_SPACE,
            &self.system_program,
            ErrorCode::AlreadyRegistered,
        )?;
        store_account(&self.agent_profile, &profile)?;

        msg!("Agent registered: {}", agent_key);
        emit!(AgentRegistered {
            agent: agent_key,
            name: profile.name,
            metadata_uri: profile.metadata_uri,
            timestamp: now,
        });

        Ok(())
    }
}
