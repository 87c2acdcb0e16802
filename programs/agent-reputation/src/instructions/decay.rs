use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::ReputationDecayed;
use crate::state::{AgentProfile, Config};
use crate::utils::{load_account, store_account};

/// Permissionless: decay can only lower a score.
#[derive(Accounts)]
pub struct Decay<'info> {
    /// CHECK: owner and discriminator are checked by `load_account`
    #[account(mut)]
    pub agent_profile: UncheckedAccount<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> Decay<'info> {
    pub fn decay(&mut self) -> Result<()> {
        let mut profile: AgentProfile =
            load_account(&self.agent_profile, ErrorCode::AgentNotFound)?;

        let now = Clock::get()?.unix_timestamp;
        let decayed = profile.apply_decay(now, self.config.decay_rate)?;
        store_account(&self.agent_profile, &profile)?;

        emit!(ReputationDecayed {
            agent: profile.agent,
            decayed,
            reputation_score: profile.reputation_score,
            timestamp: now,
        });

        Ok(())
    }
}
