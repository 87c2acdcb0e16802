use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::ConfigInitialized;
use crate::state::{Config, DEFAULT_MAX_TRUST_BPS, DEFAULT_TRUST_THRESHOLD};
use crate::utils::{init_pda, program_data_address, store_account};

/// Only the program's upgrade authority may create the singleton config.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: created in the handler; address and emptiness are verified by `init_pda`
    #[account(mut)]
    pub config: UncheckedAccount<'info>,

    #[account(
        address = program_data_address() @ ErrorCode::InvalidPDAAccount,
        constraint = program_data.upgrade_authority_address == Some(authority.key())
            @ ErrorCode::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        min_stake: u64,
        decay_rate: u64,
        reward_amount: u64,
    ) -> Result<()> {
        require!(reward_amount > 0, ErrorCode::InvalidParameter);

        let bump = init_pda(
            &self.authority,
            &self.config,
            &[b"config"],
            8 + Config::INIT_SPACE,
            &self.system_program,
            ErrorCode::AlreadyInitialized,
        )?;

        let config = Config {
            authority: self.authority.key(),
            min_stake,
            decay_rate,
            reward_amount,
            min_vouch_reputation: 0,
            trust_threshold: DEFAULT_TRUST_THRESHOLD,
            max_trust_bps: DEFAULT_MAX_TRUST_BPS,
            bump,
        };
        store_account(&self.config, &config)?;

        emit!(ConfigInitialized {
            authority: config.authority,
            min_stake,
            decay_rate,
            reward_amount,
        });

        Ok(())
    }
}
