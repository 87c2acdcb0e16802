use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::ConfigUpdated;
use crate::state::{Config, BASE_TRUST_BPS};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.is_authority(&authority.key()) @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(
        &mut self,
        min_stake: Option<u64>,
        decay_rate: Option<u64>,
        reward_amount: Option<u64>,
        min_vouch_reputation: Option<u64>,
        trust_threshold: Option<u64>,
        max_trust_bps: Option<u64>,
    ) -> Result<()> {
        if let Some(min_stake) = min_stake {
            self.config.min_stake = min_stake;
        }

        if let Some(decay_rate) = decay_rate {
            self.config.decay_rate = decay_rate;
        }

        if let Some(reward_amount) = reward_amount {
            require!(reward_amount > 0, ErrorCode::InvalidParameter);
            self.config.reward_amount = reward_amount;
        }

        if let Some(min_vouch_reputation) = min_vouch_reputation {
            self.config.min_vouch_reputation = min_vouch_reputation;
        }

        if let Some(trust_threshold) = trust_threshold {
            self.config.trust_threshold = trust_threshold;
        }

        if let Some(max_trust_bps) = max_trust_bps {
            require!(max_trust_bps >= BASE_TRUST_BPS, ErrorCode::InvalidParameter);
            self.config.max_trust_bps = max_trust_bps;
        }

        emit!(ConfigUpdated {
            authority: self.config.authority,
            min_stake: self.config.min_stake,
            decay_rate: self.config.decay_rate,
            reward_amount: self.config.reward_amount,
            min_vouch_reputation: self.config.min_vouch_reputation,
            trust_threshold: self.config.trust_threshold,
            max_trust_bps: self.config.max_trust_bps,
        });

        Ok(())
    }
}
