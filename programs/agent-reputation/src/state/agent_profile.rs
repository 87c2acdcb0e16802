use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_METADATA_URI_LEN: usize = 200;

/// Signed change to a reputation score. Decreases saturate at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDelta {
    Increase(u64),
    Decrease(u64),
}

impl ScoreDelta {
    pub fn signed(magnitude: u64, positive: bool) -> Self {
        if positive {
            ScoreDelta::Increase(magnitude)
        } else {
            ScoreDelta::Decrease(magnitude)
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct AgentProfile {
    pub agent: Pubkey,
    #[max_len(50)]
    pub name: String,
    #[max_len(200)]
    pub metadata_uri: String, // resolved off-chain, never parsed here
    pub reputation_score: u64,
    pub task_count: u64,
    pub vouch_count: u64,
    pub positive_vouches: u64,
    pub negative_vouches: u64,
    pub vouches_cast: u64,
    pub staked_amount: u64,
    pub registered_at: i64,
    pub last_active: i64,
    pub bump: u8,
}

impl AgentProfile {
    pub fn new(
        agent: Pubkey,
        name: String,
        metadata_uri: String,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(!name.trim().is_empty(), ErrorCode::InvalidName);
        require!(name.len() <= MAX_NAME_LEN, ErrorCode::NameTooLong);
        require!(
            metadata_uri.len() <= MAX_METADATA_URI_LEN,
            ErrorCode::MetadataUriTooLong
        );

        Ok(Self {
            agent,
            name,
            metadata_uri,
            reputation_score: 0,
            task_count: 0,
            vouch_count: 0,
            positive_vouches: 0,
            negative_vouches: 0,
            vouches_cast: 0,
            staked_amount: 0,
            registered_at: now,
            last_active: now,
            bump,
        })
    }

    /// The only place the score is written. Returns the new score.
    pub fn apply_score_delta(&mut self, delta: ScoreDelta, now: i64) -> Result<u64> {
        self.reputation_score = match delta {
            ScoreDelta::Increase(amount) => self
                .reputation_score
                .checked_add(amount)
                .ok_or(ErrorCode::Overflow)?,
            ScoreDelta::Decrease(amount) => self.reputation_score.saturating_sub(amount),
        };
        self.touch(now);

        Ok(self.reputation_score)
    }

    pub fn record_task(&mut self, reward: u64, now: i64) -> Result<u64> {
        let task_count = self.task_count.checked_add(1).ok_or(ErrorCode::Overflow)?;
        self.reputation_score
            .checked_add(reward)
            .ok_or(ErrorCode::Overflow)?;

        self.task_count = task_count;
        self.apply_score_delta(ScoreDelta::Increase(reward), now)
    }

    pub fn record_vouch_received(&mut self, delta: ScoreDelta, now: i64) -> Result<u64> {
        let vouch_count = self.vouch_count.checked_add(1).ok_or(ErrorCode::Overflow)?;
        let (positive_vouches, negative_vouches) = match delta {
            ScoreDelta::Increase(amount) => {
                self.reputation_score
                    .checked_add(amount)
                    .ok_or(ErrorCode::Overflow)?;
                (
                    self.positive_vouches
                        .checked_add(1)
                        .ok_or(ErrorCode::Overflow)?,
                    self.negative_vouches,
                )
            }
            ScoreDelta::Decrease(_) => (
                self.positive_vouches,
                self.negative_vouches
                    .checked_add(1)
                    .ok_or(ErrorCode::Overflow)?,
            ),
        };

        self.vouch_count = vouch_count;
        self.positive_vouches = positive_vouches;
        self.negative_vouches = negative_vouches;
        self.apply_score_delta(delta, now)
    }

    /// Books `amount` as escrowed and consumes the next vouch sequence number,
    /// which is returned. Stake only ever grows here.
    pub fn record_vouch_cast(&mut self, amount: u64) -> Result<u64> {
        let vouch_id = self.vouches_cast;
        let staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;
        let vouches_cast = vouch_id.checked_add(1).ok_or(ErrorCode::Overflow)?;

        self.staked_amount = staked_amount;
        self.vouches_cast = vouches_cast;

        Ok(vouch_id)
    }

    pub fn idle_seconds(&self, now: i64) -> u64 {
        now.saturating_sub(self.last_active).max(0) as u64
    }

    /// Linear decay accrued since `last_active`, never more than the score itself.
    pub fn pending_decay(&self, now: i64, decay_rate: u64) -> u64 {
        self.idle_seconds(now)
            .saturating_mul(decay_rate)
            .min(self.reputation_score)
    }

    pub fn projected_score(&self, now: i64, decay_rate: u64) -> u64 {
        self.reputation_score - self.pending_decay(now, decay_rate)
    }

    /// Applies pending decay and restarts the idle window. Returns the amount removed.
    pub fn apply_decay(&mut self, now: i64, decay_rate: u64) -> Result<u64> {
        let decayed = self.pending_decay(now, decay_rate);
        self.apply_score_delta(ScoreDelta::Decrease(decayed), now)?;
        Ok(decayed)
    }

    fn touch(&mut self, now: i64) {
        if now > self.last_active {
            self.last_active = now;
        }
    }
}
