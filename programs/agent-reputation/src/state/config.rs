use anchor_lang::prelude::*;

/// 1.0x in basis points.
pub const BASE_TRUST_BPS: u64 = 10_000;
pub const DEFAULT_TRUST_THRESHOLD: u64 = 1_000;
pub const DEFAULT_MAX_TRUST_BPS: u64 = 30_000;

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub decay_rate: u64, // reputation lost per idle second
    pub reward_amount: u64,
    pub min_vouch_reputation: u64, // 0 disables the check
    pub trust_threshold: u64,
    pub max_trust_bps: u64,
    pub bump: u8,
}

impl Config {
    pub fn is_authority(&self, signer: &Pubkey) -> bool {
        self.authority == *signer
    }

    pub fn meets_min_stake(&self, amount: u64) -> bool {
        amount > 0 && amount >= self.min_stake
    }

    pub fn allows_voucher(&self, voucher_reputation: u64) -> bool {
        voucher_reputation >= self.min_vouch_reputation
    }

    /// Multiplier applied to a vouch, in basis points. Vouchers at or below
    /// `trust_threshold` count 1.0x; above it the bonus grows linearly with
    /// the excess and is capped at `max_trust_bps`.
    pub fn trust_weight_bps(&self, voucher_reputation: u64) -> u64 {
        if self.trust_threshold == 0 || voucher_reputation <= self.trust_threshold {
            return BASE_TRUST_BPS;
        }

        let excess = voucher_reputation - self.trust_threshold;
        let bonus = excess
            .saturating_mul(self.max_trust_bps.saturating_sub(BASE_TRUST_BPS))
            / self.trust_threshold;

        BASE_TRUST_BPS
            .saturating_add(bonus)
            .min(self.max_trust_bps.max(BASE_TRUST_BPS))
    }
}
