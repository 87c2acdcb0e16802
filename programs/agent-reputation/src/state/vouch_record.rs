use anchor_lang::prelude::*;

use crate::state::ScoreDelta;

#[account]
#[derive(InitSpace)]
pub struct VouchRecord {
    pub voucher: Pubkey,
    pub target: Pubkey,
    pub vouch_id: u64,
    pub amount: u64,
    pub weight: u64, // score moved on the target
    pub trust_weight_bps: u64,
    pub is_positive: bool,
    pub timestamp: i64,
    pub bump: u8,
}

impl VouchRecord {
    pub fn score_delta(&self) -> ScoreDelta {
        ScoreDelta::signed(self.weight, self.is_positive)
    }
}
