use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::errors::ErrorCode;

pub const MAX_TASK_ID_LEN: usize = 64;
pub const MAX_PROOF_URI_LEN: usize = 200;

#[account]
#[derive(InitSpace)]
pub struct TaskRecord {
    pub agent: Pubkey,
    #[max_len(64)]
    pub task_id: String,
    #[max_len(200)]
    pub proof_uri: String, // attested off-chain before the instruction is sent
    pub reward: u64,
    pub completed_at: i64,
    pub bump: u8,
}

impl TaskRecord {
    /// PDA seed for a task id. Ids can exceed the 32-byte seed limit, so they are hashed.
    pub fn seed_hash(task_id: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(task_id.as_bytes());
        hasher.finalize().into()
    }

    pub fn validate(task_id: &str, proof_uri: &str) -> Result<()> {
        require!(
            !task_id.is_empty() && task_id.len() <= MAX_TASK_ID_LEN,
            ErrorCode::InvalidTaskId
        );
        require!(
            proof_uri.len() <= MAX_PROOF_URI_LEN,
            ErrorCode::ProofUriTooLong
        );
        Ok(())
    }
}
