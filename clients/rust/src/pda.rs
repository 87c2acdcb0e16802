use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::AGENT_REPUTATION_ID;

pub const BPF_LOADER_UPGRADEABLE_ID: Pubkey =
    solana_pubkey::pubkey!("BPFLoaderUpgradeab1e11111111111111111111111");

pub fn find_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"config"], &AGENT_REPUTATION_ID)
}

pub fn find_agent_profile_pda(agent: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"agent", agent.as_ref()], &AGENT_REPUTATION_ID)
}

pub fn task_seed_hash(task_id: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(task_id.as_bytes());
    hasher.finalize().into()
}

pub fn find_task_record_pda(agent: &Pubkey, task_id: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"task", agent.as_ref(), &task_seed_hash(task_id)],
        &AGENT_REPUTATION_ID,
    )
}

pub fn find_vouch_record_pda(voucher: &Pubkey, vouch_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"vouch", voucher.as_ref(), &vouch_id.to_le_bytes()],
        &AGENT_REPUTATION_ID,
    )
}

pub fn find_stake_vault_pda(voucher: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"stake_vault", voucher.as_ref()], &AGENT_REPUTATION_ID)
}

/// ProgramData account of the deployed program; holds its upgrade authority.
pub fn find_program_data_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AGENT_REPUTATION_ID.as_ref()], &BPF_LOADER_UPGRADEABLE_ID)
}
