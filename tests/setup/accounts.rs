use agent_reputation_client::{
    find_agent_profile_pda, find_config_pda, find_stake_vault_pda, find_task_record_pda,
    find_vouch_record_pda, AgentProfile, Config, ProgramAccount, TaskRecord, VouchRecord,
};
use solana_sdk::pubkey::Pubkey;

use crate::setup::TestFixture;

pub trait Accounts {
    fn get_config(&self) -> Config;
    fn find_agent_profile(&self, agent: &Pubkey) -> Option<AgentProfile>;
    fn get_agent_profile(&self, agent: &Pubkey) -> AgentProfile;
    fn get_task_record(&self, agent: &Pubkey, task_id: &str) -> TaskRecord;
    fn task_record_exists(&self, agent: &Pubkey, task_id: &str) -> bool;
    fn get_vouch_record(&self, voucher: &Pubkey, vouch_id: u64) -> VouchRecord;
    fn vouch_record_exists(&self, voucher: &Pubkey, vouch_id: u64) -> bool;
    fn stake_vault_balance(&self, voucher: &Pubkey) -> u64;
}

impl TestFixture {
    fn decode<T: ProgramAccount>(&self, address: &Pubkey) -> Option<T> {
        let account = self.svm.get_account(address)?;
        if account.data.is_empty() {
            return None;
        }
        Some(T::from_bytes(&account.data).expect("Failed to deserialize account"))
    }
}

impl Accounts for TestFixture {
    fn get_config(&self) -> Config {
        self.decode(&find_config_pda().0)
            .expect("Config account not found")
    }

    fn find_agent_profile(&self, agent: &Pubkey) -> Option<AgentProfile> {
        self.decode(&find_agent_profile_pda(agent).0)
    }

    fn get_agent_profile(&self, agent: &Pubkey) -> AgentProfile {
        self.find_agent_profile(agent)
            .expect("AgentProfile account not found")
    }

    fn get_task_record(&self, agent: &Pubkey, task_id: &str) -> TaskRecord {
        self.decode(&find_task_record_pda(agent, task_id).0)
            .expect("TaskRecord account not found")
    }

    fn task_record_exists(&self, agent: &Pubkey, task_id: &str) -> bool {
        self.decode::<TaskRecord>(&find_task_record_pda(agent, task_id).0)
            .is_some()
    }

    fn get_vouch_record(&self, voucher: &Pubkey, vouch_id: u64) -> VouchRecord {
        self.decode(&find_vouch_record_pda(voucher, vouch_id).0)
            .expect("VouchRecord account not found")
    }

    fn vouch_record_exists(&self, voucher: &Pubkey, vouch_id: u64) -> bool {
        self.decode::<VouchRecord>(&find_vouch_record_pda(voucher, vouch_id).0)
            .is_some()
    }

    fn stake_vault_balance(&self, voucher: &Pubkey) -> u64 {
        self.svm
            .get_account(&find_stake_vault_pda(voucher).0)
            .map(|account| account.lamports)
            .unwrap_or(0)
    }
}
