//! Instruction builders. Program-derived accounts are filled in from the
//! signer identities unless overridden.

use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::pda::{
    find_agent_profile_pda, find_config_pda, find_program_data_address, find_stake_vault_pda,
    find_task_record_pda, find_vouch_record_pda,
};
use crate::AGENT_REPUTATION_ID;

const SYSTEM_PROGRAM_ID: Pubkey = solana_pubkey::pubkey!("11111111111111111111111111111111");

pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
pub const UPDATE_CONFIG_DISCRIMINATOR: [u8; 8] = [29, 158, 252, 191, 10, 83, 219, 99];
pub const REGISTER_AGENT_DISCRIMINATOR: [u8; 8] = [135, 157, 66, 195, 2, 113, 175, 30];
pub const COMPLETE_TASK_DISCRIMINATOR: [u8; 8] = [109, 167, 192, 41, 129, 108, 220, 196];
pub const VOUCH_DISCRIMINATOR: [u8; 8] = [87, 240, 8, 21, 219, 179, 242, 177];
pub const DECAY_DISCRIMINATOR: [u8; 8] = [142, 254, 22, 149, 162, 146, 1, 200];
pub const QUERY_REPUTATION_DISCRIMINATOR: [u8; 8] = [203, 45, 98, 137, 186, 178, 5, 92];

fn instruction_data<T: BorshSerialize>(discriminator: [u8; 8], args: &T) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .expect("Failed to serialize instruction args");
    data
}

#[derive(BorshSerialize)]
struct InitializeArgs {
    min_stake: u64,
    decay_rate: u64,
    reward_amount: u64,
}

pub struct InitializeBuilder {
    authority: Pubkey,
    config: Option<Pubkey>,
    min_stake: u64,
    decay_rate: u64,
    reward_amount: u64,
}

impl InitializeBuilder {
    pub fn new(authority: Pubkey) -> Self {
        Self {
            authority,
            config: None,
            min_stake: 0,
            decay_rate: 0,
            reward_amount: 0,
        }
    }

    pub fn config(&mut self, config: Pubkey) -> &mut Self {
        self.config = Some(config);
        self
    }

    pub fn min_stake(&mut self, min_stake: u64) -> &mut Self {
        self.min_stake = min_stake;
        self
    }

    pub fn decay_rate(&mut self, decay_rate: u64) -> &mut Self {
        self.decay_rate = decay_rate;
        self
    }

    pub fn reward_amount(&mut self, reward_amount: u64) -> &mut Self {
        self.reward_amount = reward_amount;
        self
    }

    pub fn instruction(&self) -> Instruction {
        let config = self.config.unwrap_or_else(|| find_config_pda().0);

        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new(self.authority, true),
                AccountMeta::new(config, false),
                AccountMeta::new_readonly(find_program_data_address().0, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(
                INITIALIZE_DISCRIMINATOR,
                &InitializeArgs {
                    min_stake: self.min_stake,
                    decay_rate: self.decay_rate,
                    reward_amount: self.reward_amount,
                },
            ),
        }
    }
}

#[derive(BorshSerialize, Default)]
struct UpdateConfigArgs {
    min_stake: Option<u64>,
    decay_rate: Option<u64>,
    reward_amount: Option<u64>,
    min_vouch_reputation: Option<u64>,
    trust_threshold: Option<u64>,
    max_trust_bps: Option<u64>,
}

pub struct UpdateConfigBuilder {
    authority: Pubkey,
    args: UpdateConfigArgs,
}

impl UpdateConfigBuilder {
    pub fn new(authority: Pubkey) -> Self {
        Self {
            authority,
            args: UpdateConfigArgs::default(),
        }
    }

    pub fn min_stake(&mut self, min_stake: u64) -> &mut Self {
        self.args.min_stake = Some(min_stake);
        self
    }

    pub fn decay_rate(&mut self, decay_rate: u64) -> &mut Self {
        self.args.decay_rate = Some(decay_rate);
        self
    }

    pub fn reward_amount(&mut self, reward_amount: u64) -> &mut Self {
        self.args.reward_amount = Some(reward_amount);
        self
    }

    pub fn min_vouch_reputation(&mut self, min_vouch_reputation: u64) -> &mut Self {
        self.args.min_vouch_reputation = Some(min_vouch_reputation);
        self
    }

    pub fn trust_threshold(&mut self, trust_threshold: u64) -> &mut Self {
        self.args.trust_threshold = Some(trust_threshold);
        self
    }

    pub fn max_trust_bps(&mut self, max_trust_bps: u64) -> &mut Self {
        self.args.max_trust_bps = Some(max_trust_bps);
        self
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new_readonly(self.authority, true),
                AccountMeta::new(find_config_pda().0, false),
            ],
            data: instruction_data(UPDATE_CONFIG_DISCRIMINATOR, &self.args),
        }
    }
}

#[derive(BorshSerialize)]
struct RegisterAgentArgs<'a> {
    name: &'a str,
    metadata_uri: &'a str,
}

pub struct RegisterAgentBuilder {
    agent: Pubkey,
    agent_profile: Option<Pubkey>,
    name: String,
    metadata_uri: String,
}

impl RegisterAgentBuilder {
    pub fn new(agent: Pubkey) -> Self {
        Self {
            agent,
            agent_profile: None,
            name: String::new(),
            metadata_uri: String::new(),
        }
    }

    pub fn agent_profile(&mut self, agent_profile: Pubkey) -> &mut Self {
        self.agent_profile = Some(agent_profile);
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn metadata_uri(&mut self, metadata_uri: impl Into<String>) -> &mut Self {
        self.metadata_uri = metadata_uri.into();
        self
    }

    pub fn instruction(&self) -> Instruction {
        let agent_profile = self
            .agent_profile
            .unwrap_or_else(|| find_agent_profile_pda(&self.agent).0);

        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new(self.agent, true),
                AccountMeta::new(agent_profile, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(
                REGISTER_AGENT_DISCRIMINATOR,
                &RegisterAgentArgs {
                    name: &self.name,
                    metadata_uri: &self.metadata_uri,
                },
            ),
        }
    }
}

#[derive(BorshSerialize)]
struct CompleteTaskArgs<'a> {
    task_id: &'a str,
    proof_uri: &'a str,
}

pub struct CompleteTaskBuilder {
    agent: Pubkey,
    task_id: String,
    proof_uri: String,
}

impl CompleteTaskBuilder {
    pub fn new(agent: Pubkey, task_id: impl Into<String>) -> Self {
        Self {
            agent,
            task_id: task_id.into(),
            proof_uri: String::new(),
        }
    }

    pub fn proof_uri(&mut self, proof_uri: impl Into<String>) -> &mut Self {
        self.proof_uri = proof_uri.into();
        self
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new(self.agent, true),
                AccountMeta::new(find_agent_profile_pda(&self.agent).0, false),
                AccountMeta::new(find_task_record_pda(&self.agent, &self.task_id).0, false),
                AccountMeta::new_readonly(find_config_pda().0, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(
                COMPLETE_TASK_DISCRIMINATOR,
                &CompleteTaskArgs {
                    task_id: &self.task_id,
                    proof_uri: &self.proof_uri,
                },
            ),
        }
    }
}

#[derive(BorshSerialize)]
struct VouchArgs {
    target_agent: Pubkey,
    amount: u64,
    is_positive: bool,
}

/// `vouch_id` must be the voucher's current `AgentProfile::vouches_cast`.
pub struct VouchBuilder {
    voucher: Pubkey,
    target_agent: Pubkey,
    vouch_id: u64,
    amount: u64,
    is_positive: bool,
}

impl VouchBuilder {
    pub fn new(voucher: Pubkey, target_agent: Pubkey, vouch_id: u64) -> Self {
        Self {
            voucher,
            target_agent,
            vouch_id,
            amount: 0,
            is_positive: true,
        }
    }

    pub fn amount(&mut self, amount: u64) -> &mut Self {
        self.amount = amount;
        self
    }

    pub fn is_positive(&mut self, is_positive: bool) -> &mut Self {
        self.is_positive = is_positive;
        self
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new(self.voucher, true),
                AccountMeta::new(find_agent_profile_pda(&self.voucher).0, false),
                AccountMeta::new(find_agent_profile_pda(&self.target_agent).0, false),
                AccountMeta::new(find_vouch_record_pda(&self.voucher, self.vouch_id).0, false),
                AccountMeta::new(find_stake_vault_pda(&self.voucher).0, false),
                AccountMeta::new_readonly(find_config_pda().0, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(
                VOUCH_DISCRIMINATOR,
                &VouchArgs {
                    target_agent: self.target_agent,
                    amount: self.amount,
                    is_positive: self.is_positive,
                },
            ),
        }
    }
}

/// Anyone may send this; no signer is required beyond the fee payer.
pub struct Decay {
    pub agent_profile: Pubkey,
    pub config: Pubkey,
}

impl Decay {
    pub fn for_agent(agent: &Pubkey) -> Self {
        Self {
            agent_profile: find_agent_profile_pda(agent).0,
            config: find_config_pda().0,
        }
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new(self.agent_profile, false),
                AccountMeta::new_readonly(self.config, false),
            ],
            data: DECAY_DISCRIMINATOR.to_vec(),
        }
    }
}

pub struct QueryReputation {
    pub agent_profile: Pubkey,
    pub config: Pubkey,
}

impl QueryReputation {
    pub fn for_agent(agent: &Pubkey) -> Self {
        Self {
            agent_profile: find_agent_profile_pda(agent).0,
            config: find_config_pda().0,
        }
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: AGENT_REPUTATION_ID,
            accounts: vec![
                AccountMeta::new_readonly(self.agent_profile, false),
                AccountMeta::new_readonly(self.config, false),
            ],
            data: QUERY_REPUTATION_DISCRIMINATOR.to_vec(),
        }
    }
}
