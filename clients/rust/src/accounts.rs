use borsh::{BorshDeserialize, BorshSerialize};
use solana_account_info::AccountInfo;
use solana_pubkey::Pubkey;

/// An Anchor account: 8-byte discriminator followed by the borsh body. Accounts
/// are allocated at their maximum size, so trailing bytes are ignored.
pub trait ProgramAccount: BorshDeserialize {
    const DISCRIMINATOR: [u8; 8];

    fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.len() < 8 || data[..8] != Self::DISCRIMINATOR {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "account discriminator mismatch",
            ));
        }
        let mut body = &data[8..];
        Self::deserialize(&mut body)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub decay_rate: u64,
    pub reward_amount: u64,
    pub min_vouch_reputation: u64,
    pub trust_threshold: u64,
    pub max_trust_bps: u64,
    pub bump: u8,
}

impl ProgramAccount for Config {
    const DISCRIMINATOR: [u8; 8] = [155, 12, 170, 224, 30, 250, 204, 130];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct AgentProfile {
    pub agent: Pubkey,
    pub name: String,
    pub metadata_uri: String,
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

impl ProgramAccount for AgentProfile {
    const DISCRIMINATOR: [u8; 8] = [60, 227, 42, 24, 0, 87, 86, 205];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct TaskRecord {
    pub agent: Pubkey,
    pub task_id: String,
    pub proof_uri: String,
    pub reward: u64,
    pub completed_at: i64,
    pub bump: u8,
}

impl ProgramAccount for TaskRecord {
    const DISCRIMINATOR: [u8; 8] = [62, 42, 105, 214, 9, 85, 60, 158];
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct VouchRecord {
    pub voucher: Pubkey,
    pub target: Pubkey,
    pub vouch_id: u64,
    pub amount: u64,
    pub weight: u64,
    pub trust_weight_bps: u64,
    pub is_positive: bool,
    pub timestamp: i64,
    pub bump: u8,
}

impl VouchRecord {
    /// Allocated size, discriminator included.
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1 + 8 + 1;
}

impl ProgramAccount for VouchRecord {
    const DISCRIMINATOR: [u8; 8] = [17, 193, 183, 51, 0, 197, 20, 55];
}

macro_rules! impl_account_conversions {
    ($($account:ty),* $(,)?) => {
        $(
            impl<'a> TryFrom<&solana_account_info::AccountInfo<'a>> for $account {
                type Error = std::io::Error;

                fn try_from(account_info: &AccountInfo<'a>) -> Result<Self, Self::Error> {
                    let data: &[u8] = &(*account_info.data).borrow();
                    Self::from_bytes(data)
                }
            }

            impl TryFrom<&solana_account::Account> for $account {
                type Error = std::io::Error;

                fn try_from(account: &solana_account::Account) -> Result<Self, Self::Error> {
                    Self::from_bytes(&account.data)
                }
            }
        )*
    };
}

impl_account_conversions!(Config, AgentProfile, TaskRecord, VouchRecord);
