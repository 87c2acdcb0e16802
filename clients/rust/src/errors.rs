use num_derive::FromPrimitive;
use solana_program_error::ProgramError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum AgentReputationError {
    /// 6000 (0x1770)
    #[error("Unauthorized")]
    Unauthorized = 0x1770,
    /// 6001 (0x1771)
    #[error("Agent already registered")]
    AlreadyRegistered = 0x1771,
    /// 6002 (0x1772)
    #[error("Insufficient stake")]
    InsufficientStake = 0x1772,
    /// 6003 (0x1773)
    #[error("Cannot vouch for yourself")]
    SelfVouch = 0x1773,
    /// 6004 (0x1774)
    #[error("Target agent not registered")]
    TargetNotRegistered = 0x1774,
    /// 6005 (0x1775)
    #[error("Reputation too low")]
    ReputationTooLow = 0x1775,
    /// 6006 (0x1776)
    #[error("Account already initialized")]
    AlreadyInitialized = 0x1776,
    /// 6007 (0x1777)
    #[error("Agent not found")]
    AgentNotFound = 0x1777,
    /// 6008 (0x1778)
    #[error("Task already completed")]
    DuplicateTask = 0x1778,
    /// 6009 (0x1779)
    #[error("Agent name must not be empty")]
    InvalidName = 0x1779,
    /// 6010 (0x177A)
    #[error("Agent name too long")]
    NameTooLong = 0x177A,
    /// 6011 (0x177B)
    #[error("Metadata URI too long")]
    MetadataUriTooLong = 0x177B,
    /// 6012 (0x177C)
    #[error("Invalid task id")]
    InvalidTaskId = 0x177C,
    /// 6013 (0x177D)
    #[error("Proof URI too long")]
    ProofUriTooLong = 0x177D,
    /// 6014 (0x177E)
    #[error("Invalid parameter value")]
    InvalidParameter = 0x177E,
    /// 6015 (0x177F)
    #[error("Overflow")]
    Overflow = 0x177F,
    /// 6016 (0x1780)
    #[error("Invalid PDA account")]
    InvalidPDAAccount = 0x1780,
}

impl AgentReputationError {
    pub fn code(&self) -> u32 {
        self.clone() as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        num_traits::FromPrimitive::from_u32(code)
    }
}

impl From<AgentReputationError> for ProgramError {
    fn from(e: AgentReputationError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
