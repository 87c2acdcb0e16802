use anchor_lang::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Agent already registered")]
    AlreadyRegistered,
    #[msg("Insufficient stake")]
    InsufficientStake,
    #[msg("Cannot vouch for yourself")]
    SelfVouch,
    #[msg("Target agent not registered")]
    TargetNotRegistered,
    #[msg("Reputation too low")]
    ReputationTooLow,
    #[msg("Account already initialized")]
    AlreadyInitialized,
    #[msg("Agent not found")]
    AgentNotFound,
    #[msg("Task already completed")]
    DuplicateTask,
    #[msg("Agent name must not be empty")]
    InvalidName,
    #[msg("Agent name too long")]
    NameTooLong,
    #[msg("Metadata URI too long")]
    MetadataUriTooLong,
    #[msg("Invalid task id")]
    InvalidTaskId,
    #[msg("Proof URI too long")]
    ProofUriTooLong,
    #[msg("Invalid parameter value")]
    InvalidParameter,
    #[msg("Overflow")]
    Overflow,
    #[msg("Invalid PDA account")]
    InvalidPDAAccount,
}
