use agent_reputation_client::AgentReputationError;
use litesvm::types::TransactionResult;
use solana_sdk::{instruction::InstructionError, transaction::TransactionError};

pub struct Helpers;

impl Helpers {
    pub fn assert_program_error(result: TransactionResult, expected: AgentReputationError) {
        match result {
            Ok(meta) => panic!(
                "Expected {:?}, transaction succeeded: {:#?}",
                expected, meta.logs
            ),
            Err(failed) => match failed.err {
                TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                    assert_eq!(
                        AgentReputationError::from_code(code),
                        Some(expected.clone()),
                        "logs: {:#?}",
                        failed.meta.logs
                    );
                }
                other => panic!("Expected {:?}, got {:?}", expected, other),
            },
        }
    }
}
