//! Client for the `agent_reputation` program: instruction builders, account
//! decoders, PDA derivation and the program's error codes.

pub mod accounts;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod types;

pub use accounts::*;
pub use errors::*;
pub use pda::*;

use solana_pubkey::Pubkey;

pub const AGENT_REPUTATION_ID: Pubkey =
    solana_pubkey::pubkey!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
