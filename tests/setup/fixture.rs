use agent_reputation_client::{
    find_program_data_address, AGENT_REPUTATION_ID, BPF_LOADER_UPGRADEABLE_ID,
};
use litesvm::LiteSVM;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use utils::Utils;

use crate::setup::test_data::*;
use crate::setup::Instructions;

pub struct TestFixture {
    pub svm: LiteSVM,
    pub program_id: Pubkey,
    pub payer: Keypair,
    pub authority: Keypair,

    // Agents
    pub alice: Keypair,
    pub bob: Keypair,
    pub carol: Keypair,
}

impl TestFixture {
    pub fn new() -> Self {
        assert!(
            std::path::Path::new(AGENT_REPUTATION_SO_PATH).exists(),
            "{} not found, run `anchor build` first",
            AGENT_REPUTATION_SO_PATH
        );

        let mut svm = LiteSVM::new().with_sysvars();
        let program_id = svm.deploy_program_from_id(AGENT_REPUTATION_ID, AGENT_REPUTATION_SO_PATH);

        let payer = Keypair::new();
        svm.airdrop(&payer.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund payer");

        let authority = Keypair::new();
        svm.airdrop(&authority.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund authority");
        svm.set_program_data(
            find_program_data_address().0,
            BPF_LOADER_UPGRADEABLE_ID,
            Some(authority.pubkey()),
        );

        let alice = Keypair::new();
        svm.airdrop(&alice.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund alice");

        let bob = Keypair::new();
        svm.airdrop(&bob.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund bob");

        let carol = Keypair::new();
        svm.airdrop(&carol.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Failed to fund carol");

        Self {
            svm,
            program_id,
            payer,
            authority,
            alice,
            bob,
            carol,
        }
    }

    pub fn create_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), lamports)
            .expect("Failed to fund keypair");
        keypair
    }

    pub fn with_initialize(mut self) -> Self {
        let authority = self.authority.insecure_clone();
        let result = self.initialize(
            &authority,
            DEFAULT_MIN_STAKE,
            DEFAULT_DECAY_RATE,
            DEFAULT_REWARD_AMOUNT,
        );
        assert!(result.is_ok(), "Failed to initialize config");
        self
    }

    pub fn with_register_alice(mut self) -> Self {
        let alice = self.alice.insecure_clone();
        let result = self.register_agent(&alice, ALICE_NAME, ALICE_METADATA_URI);
        assert!(result.is_ok(), "Failed to register alice");
        self
    }

    pub fn with_register_bob(mut self) -> Self {
        let bob = self.bob.insecure_clone();
        let result = self.register_agent(&bob, BOB_NAME, BOB_METADATA_URI);
        assert!(result.is_ok(), "Failed to register bob");
        self
    }

    pub fn with_register_carol(mut self) -> Self {
        let carol = self.carol.insecure_clone();
        let result = self.register_agent(&carol, CAROL_NAME, CAROL_METADATA_URI);
        assert!(result.is_ok(), "Failed to register carol");
        self
    }

    pub fn with_alice_task(mut self) -> Self {
        let alice = self.alice.insecure_clone();
        let result = self.complete_task(&alice, DEFAULT_TASK_ID, DEFAULT_PROOF_URI);
        assert!(result.is_ok(), "Failed to complete alice's task");
        self
    }
}
