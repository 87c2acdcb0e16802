use agent_reputation_client::instructions::{
    CompleteTaskBuilder, Decay, InitializeBuilder, QueryReputation, RegisterAgentBuilder,
    UpdateConfigBuilder, VouchBuilder,
};
use litesvm::types::TransactionResult;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use utils::Utils;

use crate::setup::{Accounts, TestFixture};

pub trait Instructions {
    fn initialize(
        &mut self,
        authority: &Keypair,
        min_stake: u64,
        decay_rate: u64,
        reward_amount: u64,
    ) -> TransactionResult;

    fn update_config(
        &mut self,
        authority: &Keypair,
        decay_rate: Option<u64>,
        min_vouch_reputation: Option<u64>,
    ) -> TransactionResult;

    fn update_trust_weighting(
        &mut self,
        authority: &Keypair,
        trust_threshold: u64,
        max_trust_bps: u64,
    ) -> TransactionResult;

    fn register_agent(&mut self, agent: &Keypair, name: &str, metadata_uri: &str)
        -> TransactionResult;

    fn complete_task(&mut self, agent: &Keypair, task_id: &str, proof_uri: &str)
        -> TransactionResult;

    fn vouch(
        &mut self,
        voucher: &Keypair,
        target: &Pubkey,
        amount: u64,
        is_positive: bool,
    ) -> TransactionResult;

    fn decay(&mut self, agent: &Pubkey) -> TransactionResult;

    fn query_reputation(&mut self, agent: &Pubkey) -> TransactionResult;
}

impl Instructions for TestFixture {
    fn initialize(
        &mut self,
        authority: &Keypair,
        min_stake: u64,
        decay_rate: u64,
        reward_amount: u64,
    ) -> TransactionResult {
        let authority_pubkey = authority.pubkey();
        let instruction = InitializeBuilder::new(authority_pubkey)
            .min_stake(min_stake)
            .decay_rate(decay_rate)
            .reward_amount(reward_amount)
            .instruction();

        self.svm
            .send_tx(&[instruction], &authority_pubkey, &[authority])
    }

    fn update_config(
        &mut self,
        authority: &Keypair,
        decay_rate: Option<u64>,
        min_vouch_reputation: Option<u64>,
    ) -> TransactionResult {
        let authority_pubkey = authority.pubkey();
        let mut builder = UpdateConfigBuilder::new(authority_pubkey);
        if let Some(decay_rate) = decay_rate {
            builder.decay_rate(decay_rate);
        }
        if let Some(min_vouch_reputation) = min_vouch_reputation {
            builder.min_vouch_reputation(min_vouch_reputation);
        }

        self.svm
            .send_tx(&[builder.instruction()], &authority_pubkey, &[authority])
    }

    fn update_trust_weighting(
        &mut self,
        authority: &Keypair,
        trust_threshold: u64,
        max_trust_bps: u64,
    ) -> TransactionResult {
        let authority_pubkey = authority.pubkey();
        let instruction = UpdateConfigBuilder::new(authority_pubkey)
            .trust_threshold(trust_threshold)
            .max_trust_bps(max_trust_bps)
            .instruction();

        self.svm
            .send_tx(&[instruction], &authority_pubkey, &[authority])
    }

    fn register_agent(
        &mut self,
        agent: &Keypair,
        name: &str,
        metadata_uri: &str,
    ) -> TransactionResult {
        let agent_pubkey = agent.pubkey();
        let instruction = RegisterAgentBuilder::new(agent_pubkey)
            .name(name)
            .metadata_uri(metadata_uri)
            .instruction();

        self.svm.send_tx(&[instruction], &agent_pubkey, &[agent])
    }

    fn complete_task(
        &mut self,
        agent: &Keypair,
        task_id: &str,
        proof_uri: &str,
    ) -> TransactionResult {
        let agent_pubkey = agent.pubkey();
        let instruction = CompleteTaskBuilder::new(agent_pubkey, task_id)
            .proof_uri(proof_uri)
            .instruction();

        self.svm.send_tx(&[instruction], &agent_pubkey, &[agent])
    }

    fn vouch(
        &mut self,
        voucher: &Keypair,
        target: &Pubkey,
        amount: u64,
        is_positive: bool,
    ) -> TransactionResult {
        let voucher_pubkey = voucher.pubkey();
        let vouch_id = self
            .find_agent_profile(&voucher_pubkey)
            .map(|profile| profile.vouches_cast)
            .unwrap_or(0);

        let instruction = VouchBuilder::new(voucher_pubkey, *target, vouch_id)
            .amount(amount)
            .is_positive(is_positive)
            .instruction();

        self.svm.send_tx(&[instruction], &voucher_pubkey, &[voucher])
    }

    // paid by a third party: decay needs no signature from the agent
    fn decay(&mut self, agent: &Pubkey) -> TransactionResult {
        let payer = self.payer.insecure_clone();
        let instruction = Decay::for_agent(agent).instruction();

        self.svm.send_tx(&[instruction], &payer.pubkey(), &[&payer])
    }

    fn query_reputation(&mut self, agent: &Pubkey) -> TransactionResult {
        let payer = self.payer.insecure_clone();
        let instruction = QueryReputation::for_agent(agent).instruction();

        self.svm.send_tx(&[instruction], &payer.pubkey(), &[&payer])
    }
}
