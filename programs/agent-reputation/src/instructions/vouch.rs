use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::ErrorCode;
use crate::events::VouchCast;
use crate::state::{AgentProfile, Config, VouchRecord};
use crate::utils::{init_pda, load_account, store_account, vouch_weight};

#[derive(Accounts)]
#[instruction(target_agent: Pubkey)]
pub struct Vouch<'info> {
    #[account(
        mut,
        constraint = voucher.key() != target_agent @ ErrorCode::SelfVouch
    )]
    pub voucher: Signer<'info>,

    /// CHECK: decoded in the handler so an unregistered voucher maps to `Unauthorized`
    #[account(
        mut,
        seeds = [b"agent", voucher.key().as_ref()],
        bump,
    )]
    pub voucher_profile: UncheckedAccount<'info>,

    /// CHECK: decoded in the handler so a missing target maps to `TargetNotRegistered`
    #[account(
        mut,
        seeds = [b"agent", target_agent.as_ref()],
        bump,
    )]
    pub target_profile: UncheckedAccount<'info>,

    /// CHECK: created in the handler at the voucher's next sequence number
    #[account(mut)]
    pub vouch_record: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"stake_vault", voucher.key().as_ref()],
        bump,
    )]
    pub stake_vault: SystemAccount<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vouch<'info> {
    pub fn vouch(&mut self, target_agent: Pubkey, amount: u64, is_positive: bool) -> Result<()> {
        let voucher_key = self.voucher.key();
        let mut voucher_profile: AgentProfile =
            load_account(&self.voucher_profile, ErrorCode::Unauthorized)?;
        let mut target_profile: AgentProfile =
            load_account(&self.target_profile, ErrorCode::TargetNotRegistered)?;

        require!(
            self.config.meets_min_stake(amount),
            ErrorCode::InsufficientStake
        );
        require!(
            self.config.allows_voucher(voucher_profile.reputation_score),
            ErrorCode::ReputationTooLow
        );

        // The voucher also pays the record's rent, tops the vault up to its
        // rent-exempt minimum and must stay rent-exempt itself.
        let rent = Rent::get()?;
        let system_account_minimum = rent.minimum_balance(0);
        let vault_top_up = system_account_minimum.saturating_sub(self.stake_vault.lamports());
        let required_lamports = [
            vault_top_up,
            rent.minimum_balance(8 + VouchRecord::INIT_SPACE),
            system_account_minimum,
        ]
        .into_iter()
        .try_fold(amount, |total, cost| total.checked_add(cost))
        .ok_or(ErrorCode::Overflow)?;
        require!(
            self.voucher.lamports() >= required_lamports,
            ErrorCode::InsufficientStake
        );

        let now = Clock::get()?.unix_timestamp;
        let trust_weight_bps = self
            .config
            .trust_weight_bps(voucher_profile.reputation_score);
        let vouch_id = voucher_profile.record_vouch_cast(amount)?;
        let vouch_id_bytes = vouch_id.to_le_bytes();

        let bump = init_pda(
            &self.voucher,
            &self.vouch_record,
            &[b"vouch", voucher_key.as_ref(), vouch_id_bytes.as_ref()],
            8 + VouchRecord::INIT_SPACE,
            &self.system_program,
            ErrorCode::AlreadyInitialized,
        )?;

        let record = VouchRecord {
            voucher: voucher_key,
            target: target_agent,
            vouch_id,
            amount,
            weight: vouch_weight(amount, trust_weight_bps),
            trust_weight_bps,
            is_positive,
            timestamp: now,
            bump,
        };
        let target_score = target_profile.record_vouch_received(record.score_delta(), now)?;

        self.escrow(amount + vault_top_up)?;

        store_account(&self.vouch_record, &record)?;
        store_account(&self.voucher_profile, &voucher_profile)?;
        store_account(&self.target_profile, &target_profile)?;

        msg!(
            "Vouch {} -> {} | amount: {}, weight: {}, trust: {}bps, positive: {}",
            voucher_key,
            target_agent,
            amount,
            record.weight,
            trust_weight_bps,
            is_positive
        );
        emit!(VouchCast {
            voucher: voucher_key,
            target: target_agent,
            vouch_id,
            amount,
            weight: record.weight,
            trust_weight_bps,
            is_positive,
            target_score,
            voucher_staked: voucher_profile.staked_amount,
        });

        Ok(())
    }

    /// The vault is a plain system account, so a transfer also creates it.
    fn escrow(&self, lamports: u64) -> Result<()> {
        let cpi_accounts = system_program::Transfer {
            from: self.voucher.to_account_info(),
            to: self.stake_vault.to_account_info(),
        };
        let cpi_context = CpiContext::new(self.system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_context, lamports)
    }
}
