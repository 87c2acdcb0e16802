use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::Owner;

use crate::errors::ErrorCode;
use crate::state::BASE_TRUST_BPS;

/// Creates a program-owned PDA at `target_account`, failing with `already_exists`
/// when the record is already there. An address that was only sent lamports is
/// topped up, allocated and assigned instead. Returns the canonical bump.
pub fn init_pda<'info>(
    payer: &Signer<'info>,
    target_account: &AccountInfo<'info>,
    seeds: &[&[u8]],
    space: usize,
    system_program: &Program<'info, System>,
    already_exists: ErrorCode,
) -> Result<u8> {
    let (pda, bump) = Pubkey::find_program_address(seeds, &crate::ID);
    require_keys_eq!(target_account.key(), pda, ErrorCode::InvalidPDAAccount);

    if *target_account.owner == crate::ID || !target_account.data_is_empty() {
        return Err(already_exists.into());
    }

    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(space);
    let current_lamports = target_account.lamports();

    let bump_seed = &[bump];
    let mut signer_seeds = seeds.to_vec();
    signer_seeds.push(bump_seed);
    let signer_seeds = &[&signer_seeds[..]];

    if current_lamports == 0 {
        let cpi_accounts = system_program::CreateAccount {
            from: payer.to_account_info(),
            to: target_account.clone(),
        };
        let cpi_context = CpiContext::new_with_signer(
            system_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );

        system_program::create_account(cpi_context, required_lamports, space as u64, &crate::ID)?;
        return Ok(bump);
    }

    // create_account rejects funded addresses
    let top_up = required_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        let cpi_accounts = system_program::Transfer {
            from: payer.to_account_info(),
            to: target_account.clone(),
        };
        let cpi_context = CpiContext::new(system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_context, top_up)?;
    }

    let cpi_accounts = system_program::Allocate {
        account_to_allocate: target_account.clone(),
    };
    let cpi_context =
        CpiContext::new_with_signer(system_program.to_account_info(), cpi_accounts, signer_seeds);
    system_program::allocate(cpi_context, space as u64)?;

    let cpi_accounts = system_program::Assign {
        account_to_assign: target_account.clone(),
    };
    let cpi_context =
        CpiContext::new_with_signer(system_program.to_account_info(), cpi_accounts, signer_seeds);
    system_program::assign(cpi_context, &crate::ID)?;

    Ok(bump)
}

/// Address of this program's ProgramData account under the upgradeable loader.
pub fn program_data_address() -> Pubkey {
    Pubkey::find_program_address(&[crate::ID.as_ref()], &ProgramData::owner()).0
}

/// Decodes a program account, mapping an empty (never created) account to `missing`.
pub fn load_account<T: AccountDeserialize + Owner>(
    info: &AccountInfo,
    missing: ErrorCode,
) -> Result<T> {
    if info.data_is_empty() {
        return Err(missing.into());
    }
    require_keys_eq!(*info.owner, T::owner(), ErrorCode::InvalidPDAAccount);

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

pub fn store_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

/// Floor of the square root, by Newton iteration on integers.
pub fn integer_sqrt(value: u64) -> u64 {
    if value < 2 {
        return value;
    }

    let mut x = value;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

/// Reputation moved by a vouch of `amount` staked lamports, scaled by the
/// voucher's trust multiplier and never more than `amount` itself.
pub fn vouch_weight(amount: u64, trust_weight_bps: u64) -> u64 {
    let scaled =
        integer_sqrt(amount) as u128 * trust_weight_bps as u128 / BASE_TRUST_BPS as u128;
    scaled.min(amount as u128) as u64
}
