use coin_flip_interface::FeeParams;
use cosmwasm_std::{coins, Uint128};
use cw_orch::{anyhow, prelude::*};

use crate::coin_flip::CoinFlip;

use super::helpers::{fees, setup_coin_flip};
use super::{DENOM, INITIAL_BALANCE, PREFIX};

#[test]
fn test_initialize_records_owner_and_fees() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;

    let state = coin_flip.contract_state()?;
    assert_eq!(state.owner_id, owner.to_string());
    assert_eq!(state.nft_fee, Uint128::new(4000));
    assert_eq!(state.min_balance_fraction, Uint128::new(100));
    assert!(!state.panic_button);

    Ok(())
}

#[test]
fn test_update_contract_replaces_fees() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;

    coin_flip.update_contract(FeeParams {
        max_bet: Uint128::new(10_000_000),
        dev_fee: Uint128::zero(),
        ..fees()
    })?;

    let state = coin_flip.contract_state()?;
    assert_eq!(state.max_bet, Uint128::new(10_000_000));
    assert_eq!(state.dev_fee, Uint128::zero());
    assert_eq!(state.house_fee, Uint128::new(500));

    // One unit attached to the call
    assert_eq!(
        mock.query_balance(&owner, DENOM)?,
        Uint128::new(INITIAL_BALANCE - 1)
    );

    Ok(())
}

#[test]
fn test_owner_calls_reject_other_signers() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, _owner) = setup_coin_flip(&mock)?;
    let stranger = mock.addr_make_with_balance("stranger", coins(100, DENOM))?;

    let mut as_stranger = CoinFlip::at(mock.clone(), DENOM, &coin_flip.contract.address()?);
    as_stranger.contract.set_sender(&stranger);

    let result = as_stranger.update_contract(fees());
    assert!(result.is_err());
    assert!(as_stranger.emergency_panic(Uint128::zero()).is_err());
    assert!(as_stranger.retrieve_dev_funds().is_err());

    Ok(())
}

#[test]
fn test_emergency_panic_is_not_idempotent() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;

    coin_flip.emergency_panic(Uint128::zero())?;
    assert!(coin_flip.contract_state()?.panic_button);

    coin_flip.emergency_panic(Uint128::zero())?;
    assert!(!coin_flip.contract_state()?.panic_button);

    assert_eq!(
        mock.query_balance(&owner, DENOM)?,
        Uint128::new(INITIAL_BALANCE - 2)
    );
    assert_eq!(
        mock.query_balance(&coin_flip.contract.address()?, DENOM)?,
        Uint128::new(2)
    );

    Ok(())
}

#[test]
fn test_emergency_panic_withdraws_to_owner() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;

    coin_flip.deposit(Uint128::new(500))?;
    coin_flip.emergency_panic(Uint128::new(200))?;

    assert_eq!(
        mock.query_balance(&owner, DENOM)?,
        Uint128::new(INITIAL_BALANCE - 500 - 1 + 200)
    );

    Ok(())
}

#[test]
fn test_emergency_panic_fails_when_withdrawal_exceeds_funds() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, _owner) = setup_coin_flip(&mock)?;

    let result = coin_flip.emergency_panic(Uint128::new(1_000));
    assert!(result.is_err());
    assert!(!coin_flip.contract_state()?.panic_button);

    Ok(())
}

#[test]
fn test_retrieve_dev_funds_is_not_deduplicated() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;

    coin_flip.retrieve_dev_funds()?;
    coin_flip.retrieve_dev_funds()?;

    assert_eq!(
        mock.query_balance(&owner, DENOM)?,
        Uint128::new(INITIAL_BALANCE - 2)
    );

    Ok(())
}

#[test]
fn test_deposit_and_play() -> anyhow::Result<()> {
    let mock = MockBech32::new(PREFIX);
    let (coin_flip, owner) = setup_coin_flip(&mock)?;
    let player = mock.addr_make_with_balance("player", coins(10_000, DENOM))?;

    let mut as_player = CoinFlip::at(mock.clone(), DENOM, &coin_flip.contract.address()?);
    as_player.contract.set_sender(&player);

    as_player.deposit(Uint128::new(1_000))?;
    as_player.play(true, Uint128::new(100))?;

    assert_eq!(coin_flip.contract_state()?.nft_balance, Uint128::new(1_000));
    assert_eq!(mock.query_balance(&player, DENOM)?, Uint128::new(9_000));
    assert_eq!(
        mock.query_balance(&owner, DENOM)?,
        Uint128::new(INITIAL_BALANCE)
    );

    Ok(())
}
