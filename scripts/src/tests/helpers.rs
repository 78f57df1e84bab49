use std::cell::RefCell;

use coin_flip_interface::FeeParams;
use cosmwasm_std::{coins, Uint128};
use cw_orch::{anyhow, prelude::*};
use nft_distribution::Transfer;
use orch_interface::nft_collection::Cw721Collection;

use crate::coin_flip::CoinFlip;

use super::{fixture::CoinFlipFixture, DENOM, INITIAL_BALANCE, OWNER};

pub fn fees() -> FeeParams {
    FeeParams {
        nft_fee: Uint128::new(4000),
        dev_fee: Uint128::new(500),
        house_fee: Uint128::new(500),
        win_multiplier: Uint128::new(200_000),
        max_bet: Uint128::new(5_000_000),
        min_bet: Uint128::new(100_000),
        min_balance_fraction: Uint128::new(100),
    }
}

pub fn setup_coin_flip(mock: &MockBech32) -> anyhow::Result<(CoinFlip<MockBech32>, Addr)> {
    let owner = mock.addr_make_with_balance(OWNER, coins(INITIAL_BALANCE, DENOM))?;

    let fixture = CoinFlipFixture::new(mock.clone());
    fixture.upload()?;

    let mut coin_flip = CoinFlip::new(mock.clone(), DENOM);
    coin_flip.contract.set_sender(&owner);
    coin_flip.initialize(fixture.code_id()?, &owner, fees())?;

    Ok((coin_flip, owner))
}

pub fn setup_collection(
    mock: &MockBech32,
    minter: &Addr,
) -> anyhow::Result<Cw721Collection<MockBech32>> {
    let mut collection = Cw721Collection::new(mock.clone());
    collection.upload()?;
    collection.set_sender(minter);
    collection.create("Coin Flip Club", "CFC", minter)?;

    Ok(collection)
}

/// Credits recipients directly on the mock bank.
pub struct MockTransfer {
    mock: MockBech32,
    failing_for: Option<Addr>,
    sent: RefCell<u32>,
}

impl MockTransfer {
    pub fn new(mock: &MockBech32) -> Self {
        MockTransfer {
            mock: mock.clone(),
            failing_for: None,
            sent: RefCell::new(0),
        }
    }

    pub fn failing_for(mock: &MockBech32, recipient: &Addr) -> Self {
        MockTransfer {
            failing_for: Some(recipient.clone()),
            ..MockTransfer::new(mock)
        }
    }
}

impl Transfer for MockTransfer {
    fn transfer(&self, recipient: &str, amount: Uint128) -> anyhow::Result<String> {
        if self.failing_for.as_ref().map(Addr::as_str) == Some(recipient) {
            anyhow::bail!("account {} does not exist", recipient);
        }

        self.mock
            .add_balance(&Addr::unchecked(recipient), coins(amount.u128(), DENOM))?;
        let mut sent = self.sent.borrow_mut();
        *sent += 1;
        Ok(format!("mock-tx-{}", sent))
    }
}
