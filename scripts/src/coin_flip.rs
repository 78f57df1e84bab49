use coin_flip_interface::{
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    ContractState, FeeParams,
};
use cosmwasm_std::{coins, Coin, Uint128};
use cw_orch::prelude::*;
use orch_interface::coin_flip::CoinFlipContract;

use crate::network::ONE_UNIT_DEPOSIT;

/// The deployed coin-flip contract and the denom its calls pay in.
pub struct CoinFlip<Chain> {
    pub contract: CoinFlipContract<Chain>,
    pub denom: String,
}

impl<Chain: CwEnv> CoinFlip<Chain> {
    pub fn new(chain: Chain, denom: impl Into<String>) -> CoinFlip<Chain> {
        CoinFlip::<Chain> {
            contract: CoinFlipContract::new(chain),
            denom: denom.into(),
        }
    }

    pub fn at(chain: Chain, denom: impl Into<String>, address: &Addr) -> CoinFlip<Chain> {
        let coin_flip = CoinFlip::new(chain, denom);
        coin_flip.contract.set_address(address);
        coin_flip
    }

    fn one_unit(&self) -> Vec<Coin> {
        coins(ONE_UNIT_DEPOSIT, &self.denom)
    }

    /// Uploads the contract binary and returns its code id.
    pub fn deploy(&self) -> Result<u64, CwOrchError> {
        self.contract.upload()?;
        self.contract.code_id()
    }

    /// Instantiates `code_id` with `owner` as both owner and admin.
    pub fn initialize(
        &self,
        code_id: u64,
        owner: &Addr,
        fees: FeeParams,
    ) -> Result<Addr, CwOrchError> {
        self.contract.set_code_id(code_id);
        self.contract
            .instantiate(&InstantiateMsg::new(owner.to_string(), fees), Some(owner), None)?;
        self.contract.address()
    }

    pub fn update_contract(&self, fees: FeeParams) -> Result<Chain::Response, CwOrchError> {
        let deposit = self.one_unit();
        self.contract
            .execute(&ExecuteMsg::from(fees), Some(deposit.as_slice()))
    }

    /// Toggles the panic button. Calling it twice restores the previous state.
    pub fn emergency_panic(
        &self,
        withdrawal_balance: Uint128,
    ) -> Result<Chain::Response, CwOrchError> {
        let deposit = self.one_unit();
        self.contract.execute(
            &ExecuteMsg::EmergencyPanic { withdrawal_balance },
            Some(deposit.as_slice()),
        )
    }

    pub fn contract_state(&self) -> Result<ContractState, CwOrchError> {
        self.contract.query(&QueryMsg::GetContractState {})
    }

    pub fn retrieve_dev_funds(&self) -> Result<Chain::Response, CwOrchError> {
        let deposit = self.one_unit();
        self.contract
            .execute(&ExecuteMsg::RetrieveDevFunds {}, Some(deposit.as_slice()))
    }

    /// Moves the NFT balance out of the contract to `distribution_list`.
    pub fn retrieve_nft_funds(
        &self,
        distribution_list: Vec<String>,
    ) -> Result<Chain::Response, CwOrchError> {
        let deposit = self.one_unit();
        self.contract.execute(
            &ExecuteMsg::RetrieveNftFunds { distribution_list },
            Some(deposit.as_slice()),
        )
    }

    pub fn deposit(&self, amount: Uint128) -> Result<Chain::Response, CwOrchError> {
        let funds = coins(amount.u128(), &self.denom);
        self.contract
            .execute(&ExecuteMsg::Deposit {}, Some(funds.as_slice()))
    }

    /// Bets `bet_size` out of the caller's deposited balance.
    pub fn play(&self, bet_type: bool, bet_size: Uint128) -> Result<Chain::Response, CwOrchError> {
        self.contract
            .execute(&ExecuteMsg::Play { bet_type, bet_size }, None)
    }
}
