use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::{fees::FeeParams, state::ContractState};

/// The contract's `new` initializer.
#[cw_serde]
pub struct InstantiateMsg {
    pub owner_id: String,
    pub nft_fee: Uint128,
    pub dev_fee: Uint128,
    pub house_fee: Uint128,
    pub win_multiplier: Uint128,
    pub max_bet: Uint128,
    pub min_bet: Uint128,
    pub min_balance_fraction: Uint128,
}

impl InstantiateMsg {
    pub fn new(owner_id: impl Into<String>, fees: FeeParams) -> Self {
        InstantiateMsg {
            owner_id: owner_id.into(),
            nft_fee: fees.nft_fee,
            dev_fee: fees.dev_fee,
            house_fee: fees.house_fee,
            win_multiplier: fees.win_multiplier,
            max_bet: fees.max_bet,
            min_bet: fees.min_bet,
            min_balance_fraction: fees.min_balance_fraction,
        }
    }
}

#[cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    #[cw_orch(payable)]
    EmergencyPanic { withdrawal_balance: Uint128 },
    #[cw_orch(payable)]
    UpdateContract {
        nft_fee: Uint128,
        dev_fee: Uint128,
        house_fee: Uint128,
        win_multiplier: Uint128,
        max_bet: Uint128,
        min_bet: Uint128,
        min_balance_fraction: Uint128,
    },
    #[cw_orch(payable)]
    RetrieveDevFunds {},
    /// Moves the NFT balance to the listed accounts
    #[cw_orch(payable)]
    RetrieveNftFunds { distribution_list: Vec<String> },
    #[cw_orch(payable)]
    Deposit {},
    #[cw_orch(payable)]
    Play { bet_type: bool, bet_size: Uint128 },
}

impl From<FeeParams> for ExecuteMsg {
    fn from(fees: FeeParams) -> Self {
        ExecuteMsg::UpdateContract {
            nft_fee: fees.nft_fee,
            dev_fee: fees.dev_fee,
            house_fee: fees.house_fee,
            win_multiplier: fees.win_multiplier,
            max_bet: fees.max_bet,
            min_bet: fees.min_bet,
            min_balance_fraction: fees.min_balance_fraction,
        }
    }
}

#[cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    #[returns(ContractState)]
    GetContractState {},
}
