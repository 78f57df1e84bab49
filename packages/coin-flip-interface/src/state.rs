use cosmwasm_schema::schemars::JsonSchema;
use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

/// Snapshot returned by `get_contract_state`.
///
/// Unknown fields are tolerated and missing ones default, except `nft_balance`,
/// which decides how much is paid out.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[schemars(crate = "cosmwasm_schema::schemars")]
pub struct ContractState {
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub panic_button: bool,

    #[serde(default)]
    pub nft_fee: Uint128,
    #[serde(default)]
    pub dev_fee: Uint128,
    #[serde(default)]
    pub house_fee: Uint128,
    #[serde(default)]
    pub win_multiplier: Uint128,

    #[serde(default)]
    pub max_bet: Uint128,
    #[serde(default)]
    pub min_bet: Uint128,
    #[serde(default)]
    pub min_balance_fraction: Uint128,

    /// Balance earmarked for NFT holders
    pub nft_balance: Uint128,
    #[serde(default)]
    pub dev_balance: Uint128,
    #[serde(default)]
    pub house_balance: Uint128,
}
