use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

/// Fees and the win multiplier are expressed in parts of this base.
pub const FRACTIONAL_BASE: u128 = 100_000;

#[derive(Error, Debug, PartialEq)]
pub enum FeeParamError {
    #[error("{field} must be an unsigned integer, got {value:?}")]
    InvalidAmount { field: String, value: String },
}

/// Game parameters shared by `new` and `update_contract`.
#[cw_serde]
pub struct FeeParams {
    /// Cut of every bet earmarked for NFT holders
    pub nft_fee: Uint128,
    /// Cut of every bet kept for the developers
    pub dev_fee: Uint128,
    /// Cut of every bet kept by the house
    pub house_fee: Uint128,
    /// Multiplier applied to the net bet on a win
    pub win_multiplier: Uint128,
    /// Maximum bet in the native minor unit
    pub max_bet: Uint128,
    /// Minimum bet in the native minor unit
    pub min_bet: Uint128,
    /// Minimum balance kept by a player, as `min_bet / min_balance_fraction`
    pub min_balance_fraction: Uint128,
}

/// Parses a free-form CLI amount into the `Uint128` the contract expects.
pub fn parse_amount(field: &str, value: &str) -> Result<Uint128, FeeParamError> {
    value
        .trim()
        .parse::<u128>()
        .map(Uint128::new)
        .map_err(|_| FeeParamError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        })
}
