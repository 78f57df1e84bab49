use cosmwasm_std::OverflowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributionError {
    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("Token lookup failed: {0}")]
    Lookup(#[from] anyhow::Error),

    #[error("Cannot split a balance across zero eligible holders")]
    DivisionByZero {},

    #[error("Enumeration stopped at index {max_index} with {found} of {total_supply} tokens found")]
    EnumerationIncomplete {
        max_index: u64,
        found: u64,
        total_supply: u64,
    },
}
