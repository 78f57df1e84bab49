use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::DistributionError;

#[cw_serde]
pub struct Share {
    /// Paid to every eligible holder
    pub amount: Uint128,
    /// Left undistributed
    pub remainder: Uint128,
}

/// Floor-divides `balance` across `holder_count` holders.
pub fn equal_share(balance: Uint128, holder_count: usize) -> Result<Share, DistributionError> {
    if holder_count == 0 {
        return Err(DistributionError::DivisionByZero {});
    }

    let holder_count = Uint128::from(holder_count as u128);
    let amount = balance.checked_div(holder_count).map_err(|_| DistributionError::DivisionByZero {})?;
    let remainder = balance.checked_sub(amount.checked_mul(holder_count)?)?;

    Ok(Share { amount, remainder })
}
