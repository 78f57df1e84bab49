pub mod fees;
pub mod msg;
pub mod state;

pub use fees::{parse_amount, FeeParamError, FeeParams, FRACTIONAL_BASE};
pub use state::ContractState;
