mod error;
mod holders;
mod payout;
mod shares;

pub use error::DistributionError;
pub use holders::{eligible_holders, enumerate_holders, Enumeration, HolderRecord, TokenLookup};
pub use payout::{distribute, FailedTransfer, LedgerEntry, PayoutReport, Transfer};
pub use shares::{equal_share, Share};
