pub mod coin_flip;
pub mod nft_collection;
