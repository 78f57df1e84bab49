use std::{path::PathBuf, sync::OnceLock};

use cw_orch::interface;
use cw_orch::prelude::*;

#[allow(unused_imports)]
use coin_flip_interface::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

pub const CONTRACT_ID: &str = "coin_flip";

static WASM_PATH: OnceLock<WasmPath> = OnceLock::new();

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, Empty, id = CONTRACT_ID)]
pub struct CoinFlipContract;

/// Points uploads at a binary outside the workspace artifacts.
/// The first path set in a process wins.
pub fn use_wasm_at(path: impl Into<PathBuf>) -> Result<(), CwOrchError> {
    let wasm = WasmPath::new(path)?;
    WASM_PATH.get_or_init(|| wasm);
    Ok(())
}

impl<Chain> Uploadable for CoinFlipContract<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        match WASM_PATH.get() {
            Some(path) => path.clone(),
            None => artifacts_dir_from_workspace!()
                .find_wasm_path(CONTRACT_ID)
                .unwrap(),
        }
    }
}
