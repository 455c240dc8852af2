//! Static table of supported chains
//!
//! Chains are keyed by their SLIP-44 style coin id; the handle doubles as the
//! chain's directory name inside the registry.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chain {
    pub id: u32,
    pub handle: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const ETHEREUM: u32 = 60;
pub const CLASSIC: u32 = 61;
pub const TRON: u32 = 195;
pub const SOLANA: u32 = 501;
pub const BINANCE: u32 = 714;
pub const POLYGON: u32 = 966;
pub const FANTOM: u32 = 10000250;
pub const OPTIMISM: u32 = 10000070;
pub const CRONOS: u32 = 10000025;
pub const AVALANCHEC: u32 = 10009000;
pub const ARBITRUM: u32 = 10042221;
pub const SMARTCHAIN: u32 = 20000714;
pub const AURORA: u32 = 1323161554;

const CHAIN_TABLE: &[Chain] = &[
    Chain { id: ETHEREUM, handle: "ethereum", name: "Ethereum", symbol: "ETH" },
    Chain { id: CLASSIC, handle: "classic", name: "Ethereum Classic", symbol: "ETC" },
    Chain { id: TRON, handle: "tron", name: "Tron", symbol: "TRX" },
    Chain { id: SOLANA, handle: "solana", name: "Solana", symbol: "SOL" },
    Chain { id: BINANCE, handle: "binance", name: "BNB Beacon Chain", symbol: "BNB" },
    Chain { id: POLYGON, handle: "polygon", name: "Polygon", symbol: "MATIC" },
    Chain { id: FANTOM, handle: "fantom", name: "Fantom", symbol: "FTM" },
    Chain { id: OPTIMISM, handle: "optimism", name: "Optimism", symbol: "ETH" },
    Chain { id: CRONOS, handle: "cronos", name: "Cronos Chain", symbol: "CRO" },
    Chain { id: AVALANCHEC, handle: "avalanchec", name: "Avalanche C-Chain", symbol: "AVAX" },
    Chain { id: ARBITRUM, handle: "arbitrum", name: "Arbitrum", symbol: "ETH" },
    Chain { id: SMARTCHAIN, handle: "smartchain", name: "Smart Chain", symbol: "BNB" },
    Chain { id: AURORA, handle: "aurora", name: "Aurora", symbol: "ETH" },
];

static CHAINS_BY_ID: Lazy<HashMap<u32, Chain>> =
    Lazy::new(|| CHAIN_TABLE.iter().map(|c| (c.id, *c)).collect());

static CHAINS_BY_HANDLE: Lazy<HashMap<&'static str, Chain>> =
    Lazy::new(|| CHAIN_TABLE.iter().map(|c| (c.handle, *c)).collect());

pub fn get_chain(id: u32) -> Option<Chain> {
    CHAINS_BY_ID.get(&id).copied()
}

pub fn get_chain_by_handle(handle: &str) -> Option<Chain> {
    CHAINS_BY_HANDLE.get(handle.to_lowercase().as_str()).copied()
}

/// Resolve a chain from either its numeric id or its handle
pub fn find_chain(id_or_handle: &str) -> Option<Chain> {
    match id_or_handle.trim().parse::<u32>() {
        Ok(id) => get_chain(id),
        Err(_) => get_chain_by_handle(id_or_handle.trim()),
    }
}

/// All known chains in table order
pub fn all_chains() -> &'static [Chain] {
    CHAIN_TABLE
}
