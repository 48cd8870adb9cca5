// Update the LOCAL_* values after every local deployment.
// Init code hash: `forge inspect UniswapV2Pair bytecode | cast keccak`, without the 0x prefix.
pub const LOCAL_FACTORY_ADDRESS: &str = "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0";
pub const LOCAL_INIT_CODE_HASH: &str =
    "4a164ea51df2a6a7cb0fc4385184ca464c646f6510b5cd69201035f64e9ee391";
pub const LOCAL_WETH_ADDRESS: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

// Values shipped in the published SDK bundle. WETH is the Ropsten entry.
pub const MAINNET_FACTORY_ADDRESS: &str = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
pub const MAINNET_INIT_CODE_HASH: &str =
    "96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f";
pub const MAINNET_WETH_ADDRESS: &str = "0xc778417E063141139Fce010982780140Aa0cD5Ab";

pub const SDK_DIST_PATH: &str = "node_modules/@uniswap/sdk/dist";
pub const FILES_TO_PATCH: [&str; 2] = ["sdk.esm.js", "sdk.cjs.production.min.js"];

pub const CONFIG_FILE_PATH: &str = "data/patcher.toml";
pub const LOGS_FOLDER_PATH: &str = "data/logs";

/// Root every relative path is resolved against.
pub fn crate_root() -> &'static std::path::Path {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
}
