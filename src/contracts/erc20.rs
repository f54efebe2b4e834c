//! ERC-20 fungible token bindings.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// The ERC-20 functions the client reads and writes, plus the common
    /// `Ownable` extension.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
        function approve(address spender, uint256 value) external returns (bool);
        function owner() external view returns (address);
        function transferOwnership(address newOwner) external;
    }
}

/// Decimals assumed when a token does not answer `decimals()`.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Call data for `transfer(to, value)`.
pub fn transfer_data(to: Address, value: U256) -> Bytes {
    IERC20::transferCall { to, value }.abi_encode().into()
}

/// Call data for `transferFrom(from, to, value)`.
pub fn transfer_from_data(from: Address, to: Address, value: U256) -> Bytes {
    IERC20::transferFromCall { from, to, value }.abi_encode().into()
}

/// Call data for `approve(spender, value)`.
pub fn approve_data(spender: Address, value: U256) -> Bytes {
    IERC20::approveCall { spender, value }.abi_encode().into()
}

/// Call data for `transferOwnership(newOwner)`.
pub fn transfer_ownership_data(new_owner: Address) -> Bytes {
    IERC20::transferOwnershipCall { newOwner: new_owner }.abi_encode().into()
}
