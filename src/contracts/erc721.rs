//! ERC-721 non-fungible token bindings.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC721 {
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
    }
}

/// Call data for `safeTransferFrom(from, to, tokenId)`.
pub fn safe_transfer_from_data(from: Address, to: Address, token_id: U256) -> Bytes {
    IERC721::safeTransferFromCall {
        from,
        to,
        tokenId: token_id,
    }
    .abi_encode()
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_selectors() {
        assert_eq!(IERC721::ownerOfCall::SELECTOR, [0x63, 0x52, 0x21, 0x1e]);
        assert_eq!(IERC721::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(IERC721::safeTransferFromCall::SELECTOR, [0x42, 0x84, 0x2e, 0x0e]);
    }

    #[test]
    fn test_safe_transfer_from_round_trip() {
        let from = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        let to = address!("2ee1d96cb76579e2c64c9bb045443fb3849491d2");
        let data = safe_transfer_from_data(from, to, U256::from(42u64));

        assert_eq!(data.len(), 4 + 3 * 32);
        let decoded = IERC721::safeTransferFromCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.from, from);
        assert_eq!(decoded.to, to);
        assert_eq!(decoded.tokenId, U256::from(42u64));
    }
}
