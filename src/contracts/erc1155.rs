//! ERC-1155 multi-token bindings.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC1155 {
        function balanceOf(address account, uint256 id) external view returns (uint256);
        function safeTransferFrom(address from, address to, uint256 id, uint256 value, bytes data) external;
    }
}

/// Call data for `safeTransferFrom(from, to, id, value, data)`.
pub fn safe_transfer_from_data(
    from: Address,
    to: Address,
    id: U256,
    value: U256,
    data: Bytes,
) -> Bytes {
    IERC1155::safeTransferFromCall {
        from,
        to,
        id,
        value,
        data,
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
        assert_eq!(IERC1155::balanceOfCall::SELECTOR, [0x00, 0xfd, 0xd5, 0x8e]);
        assert_eq!(IERC1155::safeTransferFromCall::SELECTOR, [0xf2, 0x42, 0x43, 0x2a]);
    }

    #[test]
    fn test_safe_transfer_from_carries_data() {
        let from = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        let to = address!("2ee1d96cb76579e2c64c9bb045443fb3849491d2");
        let payload = Bytes::from_static(b"hello");
        let data = safe_transfer_from_data(from, to, U256::from(1u64), U256::from(10u64), payload.clone());

        let decoded = IERC1155::safeTransferFromCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.id, U256::from(1u64));
        assert_eq!(decoded.value, U256::from(10u64));
        assert_eq!(decoded.data, payload);
    }

    #[test]
    fn test_empty_data_is_dynamic() {
        let data = safe_transfer_from_data(Address::ZERO, Address::ZERO, U256::ZERO, U256::ZERO, Bytes::new());
        // selector + 5 head words + length word
        assert_eq!(data.len(), 4 + 6 * 32);
    }
}
