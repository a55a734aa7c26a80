//! Well-formedness checks for caller-supplied identifiers and amounts.
//!
//! These run before a request is built; a failure costs zero network
//! round trips.

use crate::error::ClientError;

/// Addresses are `0x` followed by 40 hex characters.
pub fn address(address: &str) -> Result<(), ClientError> {
    let Some(hex) = address.strip_prefix("0x") else {
        return Err(ClientError::Validation(
            "address must start with 0x".to_owned(),
        ));
    };
    if hex.len() != 40 {
        return Err(ClientError::Validation(
            "address must be 42 characters long".to_owned(),
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ClientError::Validation(
            "address contains non-hex characters".to_owned(),
        ));
    }
    Ok(())
}

/// Transaction and block hashes are `0x` followed by 64 hex characters.
pub fn hash(hash: &str) -> Result<(), ClientError> {
    let Some(hex) = hash.strip_prefix("0x") else {
        return Err(ClientError::Validation("hash must start with 0x".to_owned()));
    };
    if hex.len() != 64 {
        return Err(ClientError::Validation(
            "hash must be 66 characters long".to_owned(),
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ClientError::Validation(
            "hash contains non-hex characters".to_owned(),
        ));
    }
    Ok(())
}

/// Amounts are integer base units and must be non-zero.
pub fn amount(amount: u64) -> Result<(), ClientError> {
    if amount == 0 {
        return Err(ClientError::Validation(
            "amount must be greater than zero".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accepts_well_formed() {
        address("0x742d35Cc6634C0532925a3b8D5C9C1D26d28b9fF").expect("must accept");
    }

    #[test]
    fn address_rejects_short_missing_prefix_and_non_hex() {
        assert!(address("0x742d35Cc6634C0532925a3b8D5C9C1D2").is_err());
        assert!(address("742d35Cc6634C0532925a3b8D5C9C1D26d28b9fF").is_err());
        assert!(address("0xZZ2d35Cc6634C0532925a3b8D5C9C1D26d28b9fF").is_err());
        assert!(address("").is_err());
    }

    #[test]
    fn hash_accepts_well_formed() {
        hash("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef")
            .expect("must accept");
    }

    #[test]
    fn hash_rejects_short_and_unprefixed() {
        assert!(hash("0xabcd").is_err());
        assert!(
            hash("1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef").is_err()
        );
    }

    #[test]
    fn amount_rejects_zero() {
        assert!(amount(0).is_err());
        amount(1).expect("must accept");
    }
}
