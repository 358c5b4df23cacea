use std::fmt;

use rand::{CryptoRng, Rng, RngCore};

use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

const BASE32_ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";
// 26 base-32 digits carry 130 bits.
const GENERATED_LENGTH: usize = 26;
const MIN_LENGTH: usize = 8;

#[derive(Clone, Eq, PartialEq)]
pub struct DatabasePassword(String);

impl DatabasePassword {
    pub fn new(value: String) -> Result<Self, ServiceBrokerDomainError> {
        if value.len() < MIN_LENGTH {
            return Err(ServiceBrokerDomainError::InvalidDatabasePassword);
        }

        Ok(Self(value))
    }

    /// Only RNGs marked [`CryptoRng`] are accepted.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let value = (0..GENERATED_LENGTH)
            .map(|_| BASE32_ALPHABET[rng.gen_range(0..BASE32_ALPHABET.len())] as char)
            .collect();

        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DatabasePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatabasePassword(***)")
    }
}
