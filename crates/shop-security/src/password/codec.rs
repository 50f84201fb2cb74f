//! PBKDF2-HMAC-SHA512 credential codec.
//!
//! Stored credentials use the composite form
//! `$pbkdf2-sha512$<salt>$<hex(derived key)>`. The leading empty field is
//! part of the format, so a valid string splits on `$` into exactly four
//! parts.

use constant_time_eq::constant_time_eq;
use pbkdf2::pbkdf2_hmac;
use rand::distr::Alphanumeric;
use rand::{rng, Rng};
use sha2::Sha512;
use shop_core::{ShopError, ShopResult};
use tracing::debug;

/// Algorithm tag written into every composite credential.
pub const ALGORITHM_TAG: &str = "pbkdf2-sha512";

const SEPARATOR: char = '$';

/// Encodes plaintext passwords and verifies them against stored credentials.
pub trait CredentialCodec: Send + Sync {
    /// Encodes a plaintext password into a composite credential string.
    fn encode(&self, plaintext: &str) -> ShopResult<String>;

    /// Verifies a plaintext password against a composite credential.
    ///
    /// Returns `Ok(false)` on mismatch and [`ShopError::MalformedCredential`]
    /// when the stored string cannot be parsed.
    fn verify(&self, plaintext: &str, composite: &str) -> ShopResult<bool>;
}

/// Derivation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Options {
    /// Number of alphanumeric salt characters generated per encode.
    pub salt_len: usize,
    /// PBKDF2 iteration count.
    pub iterations: u32,
    /// Derived key length in bytes.
    pub key_len: usize,
}

impl Default for Pbkdf2Options {
    fn default() -> Self {
        Self {
            salt_len: 10,
            iterations: 100,
            key_len: 32,
        }
    }
}

/// A composite credential split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCredential<'a> {
    pub salt: &'a str,
    pub hash: Vec<u8>,
}

impl<'a> ParsedCredential<'a> {
    /// Strictly parses `$<tag>$<salt>$<hex>`, requiring a derived key of
    /// `key_len` bytes.
    pub fn parse(composite: &'a str, key_len: usize) -> ShopResult<Self> {
        let parts: Vec<&str> = composite.split(SEPARATOR).collect();

        let &[leading, tag, salt, hash] = parts.as_slice() else {
            return Err(ShopError::malformed(format!(
                "expected 4 '$'-separated fields, found {}",
                parts.len()
            )));
        };

        if !leading.is_empty() {
            return Err(ShopError::malformed("credential must start with '$'"));
        }
        if tag != ALGORITHM_TAG {
            return Err(ShopError::malformed(format!("unknown algorithm tag '{tag}'")));
        }
        if salt.is_empty() {
            return Err(ShopError::malformed("empty salt"));
        }

        let hash = hex::decode(hash).map_err(|e| ShopError::malformed(format!("hash is not hex: {e}")))?;
        if hash.len() != key_len {
            return Err(ShopError::malformed(format!(
                "hash is {} bytes, expected {key_len}",
                hash.len()
            )));
        }

        Ok(Self { salt, hash })
    }
}

/// PBKDF2 with HMAC-SHA-512 and a random alphanumeric salt.
#[derive(Debug, Clone, Default)]
pub struct Pbkdf2Sha512Codec {
    options: Pbkdf2Options,
}

impl Pbkdf2Sha512Codec {
    /// Creates a codec with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with custom parameters.
    #[must_use]
    pub const fn with_options(options: Pbkdf2Options) -> Self {
        Self { options }
    }

    /// Returns the derivation parameters.
    #[must_use]
    pub const fn options(&self) -> Pbkdf2Options {
        self.options
    }

    fn generate_salt(&self) -> String {
        rng()
            .sample_iter(&Alphanumeric)
            .take(self.options.salt_len)
            .map(char::from)
            .collect()
    }

    fn derive(&self, plaintext: &str, salt: &str) -> Vec<u8> {
        let mut key = vec![0u8; self.options.key_len];
        pbkdf2_hmac::<Sha512>(plaintext.as_bytes(), salt.as_bytes(), self.options.iterations, &mut key);
        key
    }
}

impl CredentialCodec for Pbkdf2Sha512Codec {
    fn encode(&self, plaintext: &str) -> ShopResult<String> {
        let salt = self.generate_salt();
        let key = self.derive(plaintext, &salt);

        debug!("Password encoded");
        Ok(format!("${ALGORITHM_TAG}${salt}${}", hex::encode(key)))
    }

    fn verify(&self, plaintext: &str, composite: &str) -> ShopResult<bool> {
        let parsed = ParsedCredential::parse(composite, self.options.key_len)?;
        let derived = self.derive(plaintext, parsed.salt);

        let matches = constant_time_eq(&derived, &parsed.hash);
        debug!(matches, "Password verified");
        Ok(matches)
    }
}
