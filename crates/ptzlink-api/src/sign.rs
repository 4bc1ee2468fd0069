// Login signature generation
//
// The camera's login endpoint authenticates with a salted digest instead
// of the plaintext password:
//
//   salt = hex(16 random bytes)
//   sign = md5_hex(uppercase(sha256_hex(password) + salt))
//
// The algorithm is fixed by the camera firmware and must match exactly.

use md5::Md5;
use rand::TryRngCore;
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// A request-ready signed login payload: the random salt and the
/// derived signature, both as lowercase hex strings.
#[derive(Debug, Clone)]
pub struct LoginSign {
    pub salt: String,
    pub sign: String,
}

/// Generate a signed login payload for `password` with a fresh random salt.
///
/// Salt bytes come from the OS secure random source; if that source is
/// unavailable the call fails with [`Error::Entropy`] rather than falling
/// back to a weaker generator.
pub fn login_sign(password: &SecretString) -> Result<LoginSign, Error> {
    let mut raw = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut raw)
        .map_err(|e| Error::Entropy(e.to_string()))?;
    let salt = hex::encode(raw);
    let sign = sign_with_salt(password.expose_secret(), &salt);
    Ok(LoginSign { salt, sign })
}

/// Deterministic core of the signature: `md5(upper(sha256(password) + salt))`.
pub fn sign_with_salt(password: &str, salt: &str) -> String {
    let password_hex = hex::encode(Sha256::digest(password.as_bytes()));
    let upper = format!("{password_hex}{salt}").to_uppercase();
    hex::encode(Md5::digest(upper.as_bytes()))
}
