use hmac::{Hmac, Mac};
use sha2::Sha256;
use shared::init_data::{InitData, InitDataError};
use std::fmt;

pub mod middleware;

type HmacSha256 = Hmac<Sha256>;

const WEB_APP_KEY: &[u8] = b"WebAppData";

#[derive(Debug)]
pub enum AuthError {
    Malformed(InitDataError),
    InvalidSignature,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "Malformed init data: {}", e),
            Self::InvalidSignature => write!(f, "Invalid signature"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::InvalidSignature => None,
        }
    }
}

impl From<InitDataError> for AuthError {
    fn from(err: InitDataError) -> Self {
        Self::Malformed(err)
    }
}

fn secret_key(bot_token: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(WEB_APP_KEY).expect("HMAC can take key of any size");
    mac.update(bot_token.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

pub fn sign_init_data(data_check_string: &str, bot_token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(&secret_key(bot_token))
        .expect("HMAC can take key of any size");
    mac.update(data_check_string.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks the `hash` of web-view init data against the bot token.
pub fn verify_init_data(raw: &str, bot_token: &str) -> Result<InitData, AuthError> {
    let data = InitData::parse(raw)?;
    let received = hex::decode(data.hash()).map_err(|_| AuthError::InvalidSignature)?;

    let mut mac = HmacSha256::new_from_slice(&secret_key(bot_token))
        .expect("HMAC can take key of any size");
    mac.update(data.data_check_string().as_bytes());
    mac.verify_slice(&received).map_err(|_| AuthError::InvalidSignature)?;

    Ok(data)
}
