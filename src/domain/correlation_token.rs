use rand::thread_rng;
use rand::Rng;
use serde::Serialize;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 26;

/// Opaque, single-use identifier attached to one submission attempt (the
/// tracking endpoint's `did` and `abhash`). Not a durable subscriber identity;
/// a new pair is generated for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrelationToken(String);

impl CorrelationToken {
    /// 26 characters of lowercase base-36
    pub fn generate() -> Self {
        let mut rng = thread_rng();
        let token = (0..TOKEN_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(token)
    }
}

impl AsRef<str> for CorrelationToken {
    fn as_ref(&self) -> &str { &self.0 }
}

impl From<CorrelationToken> for String {
    fn from(value: CorrelationToken) -> Self { value.0 }
}
