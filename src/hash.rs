use log::debug;

/// Deterministic stream of hex digests. Each step hashes the previous
/// digest, so a seed fixes every value the stream will ever yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashStream {
    digest: String,
}

fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

impl HashStream {
    /// Starts the stream at `md5(seed)`.
    pub fn new(seed: &str) -> Self {
        HashStream {
            digest: md5_hex(seed),
        }
    }

    /// Starts the stream from a random token. Output is not reproducible.
    pub fn from_entropy() -> Self {
        let token = rand::random::<f64>().to_string();
        debug!("no seed given, using random token {token}");
        Self::new(&token)
    }

    /// Replaces the current digest with its own hash and returns it.
    pub fn advance(&mut self) -> &str {
        self.digest = md5_hex(&self.digest);
        &self.digest
    }

    /// The current digest, 32 lower-case hex characters.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}
