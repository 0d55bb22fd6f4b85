use rand::seq::IndexedRandom;

/// Symbols secrets are drawn from. URL, YAML and shell safe.
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-";

/// Returns `len` symbols drawn uniformly from [`ALPHABET`].
///
/// Uses the thread-local generator, which is a seeded CSPRNG.
#[must_use]
pub fn generate_random_string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .filter_map(|_| ALPHABET.choose(&mut rng))
        .map(|&b| char::from(b))
        .collect()
}
