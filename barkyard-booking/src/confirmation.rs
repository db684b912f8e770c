/// Prefix every booking confirmation carries.
pub const CONFIRMATION_PREFIX: &str = "BB-";

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

/// Source of confirmation identifiers for accepted bookings. Identifiers are
/// opaque and never persisted.
pub trait ConfirmationIds: Send + Sync {
    fn next_confirmation(&self) -> String;
}

/// Random `BB-XXXXXX` codes over uppercase letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl ConfirmationIds for RandomIds {
    fn next_confirmation(&self) -> String {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        format!("{CONFIRMATION_PREFIX}{suffix}")
    }
}

/// Hands out one canned identifier. For deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedIds(pub String);

impl ConfirmationIds for FixedIds {
    fn next_confirmation(&self) -> String {
        self.0.clone()
    }
}
