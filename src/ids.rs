use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 7;

/// Source of record identifiers. Every id is `prefix` followed by a suffix
/// chosen by the implementation.
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Prefix plus seven random base-36 characters. Uniqueness is probabilistic.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let mut rng = rand::rng();
        let suffix: String = (0..RANDOM_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        format!("{prefix}{suffix}")
    }
}

/// Prefix plus a counter starting at 1. Never repeats within one generator.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.issued += 1;
        format!("{prefix}{}", self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_keep_prefix_and_length() {
        let mut ids = RandomIds;
        let id = ids.next_id("u");
        assert!(id.starts_with('u'));
        assert_eq!(id.len(), 1 + RANDOM_LEN);
        assert!(id[1..].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn sequential_ids_count_up_across_prefixes() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id("e"), "e1");
        assert_eq!(ids.next_id("u"), "u2");
        assert_eq!(ids.next_id("e"), "e3");
    }
}
