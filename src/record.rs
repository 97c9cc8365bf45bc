use std::fmt;
use std::hash::{Hash, Hasher};

/// One catalog entry: name, rating, price. Immutable once built.
#[derive(Debug, Clone)]
pub struct Record {
    name: String,
    rating: f64,
    price: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, rating: f64, price: i32) -> Self {
        Self {
            name: name.into(),
            rating,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn price(&self) -> i32 {
        self.price
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Rating: {:.1}, Price: {})",
            self.name, self.rating, self.price
        )
    }
}

// Rating compares bit-exact, not by tolerance, so Eq/Hash stay consistent.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.rating.to_bits() == other.rating.to_bits()
            && self.price == other.price
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.rating.to_bits().hash(state);
        self.price.hash(state);
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_rendering() {
        let r = Record::new("Bloodborne", 4.9, 60);
        assert_eq!(r.to_string(), "Bloodborne (Rating: 4.9, Price: 60)");
    }

    #[test]
    fn display_rounds_rating_to_one_decimal() {
        let r = Record::new("Hades", 4.0, 25);
        assert_eq!(r.to_string(), "Hades (Rating: 4.0, Price: 25)");
    }

    #[test]
    fn equality_is_structural() {
        let a = Record::new("Celeste", 4.7, 20);
        let b = Record::new("Celeste", 4.7, 20);
        assert_eq!(a, b);
        assert_ne!(a, Record::new("Celeste", 4.7, 21));
        assert_ne!(a, Record::new("Celeste", 4.6, 20));
        assert_ne!(a, Record::new("Celesta", 4.7, 20));
    }

    #[test]
    fn rating_comparison_is_bit_exact() {
        // 0.1 + 0.2 != 0.3 bit-wise; a tolerance-based eq would pass this
        let a = Record::new("X", 0.1 + 0.2, 10);
        let b = Record::new("X", 0.3, 10);
        assert_ne!(a, b);
    }

    #[test]
    fn duplicates_hash_equal() {
        let mut set = HashSet::new();
        set.insert(Record::new("Celeste", 4.7, 20));
        set.insert(Record::new("Celeste", 4.7, 20));
        assert_eq!(set.len(), 1);
    }
}
