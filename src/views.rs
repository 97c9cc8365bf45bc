use crate::record::Record;

/// Ascending lexicographic order on name. Ties keep input order.
pub fn by_name(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}

/// Highest rating first. Ties keep input order.
pub fn by_rating(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
    sorted
}

/// Highest price first. Ties keep input order.
pub fn by_price(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.price().cmp(&a.price()));
    sorted
}

// ── Tests ──
