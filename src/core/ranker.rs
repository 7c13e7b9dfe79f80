//! Transaction ranking
//!
//! Stable merge sort over ledger records. Ranking never touches the caller's
//! slice: the input is borrowed and a freshly ordered `Vec` of clones is
//! returned, so the original ledger order stays available to the caller.

use crate::types::TransactionRecord;

/// Rank records by amount, ascending and stable
///
/// Records with equal amounts keep their relative input order.
///
/// # Examples
///
/// ```
/// use fraud_ledger::core::ranker::rank;
/// use fraud_ledger::TransactionRecord;
/// use rust_decimal::Decimal;
///
/// let ledger = vec![
///     TransactionRecord::new(1, "TRANSFER", "C1", "C2", Decimal::from(500)),
///     TransactionRecord::new(1, "PAYMENT", "C3", "M4", Decimal::from(20)),
/// ];
///
/// let ranked = rank(&ledger);
/// assert_eq!(ranked[0].sender, "C3");
/// assert_eq!(ledger[0].sender, "C1"); // input untouched
/// ```
pub fn rank(records: &[TransactionRecord]) -> Vec<TransactionRecord> {
    rank_by(records, |record| record.amount)
}

/// The `n` highest-value records, largest first
///
/// Ties keep the opposite of their input order (later records first), which
/// is the order you get by reading the ascending ranking from its end. If `n`
/// exceeds the number of records, every record is returned.
pub fn top_by_amount(records: &[TransactionRecord], n: usize) -> Vec<TransactionRecord> {
    top_of(&rank(records), n)
}

/// The last `n` entries of an ascending ranking, largest first
///
/// For callers that already hold the full ranking from [`rank`].
pub fn top_of<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    ranked.iter().rev().take(n).cloned().collect()
}

/// Stable merge sort of `items` by `key`
///
/// Splits at the midpoint, sorts both halves recursively and merges them,
/// taking from the left half whenever its front key is not greater than the
/// right one. O(N log N) comparisons, O(N) extra memory per merge level.
///
/// Keys only need `PartialOrd`. An incomparable pair (e.g. a `NaN` float key)
/// is merged right-element-first; sortedness is only guaranteed for keys that
/// form a total order.
pub fn rank_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    merge_sort(items.to_vec(), &key)
}

fn merge_sort<T, K, F>(mut items: Vec<T>, key: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, key);
    let right = merge_sort(right, key);

    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // `<=` keeps equal keys from the left half first (stability)
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) <= key(r),
            _ => break,
        };

        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
