use crate::error::EmptyInputError;

/// Picks the item with the largest key. Only a strictly larger key
/// displaces the current best, so the first of several equal maxima wins.
pub fn max_by<I, K, F>(items: I, key: F) -> Result<I::Item, EmptyInputError>
where
    I: IntoIterator,
    K: PartialOrd,
    F: Fn(&I::Item) -> K,
{
    let mut iter = items.into_iter();
    let first = iter.next().ok_or(EmptyInputError)?;
    let mut best_key = key(&first);
    let mut best = first;
    for item in iter {
        let item_key = key(&item);
        if item_key > best_key {
            best = item;
            best_key = item_key;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![5], 0)]
    #[case(vec![1, 9, 3], 1)]
    #[case(vec![3, 7, 7], 1)]
    #[case(vec![4, 4, 4, 4], 0)]
    #[case(vec![0, 0, 2, 1, 2], 2)]
    fn max_by_returns_first_maximum(#[case] keys: Vec<u64>, #[case] expected_index: usize) {
        let items: Vec<(usize, u64)> = keys.into_iter().enumerate().collect();

        let (index, _) = max_by(items, |(_, k)| *k).unwrap();

        assert_eq!(index, expected_index);
    }

    #[test]
    fn max_by_on_empty_input_fails() {
        let items: Vec<u64> = Vec::new();

        assert_eq!(max_by(items, |k| *k), Err(EmptyInputError));
    }

    #[test]
    fn max_by_never_prefers_a_zero_key_on_empty_like_input() {
        let picked = max_by(vec![("only", 0_u64)], |(_, k)| *k).unwrap();

        assert_eq!(picked, ("only", 0));
    }
}
