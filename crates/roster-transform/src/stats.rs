//! Column statistics backing the fill steps of the cleaning pipeline.

use std::collections::BTreeMap;

use roster_model::Value;

/// Median of the samples, with linear interpolation for even counts.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// The most frequent value, keyed by string form.
///
/// Ties resolve to the value first encountered, so the result is stable
/// across repeated passes over the same rows.
pub fn mode<'a, I>(samples: I) -> Option<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts: BTreeMap<String, (usize, usize, &Value)> = BTreeMap::new();
    for (position, value) in samples.into_iter().enumerate() {
        let entry = counts
            .entry(value.to_string())
            .or_insert((0, position, value));
        entry.0 += 1;
    }

    let mut best: Option<(usize, usize, &Value)> = None;
    for (count, first_seen, value) in counts.into_values() {
        let wins = match best {
            None => true,
            Some((best_count, best_first, _)) => {
                count > best_count || (count == best_count && first_seen < best_first)
            }
        };
        if wins {
            best = Some((count, first_seen, value));
        }
    }
    best.map(|(_, _, value)| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn median_even_count_interpolates() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[10.0, 20.0]), Some(15.0));
    }

    #[test]
    fn median_empty_is_none() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn mode_picks_most_frequent() {
        let values = vec![
            Value::Str("S".to_string()),
            Value::Str("C".to_string()),
            Value::Str("S".to_string()),
        ];
        assert_eq!(mode(&values), Some(Value::Str("S".to_string())));
    }

    #[test]
    fn mode_tie_breaks_on_first_seen() {
        let values = vec![
            Value::Str("C".to_string()),
            Value::Str("S".to_string()),
            Value::Str("S".to_string()),
            Value::Str("C".to_string()),
        ];
        assert_eq!(mode(&values), Some(Value::Str("C".to_string())));
    }

    #[test]
    fn mode_keys_by_string_form() {
        // Int(3) and Float(3.0) share a string form and count as one value.
        let values = vec![Value::Int(3), Value::Float(3.0), Value::Int(1)];
        assert_eq!(mode(&values), Some(Value::Int(3)));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        let values: Vec<Value> = Vec::new();
        assert_eq!(mode(&values), None);
    }
}
