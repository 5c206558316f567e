//! Small utilities shared by the algorithm collaborators.

use std::str::FromStr;

/// Splits a string of comma or space-separated values into a vector of
/// the target type.
///
/// Empty tokens (from repeated separators or surrounding whitespace) are
/// skipped, so `"0.0 1.2"` and `"2.4, 5.67,  88"` both parse.
///
/// # Errors
///
/// The parse error of the first token that does not convert.
pub fn split_string_into_vector<T: FromStr>(list: &str) -> std::result::Result<Vec<T>, T::Err> {
    list.split([',', ' '])
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Assesses whether all values in the slice are equal.
///
/// An empty slice is constant. Leading NaN values are skipped before
/// picking the comparison value, since NaN compares unequal to itself;
/// an all-NaN slice is considered constant.
#[must_use]
pub fn is_constant_value(values: &[f64]) -> bool {
    let mut iter = values.iter();
    let reference = loop {
        match iter.next() {
            None => return true,
            Some(value) if value.is_nan() => {}
            Some(value) => break *value,
        }
    };
    iter.all(|&value| value == reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma_separated() {
        let values: Vec<f64> = split_string_into_vector("0,2,10,-0.1,20").unwrap();
        assert_eq!(values, vec![0.0, 2.0, 10.0, -0.1, 20.0]);
    }

    #[test]
    fn test_split_space_separated_with_gaps() {
        let values: Vec<i32> = split_string_into_vector("1 2  3, 4").unwrap();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_split_rejects_bad_token() {
        let result: std::result::Result<Vec<f64>, _> = split_string_into_vector("1,x,3");
        assert!(result.is_err());
    }

    #[test]
    fn test_split_empty_string() {
        let values: Vec<f64> = split_string_into_vector("").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_constant_value() {
        assert!(is_constant_value(&[]));
        assert!(is_constant_value(&[2.0, 2.0, 2.0]));
        assert!(!is_constant_value(&[2.0, 3.0]));
    }

    #[test]
    fn test_constant_value_with_nans() {
        assert!(is_constant_value(&[f64::NAN, f64::NAN]));
        assert!(is_constant_value(&[f64::NAN, 1.0, 1.0]));
        assert!(!is_constant_value(&[f64::NAN, 1.0, 2.0]));
    }
}
