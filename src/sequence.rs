//! Integer sequence conversion

use type_mapping::Integer;

/// Convert every element of an integer slice to another integer width.
///
/// `None` stays `None`; an empty slice gives an empty vector. Elements
/// truncate exactly like [`crate::int32_value`] and friends.
pub fn ints<Out: Integer, In: Integer>(v: Option<&[In]>) -> Option<Vec<Out>> {
    v.map(|items| items.iter().map(|item| item.cast()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints_absent() {
        assert_eq!(ints::<i64, i32>(None), None);
    }

    #[test]
    fn test_ints_empty() {
        assert_eq!(ints::<i64, i32>(Some(&[][..])), Some(Vec::new()));
    }

    #[test]
    fn test_ints_value() {
        assert_eq!(ints::<i64, i32>(Some(&[1, 2][..])), Some(vec![1i64, 2]));
        assert_eq!(ints::<usize, u8>(Some(&[3, 2, 1][..])), Some(vec![3usize, 2, 1]));
    }

    #[test]
    fn test_ints_truncates() {
        let wide = [i64::from(u8::MAX) + 1, -1];
        assert_eq!(ints::<u8, i64>(Some(&wide[..])), Some(vec![0u8, 255]));
    }
}
