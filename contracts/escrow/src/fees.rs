use crate::errors::Error;

pub const MAX_PERCENT: u32 = 100;

/// `floor(amount * percent / 100)` without widening past `i128`.
///
/// The amount is split into whole hundreds and a remainder so the product
/// never exceeds the input amount.
pub fn split_share(amount: i128, percent: u32) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if percent > MAX_PERCENT {
        return Err(Error::InvalidPercentage);
    }
    let percent = percent as i128;
    let whole = (amount / 100) * percent;
    let rest = (amount % 100) * percent / 100;
    Ok(whole + rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_share_exact() {
        assert_eq!(split_share(13_500_000, 5), Ok(675_000));
        assert_eq!(split_share(13_500_000, 3), Ok(405_000));
        assert_eq!(split_share(1_000, 0), Ok(0));
        assert_eq!(split_share(1_000, 100), Ok(1_000));
    }

    #[test]
    fn test_split_share_rounds_down() {
        // 199 * 3 / 100 = 5.97
        assert_eq!(split_share(199, 3), Ok(5));
        assert_eq!(split_share(99, 1), Ok(0));
        assert_eq!(split_share(101, 50), Ok(50));
    }

    #[test]
    fn test_split_share_no_overflow_at_max() {
        assert_eq!(split_share(i128::MAX, 100), Ok(i128::MAX));
        assert_eq!(split_share(i128::MAX, 50), Ok(i128::MAX / 2));
    }

    #[test]
    fn test_split_share_rejects_bad_input() {
        assert_eq!(split_share(-1, 5), Err(Error::InvalidAmount));
        assert_eq!(split_share(100, 101), Err(Error::InvalidPercentage));
    }
}
