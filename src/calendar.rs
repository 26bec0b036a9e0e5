/// Days in each month of a non-leap year, indexed by month number
const DAYS_IN_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Coordination numbers add this offset to the day of birth
pub const COORDINATION_DAY_OFFSET: u32 = 60;

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` for the given year, `None` if the month does not exist.
pub fn days_in_month(year: u32, month: u32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => DAYS_IN_MONTH.get(month as usize).copied(),
        _ => None,
    }
}

/// Checks that `day` is a real day of `month` in `year`.
pub fn is_valid_date(year: u32, month: u32, day: u32) -> bool {
    match days_in_month(year, month) {
        Some(days) => day >= 1 && day <= days,
        None => false,
    }
}

/// Removes the coordination number offset from a day field. Days below the
/// offset are returned unchanged.
pub fn coordination_day(day: u32) -> u32 {
    if day >= COORDINATION_DAY_OFFSET {
        day - COORDINATION_DAY_OFFSET
    } else {
        day
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_february() {
        assert!(is_valid_date(2000, 2, 29));
        assert!(!is_valid_date(1900, 2, 29));
        assert!(is_valid_date(1900, 2, 28));
        assert!(!is_valid_date(2000, 2, 30));
    }

    #[test]
    fn test_month_lengths() {
        let test_cases = vec![
            (1, 31),
            (3, 31),
            (4, 30),
            (5, 31),
            (6, 30),
            (7, 31),
            (8, 31),
            (9, 30),
            (10, 31),
            (11, 30),
            (12, 31),
        ];
        for (month, days) in test_cases {
            assert!(is_valid_date(2023, month, days), "month {}", month);
            assert!(!is_valid_date(2023, month, days + 1), "month {}", month);
        }
    }

    #[test]
    fn invalid_month_or_day() {
        assert!(!is_valid_date(2023, 0, 1));
        assert!(!is_valid_date(2023, 13, 1));
        assert!(!is_valid_date(2023, 1, 0));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_coordination_day() {
        assert_eq!(coordination_day(5), 5);
        assert_eq!(coordination_day(31), 31);
        assert_eq!(coordination_day(60), 0);
        assert_eq!(coordination_day(61), 1);
        assert_eq!(coordination_day(91), 31);
    }
}
