//! OS version checks.
//!
//! Versions are compared the way a numeric string search compares them:
//! runs of digits are read as numbers, everything else compares character
//! by character. `"10.0"` is therefore newer than `"9.3"`, and `"8.10"`
//! newer than `"8.9"`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::device::DeviceInfo;

/// Compares two version strings, reading digit runs as numbers.
///
/// When one string is a prefix of the other (after numeric comparison of the
/// shared runs), the shorter one orders first: `"7" < "7.0"`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let order = compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right));
                if order != Ordering::Equal {
                    return order;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compares two digit runs by value without parsing, so any length works.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Returns `true` if the device runs `version` or newer.
pub fn is_os_at_least<D: DeviceInfo + ?Sized>(device: &D, version: &str) -> bool {
    compare_versions(&device.system_version(), version) != Ordering::Less
}

pub fn is_os7_or_greater<D: DeviceInfo + ?Sized>(device: &D) -> bool {
    is_os_at_least(device, "7.0")
}

pub fn is_os8_or_greater<D: DeviceInfo + ?Sized>(device: &D) -> bool {
    is_os_at_least(device, "8.0")
}

pub fn is_os9_or_greater<D: DeviceInfo + ?Sized>(device: &D) -> bool {
    is_os_at_least(device, "9.0")
}

pub fn is_os10_or_greater<D: DeviceInfo + ?Sized>(device: &D) -> bool {
    is_os_at_least(device, "10.0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{ForceTouchCapability, StaticDevice};

    fn device(version: &str) -> StaticDevice {
        StaticDevice::new(version, ForceTouchCapability::Unknown)
    }

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(compare_versions("10.0", "9.0"), Ordering::Greater);
        assert_eq!(compare_versions("8.10", "8.9"), Ordering::Greater);
        assert_eq!(compare_versions("9.3.5", "9.3.12"), Ordering::Less);
    }

    #[test]
    fn equal_versions() {
        assert_eq!(compare_versions("9.0", "9.0"), Ordering::Equal);
        assert_eq!(compare_versions("09.0", "9.0"), Ordering::Equal);
        assert_eq!(compare_versions("", ""), Ordering::Equal);
    }

    #[test]
    fn prefix_orders_first() {
        assert_eq!(compare_versions("7", "7.0"), Ordering::Less);
        assert_eq!(compare_versions("7.0.1", "7.0"), Ordering::Greater);
    }

    #[test]
    fn non_digits_compare_by_character() {
        assert_eq!(compare_versions("9.0b", "9.0a"), Ordering::Greater);
        assert_eq!(compare_versions("9.0", "9-0"), Ordering::Greater);
    }

    #[test]
    fn long_digit_runs_do_not_overflow() {
        assert_eq!(
            compare_versions("1.99999999999999999999999", "1.100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn at_least_checks() {
        assert!(is_os_at_least(&device("9.3"), "9.0"));
        assert!(is_os_at_least(&device("9.0"), "9.0"));
        assert!(!is_os_at_least(&device("8.4.1"), "9.0"));
    }

    #[test]
    fn shorthand_checks() {
        let ios9 = device("9.2");
        assert!(is_os7_or_greater(&ios9));
        assert!(is_os8_or_greater(&ios9));
        assert!(is_os9_or_greater(&ios9));
        assert!(!is_os10_or_greater(&ios9));

        assert!(is_os10_or_greater(&device("10.0")));
        assert!(is_os10_or_greater(&device("11.4")));
        assert!(!is_os7_or_greater(&device("6.1.6")));
    }
}
