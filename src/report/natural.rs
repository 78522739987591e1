//! Case-insensitive natural-order string comparison.
//!
//! Runs of ASCII digits compare by numeric value, so `^1.9` sorts before
//! `^1.10` and `module2` before `Module10`. A run starting with `0` is read
//! as a decimal fraction and compared digit by digit, so `1.05` sorts
//! before `1.1`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two strings case-insensitively in natural order.
///
/// Strings that are equal under natural rules are ordered bytewise, which
/// keeps the ordering total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_loose(a, b).then_with(|| a.cmp(b))
}

fn natural_cmp_loose(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        let (ca, cb) = match (a.peek(), b.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => (ca, cb),
        };

        let ord = if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let run_a = take_digits(&mut a);
            let run_b = take_digits(&mut b);
            compare_digit_runs(&run_a, &run_b)
        } else {
            a.next();
            b.next();
            ca.to_lowercase().cmp(cb.to_lowercase())
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    if a.starts_with('0') || b.starts_with('0') {
        // Left-aligned: the first differing digit decides, a shorter run is smaller.
        return a.cmp(b);
    }
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("^1.9", "^1.10"), Ordering::Less);
        assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("drupal/token", "drupal/token_or"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn zero_led_runs_compare_as_fractions() {
        assert_eq!(natural_cmp("1.05", "1.1"), Ordering::Less);
        assert_eq!(natural_cmp("1.5", "1.05"), Ordering::Greater);
        assert_eq!(natural_cmp("x05", "x050"), Ordering::Less);
        assert_eq!(natural_cmp("v007", "v8"), Ordering::Less);
        assert_eq!(natural_cmp("v01", "v1"), Ordering::Less);
    }

    #[test]
    fn ordering_is_total() {
        assert_eq!(natural_cmp("Token", "token"), Ordering::Less);
        assert_eq!(natural_cmp("token", "token"), Ordering::Equal);
    }

    #[test]
    fn sorts_a_list() {
        let mut items = vec!["Module10", "module2", "Module1", "alpha"];
        items.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(items, vec!["alpha", "Module1", "module2", "Module10"]);
    }
}
