//! Predicate function pointers and filtering through them.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectError;

/// A unary predicate over `T`.
pub type Predicate<T> = fn(&T) -> bool;

/// Lazily yield the items for which `predicate` holds, preserving order.
pub fn elements_where<I>(items: I, predicate: Predicate<I::Item>) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
{
    items.into_iter().filter(move |item| predicate(item))
}

pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

pub fn is_odd(x: &i32) -> bool {
    x % 2 != 0
}

pub fn is_greater_than_fifty(x: &i32) -> bool {
    *x > 50
}

/// Trial division by odd divisors up to `sqrt(x)`. Values below 2 are not prime.
pub fn is_prime(x: &i32) -> bool {
    let x = *x;
    if x < 2 {
        return false;
    }
    if x == 2 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= x / divisor {
        if x % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Named built-in predicates over integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Even,
    Odd,
    GreaterThanFifty,
    Prime,
}

impl Condition {
    /// Every condition, in listing order.
    pub const ALL: [Condition; 4] = [
        Condition::Even,
        Condition::Odd,
        Condition::GreaterThanFifty,
        Condition::Prime,
    ];

    pub fn as_predicate(self) -> Predicate<i32> {
        match self {
            Self::Even => is_even,
            Self::Odd => is_odd,
            Self::GreaterThanFifty => is_greater_than_fifty,
            Self::Prime => is_prime,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
            Self::GreaterThanFifty => "gt50",
            Self::Prime => "prime",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Condition {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            "gt50" | "greater-than-50" => Ok(Self::GreaterThanFifty),
            "prime" => Ok(Self::Prime),
            _ => Err(SelectError::UnknownCondition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::PRIMES_UP_TO_100;

    #[test]
    fn even_selects_half_of_one_to_hundred() {
        let evens: Vec<i32> = elements_where(1..=100, Condition::Even.as_predicate()).collect();
        assert_eq!(evens.len(), 50);
        assert_eq!(evens.first(), Some(&2));
        assert!(evens.iter().all(|x| x % 2 == 0));
    }

    #[test]
    fn odd_handles_negative_values() {
        let odds: Vec<i32> = elements_where(-3..=3, is_odd).collect();
        assert_eq!(odds, vec![-3, -1, 1, 3]);
    }

    #[test]
    fn greater_than_fifty_starts_at_fifty_one() {
        let large: Vec<i32> =
            elements_where(1..=100, Condition::GreaterThanFifty.as_predicate()).collect();
        assert_eq!(large, (51..=100).collect::<Vec<_>>());
    }

    #[test]
    fn prime_matches_known_primes() {
        let primes: Vec<i32> = elements_where(1..=100, Condition::Prime.as_predicate()).collect();
        assert_eq!(primes, PRIMES_UP_TO_100);
    }

    #[test]
    fn prime_edge_cases() {
        assert!(!is_prime(&1));
        assert!(is_prime(&2));
        assert!(!is_prime(&0));
        assert!(!is_prime(&-7));
        assert!(!is_prime(&9));
        assert!(is_prime(&i32::MAX));
    }

    #[test]
    fn elements_where_is_lazy_and_ordered() {
        let first_two: Vec<i32> = elements_where(1.., is_prime).take(2).collect();
        assert_eq!(first_two, vec![2, 3]);
    }

    #[test]
    fn elements_where_accepts_any_item_type() {
        fn is_short(word: &&str) -> bool {
            word.len() <= 3
        }
        let words = vec!["one", "three", "six"];
        let short: Vec<&str> = elements_where(words, is_short).collect();
        assert_eq!(short, vec!["one", "six"]);
    }

    #[test]
    fn parse_round_trips_and_rejects_unknown() {
        for condition in Condition::ALL {
            assert_eq!(condition.to_string().parse::<Condition>(), Ok(condition));
        }
        assert_eq!(
            "greater-than-50".parse::<Condition>(),
            Ok(Condition::GreaterThanFifty)
        );
        assert_eq!(
            "square".parse::<Condition>(),
            Err(SelectError::UnknownCondition("square".to_string()))
        );
    }
}
