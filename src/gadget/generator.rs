//! # Randomized Generators
//!
//! Display-name generation for new gadgets, the cosmetic success-probability
//! suffix applied while listing, and one-time self-destruct codes. None of
//! the generated values participate in any verification flow.

use rand::seq::SliceRandom;
use rand::Rng;

/// First names drawn for generated gadget display names
const FIRST_NAMES: &[&str] = &[
    "Amelia", "Arthur", "Beatrix", "Caspian", "Clara", "Dexter", "Edith", "Felix", "Greta",
    "Hugo", "Imogen", "Jasper", "Klaus", "Lenora", "Magnus", "Nadia", "Oscar", "Penelope",
    "Quentin", "Rosalind", "Silas", "Tabitha", "Ulysses", "Vera", "Wallace", "Xenia", "Yusuf",
    "Zelda",
];

/// Generate a display name for a new gadget: `"The "` + a random first name
pub fn generate_display_name() -> String {
    let mut rng = rand::thread_rng();
    // the list is non-empty, choose cannot fail
    let name = FIRST_NAMES.choose(&mut rng).unwrap_or(&"Phoenix");
    format!("The {}", name)
}

/// Generate a mission success probability in [1, 100]
pub fn generate_success_probability() -> u32 {
    rand::thread_rng().gen_range(1..=100)
}

/// Append the cosmetic success-probability suffix to a display name.
///
/// Applied to response copies only; never written back to the store.
pub fn decorate_with_probability(name: &str) -> String {
    format!(
        "{} - {}% success probability",
        name,
        generate_success_probability()
    )
}

/// Generate a one-time 4-digit self-destruct confirmation code.
///
/// The code is returned to the caller and never persisted or verified.
pub fn generate_destruct_code() -> u32 {
    rand::thread_rng().gen_range(1000..=9999)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_has_the_prefix() {
        for _ in 0..50 {
            let name = generate_display_name();
            assert!(name.starts_with("The "));
            assert!(name.len() > 4);
        }
    }

    #[test]
    fn test_success_probability_range() {
        for _ in 0..200 {
            let prob = generate_success_probability();
            assert!((1..=100).contains(&prob));
        }
    }

    #[test]
    fn test_decorated_name_keeps_original_prefix() {
        let decorated = decorate_with_probability("The Kraken");
        assert!(decorated.starts_with("The Kraken - "));
        assert!(decorated.ends_with("% success probability"));
    }

    #[test]
    fn test_destruct_code_is_four_digits() {
        for _ in 0..200 {
            let code = generate_destruct_code();
            assert!((1000..=9999).contains(&code));
        }
    }
}
