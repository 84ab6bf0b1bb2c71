//! Rules assigning a tag to a single word.

mod all_digits;
mod capitalized;
mod contains_digit;
mod exact_match;
mod suffix;

pub use all_digits::AllDigitsRule;
pub use capitalized::CapitalizedRule;
pub use contains_digit::ContainsDigitRule;
pub use exact_match::ExactMatchRule;
pub use suffix::SuffixRule;
