use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Trait for types that can serve as edge labels in a DAWG.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store labels by value
/// - `Eq + Ord`: words are compared label by label to enforce sorted input
/// - `Hash`: labels are part of a node's register signature
/// - `Debug`: error messages and debug printing of the automaton
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> DawgChar for T {}

/// Inline buffer for a single word. Most dictionary words fit without allocating.
pub type WordBuf<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word when building or querying a DAWG.
///
/// Implemented for common string and sequence types so that
/// [`Builder::add_word`](super::builder::Builder::add_word) and the query methods on
/// [`Dawg`](super::automaton::Dawg) accept them directly without manual conversion.
pub trait IntoWord<C: DawgChar> {
    /// Collects this word into a label buffer.
    fn collect_word(self) -> WordBuf<C>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}
