//! Total depth-first queries over the basic graph representations.
//!
//! Every query runs its own traversal with its own visited set (the
//! `*_with_visited` variants borrow the caller's). None of them panic on
//! their inputs: a `None` start, a zero bound or an absent key produce an
//! empty result, `""` or `false`.

pub mod flights;
pub mod loops;
pub mod unreachable;
pub mod words;

pub use flights::can_reach;
pub use loops::{
    print_self_loopers, self_loopers, self_loopers_with_visited, write_self_loopers, SelfLoopers,
};
pub use unreachable::{reachable, unreachable};
pub use words::{
    longest_word, longest_word_with_visited, print_short_words, short_words, write_short_words,
    ShortWords,
};
