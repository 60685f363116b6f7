//! Word queries over vertices holding strings.
//!
//! Word length is measured in characters (Unicode scalar values), not bytes
//! and not UTF-16 code units: a character outside the Basic Multilingual
//! Plane such as `𝄞` counts once.

use std::io;

use crate::graph::access::visited::{Visited, VisitedNodes};
use crate::graph::basic::{Dfs, Vertex};

#[inline]
fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Iterator over the reachable words shorter than a bound.
///
/// Created by [`short_words`].
#[derive(Debug)]
pub struct ShortWords<'a, T> {
    dfs: Dfs<'a, Vertex<'a, T>>,
    bound: usize,
}

impl<'a, T: AsRef<str> + 'a> Iterator for ShortWords<'a, T> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.dfs
            .by_ref()
            .map(|v| v.value().as_ref())
            .find(|w| word_len(w) < self.bound)
    }
}

/// Returns the words reachable from `vertex` that are strictly shorter than
/// `k` characters.
///
/// Length is the number of `char`s in the word, so `"𝄞"` has length 1.
/// Every reachable vertex is considered once, even on cyclic graphs, and
/// words come out in depth-first pre-order. A `None` vertex or `k == 0`
/// yields nothing.
pub fn short_words<'a, T: AsRef<str> + 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    k: usize,
) -> ShortWords<'a, T> {
    let start = if k == 0 { None } else { vertex.into() };
    ShortWords {
        dfs: Dfs::new(start),
        bound: k,
    }
}

/// Writes each word of [`short_words`] to `out`, one per line.
///
/// # Errors
/// Returns the first error reported by `out`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(vertex, out)))]
pub fn write_short_words<'a, T: AsRef<str> + 'a, W: io::Write + ?Sized>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    k: usize,
    out: &mut W,
) -> io::Result<()> {
    for word in short_words(vertex, k) {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Prints each word of [`short_words`] to standard output, one per line.
///
/// # Errors
/// Returns an error if standard output cannot be written.
pub fn print_short_words<'a, T: AsRef<str> + 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    k: usize,
) -> io::Result<()> {
    let stdout = io::stdout();
    write_short_words(vertex, k, &mut stdout.lock())
}

fn longest_of<'a, T, V>(dfs: Dfs<'a, Vertex<'a, T>, V>) -> &'a str
where
    T: AsRef<str> + 'a,
    V: Visited<&'a Vertex<'a, T>>,
{
    let mut longest = "";
    let mut longest_len = 0;
    for v in dfs {
        let word = v.value().as_ref();
        let len = word_len(word);
        // Strictly longer only: the first word of maximal length wins.
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// Returns the longest word reachable from `vertex`, including its own.
///
/// Among words of equal maximal length the one met first in depth-first
/// pre-order wins. A `None` vertex yields `""`. Length is counted in
/// `char`s, as in [`short_words`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, ret))]
pub fn longest_word<'a, T: AsRef<str> + 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
) -> &'a str {
    longest_of(Dfs::new(vertex))
}

/// Like [`longest_word`], but continues from a caller-owned visited set.
///
/// Vertices already in `visited` are skipped (an already-visited start
/// yields `""`), and every vertex the search enters is added to it.
pub fn longest_word_with_visited<'a, T: AsRef<str> + 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    visited: &mut VisitedNodes<'a>,
) -> &'a str {
    longest_of(Dfs::with_visited(vertex, visited))
}
