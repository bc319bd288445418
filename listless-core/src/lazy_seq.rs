// listless-core - Lazy, potentially infinite sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lazy sequences over memoising delay cells.
//!
//! A `LazySeq` is a chain of cons cells in which both the head and the
//! tail sit behind a [`Delay`]. The head is a [`Maybe`]: a position
//! whose element failed a `filter` keeps its cell in the chain with an
//! absent head (a *gap*) rather than being spliced out, which would
//! force the tail arbitrarily far ahead. Transforms wrap new delays
//! around existing ones in O(1) without forcing anything; consumers
//! (`first`, `to_list`, `reduce`, `count`) skip gaps at the moment
//! values are demanded.
//!
//! Consumers walk the chain with loops rather than recursion, so a long
//! gap run or a long finite sequence costs constant stack. `to_list`,
//! `reduce` and `count` never return on an unbounded sequence; bounding
//! with `take` or `take_while` first is the caller's job.

use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::delay::Delay;
use crate::error::{Error, Result};
use crate::maybe::Maybe;

/// A lazy, possibly unbounded sequence.
pub struct LazySeq<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    /// A cell: delayed head (absent for gaps) and delayed tail
    Cons {
        first: Delay<Maybe<T>>,
        rest: Delay<LazySeq<T>>,
    },
    /// Definite end of a finite sequence
    End,
}

impl<T> LazySeq<T> {
    fn node(first: Delay<Maybe<T>>, rest: Delay<LazySeq<T>>) -> Self {
        LazySeq {
            repr: Repr::Cons { first, rest },
        }
    }

    /// The terminal sequence.
    pub fn end() -> Self {
        LazySeq { repr: Repr::End }
    }

    /// True only for the terminal sequence.
    pub fn is_end(&self) -> bool {
        matches!(self.repr, Repr::End)
    }

    /// Steal the already-realised tail if this chain is its only owner.
    fn detach_rest(&self) -> Option<LazySeq<T>> {
        match &self.repr {
            Repr::End => None,
            Repr::Cons { rest, .. } => rest.take_if_unique(LazySeq::end()),
        }
    }
}

impl<T> Drop for LazySeq<T> {
    /// Unlink realised chains iteratively. A finite or fully-forced
    /// prefix can be hundreds of thousands of cells long, and the
    /// default recursive drop glue would overflow the stack on it.
    fn drop(&mut self) {
        let mut next = self.detach_rest();
        while let Some(seq) = next {
            next = seq.detach_rest();
        }
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// An unbounded sequence that calls `producer` once per position.
    ///
    /// Every cell, including all future cells of the tail, delivers to
    /// the same producer; no position is produced until demanded.
    pub fn generate(producer: impl Fn() -> T + 'static) -> Self {
        Self::generate_shared(Rc::new(producer))
    }

    fn generate_shared(producer: Rc<dyn Fn() -> T>) -> Self {
        let first = {
            let producer = Rc::clone(&producer);
            Delay::new(move || Maybe::Some(producer()))
        };
        let rest = Delay::new(move || Self::generate_shared(Rc::clone(&producer)));
        Self::node(first, rest)
    }

    /// The unbounded sequence `seed, step(seed), step(step(seed)), ..`.
    ///
    /// The head is realised up front; only the tail is deferred.
    pub fn iterate(seed: T, step: impl Fn(&T) -> T + 'static) -> Self {
        Self::iterate_shared(seed, Rc::new(step))
    }

    fn iterate_shared(seed: T, step: Rc<dyn Fn(&T) -> T>) -> Self {
        let first = Delay::from_value(Maybe::Some(seed.clone()));
        let rest = Delay::new(move || Self::iterate_shared(step(&seed), Rc::clone(&step)));
        Self::node(first, rest)
    }

    /// Prepend an already-realised element.
    pub fn cons(value: T, rest: LazySeq<T>) -> Self {
        Self::node(
            Delay::from_value(Maybe::Some(value)),
            Delay::from_value(rest),
        )
    }

    /// The first present value, skipping gaps. Fails on `End`.
    pub fn first(&self) -> Result<T> {
        let mut cur = self.clone();
        loop {
            match &cur.repr {
                Repr::End => return Err(Error::EndOfSequence),
                Repr::Cons { first, rest } => match first.force() {
                    Maybe::Some(value) => return Ok(value),
                    Maybe::None => cur = rest.force(),
                },
            }
        }
    }

    /// Everything after the first present value: skips gaps to reach
    /// it, then drops exactly that one element. Fails on `End`.
    pub fn rest(&self) -> Result<LazySeq<T>> {
        let mut cur = self.clone();
        loop {
            match &cur.repr {
                Repr::End => return Err(Error::EndOfSequence),
                Repr::Cons { first, rest } => match first.force() {
                    Maybe::Some(_) => return Ok(rest.force()),
                    Maybe::None => cur = rest.force(),
                },
            }
        }
    }

    /// Lazily transform every present value, keeping gaps as gaps.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> LazySeq<U> {
        self.map_shared(Rc::new(f))
    }

    fn map_shared<U: Clone + 'static>(&self, f: Rc<dyn Fn(T) -> U>) -> LazySeq<U> {
        match &self.repr {
            Repr::End => LazySeq::end(),
            Repr::Cons { first, rest } => {
                let mapped_first = {
                    let first = first.clone();
                    let f = Rc::clone(&f);
                    Delay::new(move || first.force().map(|v| f(v)))
                };
                let mapped_rest = {
                    let rest = rest.clone();
                    Delay::new(move || rest.force().map_shared(Rc::clone(&f)))
                };
                LazySeq::node(mapped_first, mapped_rest)
            }
        }
    }

    /// Lazily drop values failing the predicate.
    ///
    /// A failing value becomes a gap in place; nothing is forced and
    /// the tail is not searched for a replacement. Consumers skip the
    /// gap only at the moment they demand a value.
    pub fn filter(&self, pred: impl Fn(&T) -> bool + 'static) -> LazySeq<T> {
        self.filter_shared(Rc::new(pred))
    }

    fn filter_shared(&self, pred: Rc<dyn Fn(&T) -> bool>) -> LazySeq<T> {
        match &self.repr {
            Repr::End => LazySeq::end(),
            Repr::Cons { first, rest } => {
                let filtered_first = {
                    let first = first.clone();
                    let pred = Rc::clone(&pred);
                    Delay::new(move || first.force().filter(|v| pred(v)))
                };
                let filtered_rest = {
                    let rest = rest.clone();
                    Delay::new(move || rest.force().filter_shared(Rc::clone(&pred)))
                };
                LazySeq::node(filtered_first, filtered_rest)
            }
        }
    }

    /// At most `n` present values; gaps cost nothing against the
    /// budget, however many run together.
    ///
    /// The head cell is shared with the source, so forcing the taken
    /// view realises the source's cell too.
    pub fn take(&self, n: usize) -> LazySeq<T> {
        match &self.repr {
            Repr::End => LazySeq::end(),
            Repr::Cons { .. } if n == 0 => LazySeq::end(),
            Repr::Cons { first, rest } => {
                let taken_rest = {
                    let first = first.clone();
                    let rest = rest.clone();
                    Delay::new(move || match first.force() {
                        Maybe::Some(_) => rest.force().take(n - 1),
                        Maybe::None => rest.force().take(n),
                    })
                };
                LazySeq::node(first.clone(), taken_rest)
            }
        }
    }

    /// Keep values until the predicate first fails on a real element,
    /// then end the sequence for good.
    ///
    /// Inherited gaps are not failures: the walk continues across them
    /// without truncating. Only a present value that the predicate
    /// rejects produces `End`.
    pub fn take_while(&self, pred: impl Fn(&T) -> bool + 'static) -> LazySeq<T> {
        self.take_while_shared(Rc::new(pred))
    }

    fn take_while_shared(&self, pred: Rc<dyn Fn(&T) -> bool>) -> LazySeq<T> {
        match &self.repr {
            Repr::End => LazySeq::end(),
            Repr::Cons { first, rest } => {
                // One shared cell: the new head and the truncation
                // decision below both read it, so the predicate runs
                // at most once per element.
                let checked = {
                    let first = first.clone();
                    let pred = Rc::clone(&pred);
                    Delay::new(move || first.force().filter(|v| pred(v)))
                };
                let truncated_rest = {
                    let first = first.clone();
                    let rest = rest.clone();
                    let checked = checked.clone();
                    Delay::new(move || match first.force() {
                        Maybe::Some(_) => match checked.force() {
                            Maybe::Some(_) => rest.force().take_while_shared(Rc::clone(&pred)),
                            Maybe::None => LazySeq::end(),
                        },
                        Maybe::None => rest.force().take_while_shared(Rc::clone(&pred)),
                    })
                };
                LazySeq::node(checked, truncated_rest)
            }
        }
    }

    /// Materialise a finite sequence, skipping gaps.
    pub fn to_list(&self) -> Vector<T> {
        let mut list = Vector::new();
        let mut cur = self.clone();
        loop {
            match &cur.repr {
                Repr::End => return list,
                Repr::Cons { first, rest } => {
                    if let Maybe::Some(value) = first.force() {
                        list.push_back(value);
                    }
                    cur = rest.force();
                }
            }
        }
    }

    /// Fold every present value into the accumulator, head to tail;
    /// gaps leave the accumulator untouched.
    pub fn reduce<U>(&self, identity: U, combiner: impl Fn(U, T) -> U) -> U {
        let mut acc = identity;
        let mut cur = self.clone();
        loop {
            match &cur.repr {
                Repr::End => return acc,
                Repr::Cons { first, rest } => {
                    if let Maybe::Some(value) = first.force() {
                        acc = combiner(acc, value);
                    }
                    cur = rest.force();
                }
            }
        }
    }

    /// The number of present values in a finite sequence.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut cur = self.clone();
        loop {
            match &cur.repr {
                Repr::End => return count,
                Repr::Cons { first, rest } => {
                    if first.force().is_some() {
                        count += 1;
                    }
                    cur = rest.force();
                }
            }
        }
    }
}

impl<T> Clone for LazySeq<T> {
    /// Cheap: clones share the same delay cells and memoisation.
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::End => Repr::End,
            Repr::Cons { first, rest } => Repr::Cons {
                first: first.clone(),
                rest: rest.clone(),
            },
        };
        LazySeq { repr }
    }
}

/// Build a finite sequence of realised cells, preserving order.
impl<T: Clone + 'static> FromIterator<T> for LazySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(LazySeq::end(), |rest, value| LazySeq::cons(value, rest))
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::End => write!(f, "#<LazySeq: end>"),
            Repr::Cons { first, rest } => write!(f, "#<LazySeq: {:?} {:?}>", first, rest),
        }
    }
}
