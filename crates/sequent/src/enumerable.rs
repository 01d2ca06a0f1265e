//! The enumerable operation set.
//!
//! [`Enumerable`] is the protocol: a host type implements the two slot
//! accessors ([`slot`](Enumerable::slot) / [`slot_mut`](Enumerable::slot_mut))
//! and receives every operation as a provided method. No inheritance, no
//! runtime installation - attaching the protocol to a new host is one trait
//! impl.
//!
//! Operations fall into three categories:
//!
//! - **Transforming** (`map`, `select`, `reject`, `compact`, `unique`,
//!   `grep`): replace the slot contents in place and return `&mut Self`
//!   for chaining. The new contents are committed only after a full
//!   successful scan.
//! - **Terminal** (`find`, `reduce`, `max`, `sum`, `first`, ...): compute a
//!   result from the current slot without mutating it.
//! - **Appending** (`push`, `add`, `append`): grow the slot and return
//!   `&mut Self`.
//!
//! Operations that accept a predicate or accessor take either a closure
//! `(value, index)` or a shorthand string (see [`sequent_shorthand`]), and
//! therefore return [`Result`]: a malformed shorthand fails the call before
//! any element is visited.

use regex::Regex;
use sequent_shorthand::{Nullish, ToNumber};
use serde::Serialize;

use crate::arg::{IntoKey, IntoMapper, IntoPredicate, Key, Mapper, Predicate};
use crate::dedupe;
use crate::error::{EnumerableError, Result};
use crate::sequence::Sequence;

/// Drops every element whose mask entry is `false`, in place.
fn retain_mask<T>(values: &mut Vec<T>, mask: &[bool]) {
    let mut index = 0;
    values.retain(|_| {
        let keep = mask[index];
        index += 1;
        keep
    });
}

/// Traversal, filtering, and aggregation over one owned, ordered sequence.
///
/// # Example
///
/// ```
/// use sequent::{Enumerable, Sequence};
///
/// let mut nums = Sequence::range(1, 10);
/// nums.select(|n: &i64, _: usize| n % 2 == 0)?
///     .map(|n: &i64, _: usize| n * n)?;
/// assert_eq!(nums.array(), &[4, 16, 36, 64, 100]);
/// # Ok::<(), sequent::EnumerableError>(())
/// ```
pub trait Enumerable {
    /// The element type of the sequence.
    type Item;

    /// Read access to the sequence slot.
    fn slot(&self) -> &Vec<Self::Item>;

    /// Write access to the sequence slot.
    fn slot_mut(&mut self) -> &mut Vec<Self::Item>;

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Invokes `f(value, index)` for every element in ascending order.
    ///
    /// Side effect only; the slot is not touched.
    fn each<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&Self::Item, usize),
    {
        for (i, value) in self.slot().iter().enumerate() {
            f(value, i);
        }
        self
    }

    // ========================================================================
    // Transforming operations
    // ========================================================================

    /// Replaces every element with `f(value, index)`, in place.
    ///
    /// The mapper must produce the same element type; use
    /// [`map_to`](Enumerable::map_to) for type-changing (and string
    /// shorthand) maps.
    fn map<A, M>(&mut self, arg: A) -> Result<&mut Self>
    where
        A: IntoMapper<Self::Item, Self::Item, M>,
    {
        let mut mapper = arg.into_mapper()?;
        let mapped: Vec<Self::Item> = self
            .slot()
            .iter()
            .enumerate()
            .map(|(i, value)| mapper.apply(value, i))
            .collect();
        *self.slot_mut() = mapped;
        Ok(self)
    }

    /// Non-destructive map into a new [`Sequence`], possibly of a different
    /// element type.
    ///
    /// With a shorthand string the elements are plucked property values:
    ///
    /// ```
    /// # use sequent::{Enumerable, Fielded, OwnedValue, Sequence, Value};
    /// # struct User { name: String }
    /// # impl Fielded for User {
    /// #     fn field(&self, name: &str) -> Value<'_> {
    /// #         match name { "name" => Value::Str(&self.name), _ => Value::None }
    /// #     }
    /// # }
    /// let users = Sequence::from_vec(vec![User { name: "Tobi".into() }]);
    /// let names = users.map_to("name")?;
    /// assert_eq!(names.array(), &[OwnedValue::Str("Tobi".into())]);
    /// # Ok::<(), sequent::EnumerableError>(())
    /// ```
    fn map_to<R, A, M>(&self, arg: A) -> Result<Sequence<R>>
    where
        A: IntoMapper<Self::Item, R, M>,
    {
        let mut mapper = arg.into_mapper()?;
        Ok(self
            .slot()
            .iter()
            .enumerate()
            .map(|(i, value)| mapper.apply(value, i))
            .collect())
    }

    /// Keeps the elements for which the predicate holds, preserving order.
    fn select<A, M>(&mut self, arg: A) -> Result<&mut Self>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        let mask: Vec<bool> = self
            .slot()
            .iter()
            .enumerate()
            .map(|(i, value)| pred.test(value, i))
            .collect();
        retain_mask(self.slot_mut(), &mask);
        Ok(self)
    }

    /// Drops the elements for which the predicate holds; the inverse of
    /// [`select`](Enumerable::select).
    fn reject<A, M>(&mut self, arg: A) -> Result<&mut Self>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        let mask: Vec<bool> = self
            .slot()
            .iter()
            .enumerate()
            .map(|(i, value)| !pred.test(value, i))
            .collect();
        retain_mask(self.slot_mut(), &mask);
        Ok(self)
    }

    /// Drops nullish elements (`Option::None`, `OwnedValue::Null`).
    ///
    /// Zero, `false`, and empty strings stay.
    fn compact(&mut self) -> &mut Self
    where
        Self::Item: Nullish,
    {
        self.slot_mut().retain(|value| !value.is_nullish());
        self
    }

    /// Removes duplicate elements, keeping the first occurrence of each.
    ///
    /// De-duplication is delegated to [`dedupe`](crate::dedupe), which
    /// preserves first-seen order and never reorders.
    fn unique(&mut self) -> &mut Self
    where
        Self::Item: PartialEq,
    {
        let mask = dedupe::dedupe_mask(self.slot());
        retain_mask(self.slot_mut(), &mask);
        self
    }

    /// Keeps the elements matching the regular expression.
    fn grep(&mut self, pattern: &Regex) -> &mut Self
    where
        Self::Item: AsRef<str>,
    {
        self.slot_mut()
            .retain(|value| pattern.is_match(value.as_ref()));
        self
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the first element for which the predicate holds.
    fn find<A, M>(&self, arg: A) -> Result<Option<&Self::Item>>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        Ok(self
            .slot()
            .iter()
            .enumerate()
            .find(|&(i, value)| pred.test(value, i))
            .map(|(_, value)| value))
    }

    /// Returns the last element for which the predicate holds.
    fn find_last<A, M>(&self, arg: A) -> Result<Option<&Self::Item>>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        Ok(self
            .slot()
            .iter()
            .enumerate()
            .rev()
            .find(|&(i, value)| pred.test(value, i))
            .map(|(_, value)| value))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Short-circuits on the first failure. Empty sequence: `true`.
    fn all<A, M>(&self, arg: A) -> Result<bool>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        for (i, value) in self.slot().iter().enumerate().rev() {
            if !pred.test(value, i) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Alias for [`all`](Enumerable::all).
    fn every<A, M>(&self, arg: A) -> Result<bool>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        self.all(arg)
    }

    /// Returns `true` if no element satisfies the predicate.
    ///
    /// Short-circuits on the first success. Empty sequence: `true`.
    fn none<A, M>(&self, arg: A) -> Result<bool>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        for (i, value) in self.slot().iter().enumerate().rev() {
            if pred.test(value, i) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if at least one element satisfies the predicate.
    ///
    /// Short-circuits. Empty sequence: `false`.
    fn any<A, M>(&self, arg: A) -> Result<bool>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        for (i, value) in self.slot().iter().enumerate().rev() {
            if pred.test(value, i) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Alias for [`any`](Enumerable::any).
    fn some<A, M>(&self, arg: A) -> Result<bool>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        self.any(arg)
    }

    /// Counts the elements satisfying the predicate. Full scan, no
    /// short-circuit.
    fn count<A, M>(&self, arg: A) -> Result<usize>
    where
        A: IntoPredicate<Self::Item, M>,
    {
        let mut pred = arg.into_predicate()?;
        Ok(self
            .slot()
            .iter()
            .enumerate()
            .filter(|&(i, value)| pred.test(value, i))
            .count())
    }

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.slot().iter().position(|v| v == value)
    }

    /// Returns `true` if some element equals `value`.
    fn has(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Left fold with an explicit initial accumulator.
    fn fold<Acc, F>(&self, init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, &Self::Item, usize) -> Acc,
    {
        let mut acc = init;
        for (i, value) in self.slot().iter().enumerate() {
            acc = f(acc, value, i);
        }
        acc
    }

    /// Left fold seeded with the first element; folding starts at index 1.
    ///
    /// An empty sequence has nothing to seed the accumulator with and is an
    /// [`EnumerableError::EmptyReduce`] - never a silent sentinel.
    fn reduce<F>(&self, mut f: F) -> Result<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item, usize) -> Self::Item,
    {
        let values = self.slot();
        let mut acc = values
            .first()
            .cloned()
            .ok_or(EnumerableError::EmptyReduce)?;
        for (i, value) in values.iter().enumerate().skip(1) {
            acc = f(acc, value, i);
        }
        Ok(acc)
    }

    /// Running maximum of the raw elements.
    ///
    /// Seeded with negative infinity, so an empty sequence returns
    /// `f64::NEG_INFINITY` by contract, not an error.
    fn max(&self) -> f64
    where
        Self::Item: ToNumber,
    {
        let mut max = f64::NEG_INFINITY;
        for value in self.slot() {
            let n = value.to_number().to_f64();
            if n > max {
                max = n;
            }
        }
        max
    }

    /// Running maximum of `key(value, index)` per element.
    fn max_by<A, M>(&self, arg: A) -> Result<f64>
    where
        A: IntoKey<Self::Item, M>,
    {
        let mut key = arg.into_key()?;
        let mut max = f64::NEG_INFINITY;
        for (i, value) in self.slot().iter().enumerate() {
            let n = key.key(value, i);
            if n > max {
                max = n;
            }
        }
        Ok(max)
    }

    /// Sum of the raw elements, starting at zero.
    ///
    /// Always arithmetic addition: non-numeric elements coerce through
    /// [`ToNumber`] (NaN when they have no numeric reading).
    fn sum(&self) -> f64
    where
        Self::Item: ToNumber,
    {
        self.slot()
            .iter()
            .map(|value| value.to_number().to_f64())
            .sum()
    }

    /// Sum of `key(value, index)` per element.
    fn sum_by<A, M>(&self, arg: A) -> Result<f64>
    where
        A: IntoKey<Self::Item, M>,
    {
        let mut key = arg.into_key()?;
        let mut sum = 0.0;
        for (i, value) in self.slot().iter().enumerate() {
            sum += key.key(value, i);
        }
        Ok(sum)
    }

    /// Average of the raw elements: `sum / len`.
    ///
    /// An empty sequence yields NaN by contract.
    fn avg(&self) -> f64
    where
        Self::Item: ToNumber,
    {
        self.sum() / self.len() as f64
    }

    /// Alias for [`avg`](Enumerable::avg).
    fn mean(&self) -> f64
    where
        Self::Item: ToNumber,
    {
        self.avg()
    }

    /// Average of `key(value, index)` per element.
    fn avg_by<A, M>(&self, arg: A) -> Result<f64>
    where
        A: IntoKey<Self::Item, M>,
    {
        Ok(self.sum_by(arg)? / self.len() as f64)
    }

    /// Alias for [`avg_by`](Enumerable::avg_by).
    fn mean_by<A, M>(&self, arg: A) -> Result<f64>
    where
        A: IntoKey<Self::Item, M>,
    {
        self.avg_by(arg)
    }

    // ========================================================================
    // Slicing and access
    // ========================================================================

    /// Returns the first element.
    fn first(&self) -> Option<&Self::Item> {
        self.slot().as_slice().first()
    }

    /// Returns the leading `min(n, len)` elements as a new `Vec`.
    fn first_n(&self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let values = self.slot();
        values[..n.min(values.len())].to_vec()
    }

    /// Returns the last element.
    fn last(&self) -> Option<&Self::Item> {
        self.slot().as_slice().last()
    }

    /// Returns the trailing `min(n, len)` elements as a new `Vec`.
    fn last_n(&self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let values = self.slot();
        values[values.len().saturating_sub(n)..].to_vec()
    }

    /// Splits the elements into groups of `n`, in order, the final group
    /// holding the remainder.
    ///
    /// Returns a new host because the element type changes. `n == 0` is an
    /// [`EnumerableError::InvalidGroupSize`].
    fn in_groups_of(&self, n: usize) -> Result<Sequence<Vec<Self::Item>>>
    where
        Self::Item: Clone,
    {
        if n == 0 {
            return Err(EnumerableError::InvalidGroupSize(n));
        }
        Ok(self.slot().chunks(n).map(<[Self::Item]>::to_vec).collect())
    }

    /// Returns the element at `index`, or `None` when out of range.
    fn at(&self, index: usize) -> Option<&Self::Item> {
        self.slot().get(index)
    }

    /// Read-only view of the live sequence.
    fn array(&self) -> &[Self::Item] {
        self.slot()
    }

    // ========================================================================
    // Appending
    // ========================================================================

    /// Appends one element and returns the host for chaining.
    fn push(&mut self, value: Self::Item) -> &mut Self {
        self.slot_mut().push(value);
        self
    }

    /// Alias for [`push`](Enumerable::push).
    fn add(&mut self, value: Self::Item) -> &mut Self {
        self.push(value)
    }

    /// Appends every value in order and returns the host for chaining.
    fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        self.slot_mut().extend(values);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Current element count.
    fn len(&self) -> usize {
        self.slot().len()
    }

    /// Alias for [`len`](Enumerable::len).
    fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.slot().is_empty()
    }

    /// JSON serialization of the slot contents.
    fn to_json(&self) -> serde_json::Result<String>
    where
        Self::Item: Serialize,
    {
        serde_json::to_string(self.slot())
    }

    /// Diagnostic string embedding the JSON-serialized contents, e.g.
    /// `[Enumerable [1,2,3]]`. Not a stable wire format.
    fn inspect(&self) -> String
    where
        Self::Item: Serialize,
    {
        match self.to_json() {
            Ok(json) => format!("[Enumerable {json}]"),
            Err(_) => "[Enumerable <unserializable>]".to_string(),
        }
    }
}
