//! Binary search tree counting responses per option text.
//!
//! The tree is never rebalanced. Inserting keys in sorted order degrades it
//! to a list and every operation becomes linear; with at most five distinct
//! keys per question that is an accepted limitation.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct TallyNode {
    option: String,
    count: usize,
    left: Option<Box<TallyNode>>,
    right: Option<Box<TallyNode>>,
}

impl TallyNode {
    fn new(option: &str) -> Self {
        Self {
            option: option.to_string(),
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// Frequency counter keyed on option text (Entity part of [`Question`](crate::Question))
///
/// Invariants:
/// - at most one entry per distinct text
/// - an entry's count equals the number of [`record`](Self::record) calls for its text
/// - entries are never removed or decremented
///
/// # Example
///
/// ```
/// use tally_domain::TallyTree;
///
/// let mut tally = TallyTree::new();
/// tally.record("Agree");
/// tally.record("Disagree");
/// tally.record("Agree");
///
/// assert_eq!(tally.count("Agree"), 2);
/// assert_eq!(tally.count("Neutral"), 0);
/// assert_eq!(tally.total(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TallyTree {
    root: Option<Box<TallyNode>>,
    entries: usize,
}

impl TallyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `option` with count 1, or increment its existing count.
    ///
    /// Returns the count for `option` after the update.
    pub fn record(&mut self, option: &str) -> usize {
        let (count, created) = Self::record_at(&mut self.root, option);
        if created {
            self.entries += 1;
        }
        count
    }

    fn record_at(slot: &mut Option<Box<TallyNode>>, option: &str) -> (usize, bool) {
        match slot {
            None => {
                *slot = Some(Box::new(TallyNode::new(option)));
                (1, true)
            }
            Some(node) => match option.cmp(node.option.as_str()) {
                Ordering::Equal => {
                    node.count += 1;
                    (node.count, false)
                }
                Ordering::Less => Self::record_at(&mut node.left, option),
                Ordering::Greater => Self::record_at(&mut node.right, option),
            },
        }
    }

    /// Count recorded for an exact match of `option`, or 0 if absent
    pub fn count(&self, option: &str) -> usize {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match option.cmp(node.option.as_str()) {
                Ordering::Equal => return node.count,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        0
    }

    /// Sum of all counts, i.e. the number of `record` calls ever made
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct option texts recorded
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate `(option, count)` pairs in lexicographic order of option text
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<'a> IntoIterator for &'a TallyTree {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`TallyTree`]
pub struct Iter<'a> {
    stack: Vec<&'a TallyNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a TallyNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((node.option.as_str(), node.count))
    }
}
