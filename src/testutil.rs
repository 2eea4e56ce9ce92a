//! Property-testing scaffolding shared by this crate's test modules.

use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};
use rand::Rng;

use crate::cluster::Cluster;

/// A randomly generated working set of singleton clusters with a valid
/// condensed layout: `working[i]` has `len - i - 1` trailing distances,
/// and every distance is finite and distinct (so every test run has an
/// unambiguous closest pair, with no need to special-case ties).
#[derive(Clone, Debug)]
pub struct DistinctWorkingSet {
    clusters: Vec<Cluster<usize, f64>>,
}

impl DistinctWorkingSet {
    /// Build a working set from an arbitrary flat sequence of numbers,
    /// truncating and de-duplicating so the result is a valid condensed
    /// layout over as many observations as it can support.
    pub fn new(mut flat: Vec<f64>) -> DistinctWorkingSet {
        make_distinct(&mut flat);

        let mut len = observations(flat.len());
        while len > 1 && len * (len - 1) / 2 > flat.len() {
            len -= 1;
        }
        let used = if len >= 2 { len * (len - 1) / 2 } else { 0 };
        flat.truncate(used);
        for v in &mut flat {
            if v.is_nan() {
                *v = 0.0;
            }
        }

        let mut clusters = Vec::with_capacity(len);
        let mut offset = 0;
        for i in 0..len {
            let row_len = len - i - 1;
            let row = flat[offset..offset + row_len].to_vec();
            offset += row_len;
            clusters.push(Cluster::leaf(i, row));
        }
        DistinctWorkingSet { clusters }
    }

    /// Consume this working set, returning its clusters.
    pub fn into_clusters(self) -> Vec<Cluster<usize, f64>> {
        self.clusters
    }

    /// The number of clusters in this working set.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }
}

impl Arbitrary for DistinctWorkingSet {
    fn arbitrary(_g: &mut Gen) -> DistinctWorkingSet {
        let mut rng = rand::thread_rng();
        let size = rng.gen_range(0..20);
        let mut flat = vec![];
        for i in 0..size {
            for _ in i + 1..size {
                flat.push(rng.gen_range(-0.5..=0.5));
            }
        }
        DistinctWorkingSet::new(flat)
    }
}

/// Mutate `xs` in place so every element is distinct, preserving length.
fn make_distinct(xs: &mut Vec<f64>) {
    use std::cmp::Ordering;

    #[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
    struct NonNanF64(f64);

    impl Eq for NonNanF64 {}

    impl Ord for NonNanF64 {
        fn cmp(&self, other: &NonNanF64) -> Ordering {
            self.0.partial_cmp(&other.0).unwrap()
        }
    }

    if xs.is_empty() {
        return;
    }
    let mut next = 1.0 + xs.iter().fold(xs[0], |a, &b| if a > b { a } else { b });
    let mut seen = BTreeSet::new();
    for i in 0..xs.len() {
        let x = NonNanF64(xs[i]);
        if !seen.contains(&x) {
            seen.insert(x);
            continue;
        }
        xs[i] = next;
        next += 1.0;
    }
}

/// An upper bound on the number of observations a condensed matrix of the
/// given length could hold.
fn observations(condensed_len: usize) -> usize {
    ((condensed_len as f64) * 2.0).sqrt().ceil() as usize
}
