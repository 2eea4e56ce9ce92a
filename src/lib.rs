/*!
This crate provides agglomerative
[hierarchical clustering](https://en.wikipedia.org/wiki/Hierarchical_clustering)
by way of the Lance–Williams recurrence.

# Overview

* [`hierarchical_merge_into_tree`] performs hierarchical clustering over a
  working set of [`Cluster`]s, driven by a linkage criterion.
* [`Method`] enumerates the seven standard Lance–Williams linkage criteria
  (single link, complete link, simple average, group average, centroid,
  median, Ward). A caller may instead supply any closure implementing
  [`LanceWilliams`].
* [`Dendrogram`] is the owning binary tree produced as output: every
  internal node is a merge, every leaf an original observation.

# Example

```
use hclust::{hierarchical_merge_into_tree, Cluster, Method};

// Four observations; `leaf` takes the distances to every observation that
// follows it in this fixed working order (a condensed upper triangle).
let clusters = vec![
    Cluster::leaf("a", vec![1.0, 9.0, 9.0]),
    Cluster::leaf("b", vec![9.0, 9.0]),
    Cluster::leaf("c", vec![1.0]),
    Cluster::leaf("d", vec![]),
];

let tree = hierarchical_merge_into_tree(clusters, Method::SingleLink).unwrap();
assert_eq!(tree.value().size(), 4);
assert_eq!(tree.bottom().len(), 4);
```

# Ties and determinism

Whenever two or more candidate pairs are equally close, the pair with the
smaller working-set position is merged first (and, within a row, the
smaller offset). Given the same input and the same working order, the
result is always the same dendrogram.
*/

#![deny(missing_docs)]

mod cluster;
mod engine;
mod float;
mod method;
mod tree;

#[cfg(test)]
mod testutil;

pub use crate::cluster::Cluster;
pub use crate::engine::{hierarchical_merge_into_tree, Error, LanceWilliams};
pub use crate::float::Float;
pub use crate::method::Method;
pub use crate::tree::{Dendrogram, Iter, NodeRef};

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
