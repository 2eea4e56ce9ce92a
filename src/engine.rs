use crate::cluster::Cluster;
use crate::float::Float;
use crate::method::Method;
use crate::tree::Dendrogram;

/// Either a named [`Method`] or a caller-supplied Lance–Williams update
/// rule, as accepted by [`hierarchical_merge_into_tree`].
///
/// Blanket-implemented for `Method` itself and for any
/// `Fn(d_ij, d_ik, d_jk, n_i, n_j, n_k) -> d` closure, so both
/// `hierarchical_merge_into_tree(clusters, Method::Ward)` and
/// `hierarchical_merge_into_tree(clusters, |..| ..)` work.
pub trait LanceWilliams<D: Float> {
    /// Evaluate the update rule. See [`Method::update`] for the
    /// meaning of the arguments.
    fn update(&self, d_ij: D, d_ik: D, d_jk: D, n_i: usize, n_j: usize, n_k: usize) -> D;
}

impl<D: Float> LanceWilliams<D> for Method {
    fn update(&self, d_ij: D, d_ik: D, d_jk: D, n_i: usize, n_j: usize, n_k: usize) -> D {
        Method::update(*self, d_ij, d_ik, d_jk, n_i, n_j, n_k)
    }
}

impl<D, F> LanceWilliams<D> for F
where
    D: Float,
    F: Fn(D, D, D, usize, usize, usize) -> D,
{
    fn update(&self, d_ij: D, d_ik: D, d_jk: D, n_i: usize, n_j: usize, n_k: usize) -> D {
        (self)(d_ij, d_ik, d_jk, n_i, n_j, n_k)
    }
}

/// An error produced while validating input to
/// [`hierarchical_merge_into_tree`].
///
/// A single cluster is not an error (spec's `SingletonInput` case): it
/// is returned immediately as a one-node leaf dendrogram.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The engine was invoked with zero clusters.
    EmptyInput,
    /// A cluster's trailing-distance vector had a length inconsistent
    /// with its position in the initial working order. A well-formed
    /// input of length `n` has, at position `i`, a trailing-distance
    /// vector of length `n - i - 1`.
    MalformedInput {
        /// The position of the offending cluster.
        position: usize,
        /// The length its trailing-distance vector should have had.
        expected: usize,
        /// The length it actually had.
        actual: usize,
    },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Error::EmptyInput => {
                write!(f, "hierarchical clustering requires at least one cluster")
            }
            Error::MalformedInput { position, expected, actual } => write!(
                f,
                "cluster at position {} should have {} trailing distances, has {}",
                position, expected, actual
            ),
        }
    }
}

/// Merge `initial_clusters` into a single dendrogram, following the
/// Lance–Williams recurrence given by `criterion` at every step.
///
/// `initial_clusters` must be in some fixed working order, and the
/// `i`-th cluster's [`Cluster::distances`] must have length
/// `initial_clusters.len() - i - 1` (the distance to every cluster that
/// follows it). This is validated up front; see [`Error`].
///
/// A single input cluster is returned unchanged as a one-node leaf
/// dendrogram (not an error). Ties during the search for the closest
/// pair are broken in favor of the smaller working-set position, then
/// the smaller offset within its row, making the result deterministic.
pub fn hierarchical_merge_into_tree<I, D, U>(
    initial_clusters: Vec<Cluster<I, D>>,
    criterion: U,
) -> Result<Dendrogram<Cluster<I, D>>, Error>
where
    D: Float,
    I: Clone,
    U: LanceWilliams<D>,
{
    let n = initial_clusters.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    for (position, cluster) in initial_clusters.iter().enumerate() {
        let expected = n - position - 1;
        let actual = cluster.distances().len();
        if actual != expected {
            return Err(Error::MalformedInput { position, expected, actual });
        }
    }

    let mut working: Vec<Dendrogram<Cluster<I, D>>> =
        initial_clusters.into_iter().map(Dendrogram::leaf).collect();

    while working.len() > 1 {
        let (l, r, d_lr) = locate_closest_pair(&working);
        let len = working.len();

        let size_l = working[l].value().size();
        let size_r = working[r].value().size();

        let mut new_row = Vec::with_capacity(len - 2);
        for k in 0..len {
            if k == l || k == r {
                continue;
            }
            let (d_kl, d_kr) = if k < l {
                (
                    working[k].value().distances()[l - k - 1],
                    working[k].value().distances()[r - k - 1],
                )
            } else if k < r {
                (
                    working[l].value().distances()[k - l - 1],
                    working[k].value().distances()[r - k - 1],
                )
            } else {
                (
                    working[l].value().distances()[k - l - 1],
                    working[r].value().distances()[k - r - 1],
                )
            };
            let size_k = working[k].value().size();
            new_row.push(criterion.update(d_lr, d_kl, d_kr, size_l, size_r, size_k));
        }

        // Neighbours that sat in front of `l` or `r` lose the slots
        // that pointed at them; delete the larger offset first so the
        // smaller offset's index is still valid afterwards.
        for k in 0..l {
            working[k].value_mut().delete_distance(r - k - 1);
            working[k].value_mut().delete_distance(l - k - 1);
        }
        for k in (l + 1)..r {
            working[k].value_mut().delete_distance(r - k - 1);
        }

        let right_tree = working.remove(r);
        let left_tree = working.remove(l);
        let merged_value = left_tree.value().merger(right_tree.value(), new_row, d_lr);
        let parent = Dendrogram::internal(left_tree, right_tree, merged_value);
        working.insert(0, parent);
    }

    Ok(working.into_iter().next().expect("working set is non-empty by construction"))
}

/// Find the closest pair `(l, r)` with `l < r` among the clusters still
/// in the working set, i.e. `l = argmin_k min(clusters[k].distances())`
/// and `r` the position `clusters[l].distances()` attains its minimum
/// at. Ties favor the smallest `l`, then the smallest `r`.
///
/// Panics if every cluster's trailing-distance vector is empty, which
/// cannot happen while the working set has more than one element (the
/// engine's only caller already guarantees this).
fn locate_closest_pair<I, D: Float>(working: &[Dendrogram<Cluster<I, D>>]) -> (usize, usize, D) {
    let mut best: Option<(usize, usize, D)> = None;
    for (l, node) in working.iter().enumerate() {
        for (m, &d) in node.value().distances().iter().enumerate() {
            let replace = match best {
                None => true,
                Some((_, _, best_d)) => d < best_d,
            };
            if replace {
                best = Some((l, l + 1 + m, d));
            }
        }
    }
    best.expect("working set with more than one cluster has at least one non-empty row")
}
