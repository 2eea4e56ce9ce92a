use crate::float::Float;

/// The seven standard Lance–Williams linkage criteria.
///
/// Each variant fixes the coefficients `(alpha_i, alpha_j, beta, gamma)`
/// in the Lance–Williams recurrence
///
/// ```text
/// d(i∪j, k) = alpha_i * d(i, k) + alpha_j * d(j, k)
///           + beta * d(i, j) + gamma * |d(i, k) - d(j, k)|
/// ```
///
/// used to compute the dissimilarity between a newly merged cluster
/// `i∪j` and every surviving cluster `k`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    /// Minimum dissimilarity between any pair of observations across
    /// the two clusters (`alpha_i = alpha_j = 1/2`, `gamma = -1/2`).
    SingleLink,
    /// Maximum dissimilarity between any pair of observations across
    /// the two clusters (`alpha_i = alpha_j = 1/2`, `gamma = 1/2`).
    CompleteLink,
    /// Unweighted average of the two clusters' distances to `k`,
    /// irrespective of cluster size (WPGMA; `alpha_i = alpha_j = 1/2`).
    SimpleAverage,
    /// Size-weighted average of the two clusters' distances to `k`
    /// (UPGMA; `alpha_i = n_i / (n_i + n_j)`, `alpha_j = n_j / (n_i + n_j)`).
    GroupAverage,
    /// UPGMC: coefficients as `GroupAverage`, plus `beta = -alpha_i * alpha_j`.
    Centroid,
    /// WPGMC: coefficients as `SimpleAverage`, plus `beta = -1/4`.
    Median,
    /// Minimizes the increase in within-cluster variance at each merge.
    /// Coefficients additionally depend on `n_k`.
    Ward,
}

impl Method {
    /// Evaluate the Lance–Williams recurrence for this criterion.
    ///
    /// `d_ij` is the dissimilarity between the two clusters being
    /// merged; `d_ik`/`d_jk` are their respective dissimilarities to a
    /// third, surviving cluster `k`; `n_i`/`n_j`/`n_k` are the three
    /// clusters' sizes. Never fails: the result is total for any finite
    /// inputs, and propagates NaN/negative values untouched if given
    /// them.
    pub fn update<T: Float>(
        self,
        d_ij: T,
        d_ik: T,
        d_jk: T,
        n_i: usize,
        n_j: usize,
        n_k: usize,
    ) -> T {
        let half = T::from_f64(0.5);
        let zero = T::zero();
        let (alpha_i, alpha_j, beta, gamma) = match self {
            Method::SingleLink => (half, half, zero, T::from_f64(-0.5)),
            Method::CompleteLink => (half, half, zero, half),
            Method::SimpleAverage => (half, half, zero, zero),
            Method::GroupAverage => {
                let (ni, nj) = (T::from_usize(n_i), T::from_usize(n_j));
                let total = ni + nj;
                (ni / total, nj / total, zero, zero)
            }
            Method::Centroid => {
                let (ni, nj) = (T::from_usize(n_i), T::from_usize(n_j));
                let total = ni + nj;
                let (ai, aj) = (ni / total, nj / total);
                (ai, aj, zero - ai * aj, zero)
            }
            Method::Median => (half, half, T::from_f64(-0.25), zero),
            Method::Ward => {
                let (ni, nj, nk) =
                    (T::from_usize(n_i), T::from_usize(n_j), T::from_usize(n_k));
                let total = nk + ni + nj;
                ((nk + ni) / total, (nk + nj) / total, zero - nk / total, zero)
            }
        };
        alpha_i * d_ik + alpha_j * d_jk + beta * d_ij + gamma * (d_ik - d_jk).abs()
    }
}
