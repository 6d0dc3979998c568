//! Agglomerative clustering with average linkage (UPGMA).

/// Cluster items given a full symmetric distance matrix.
///
/// Repeatedly merges the two groups with the smallest average pairwise
/// distance while that distance is `<= threshold`. Distances between merged
/// groups follow the Lance-Williams update for average linkage, so the
/// group-to-group distance is always the mean over all member pairs.
///
/// Returns groups of item indices, each sorted ascending, ordered by their
/// smallest index. A NaN threshold merges nothing.
pub fn average_linkage(distances: &[Vec<f64>], threshold: f64) -> Vec<Vec<usize>> {
    let n = distances.len();
    let mut matrix: Vec<Vec<f64>> = distances.to_vec();
    let mut groups: Vec<Option<Vec<usize>>> = (0..n).map(|i| Some(vec![i])).collect();

    loop {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            if groups[i].is_none() {
                continue;
            }
            for j in (i + 1)..n {
                if groups[j].is_none() {
                    continue;
                }
                let d = matrix[i][j];
                if best.map_or(true, |(_, _, bd)| d < bd) {
                    best = Some((i, j, d));
                }
            }
        }

        let Some((keep, absorb, distance)) = best else {
            break;
        };
        if distance.is_nan() || threshold.is_nan() || distance > threshold {
            break;
        }

        let absorbed = groups[absorb].take().unwrap_or_default();
        let size_keep = groups[keep].as_ref().map_or(0, Vec::len) as f64;
        let size_absorb = absorbed.len() as f64;

        for k in 0..n {
            if k == keep || k == absorb || groups[k].is_none() {
                continue;
            }
            let merged = (size_keep * matrix[keep][k] + size_absorb * matrix[absorb][k])
                / (size_keep + size_absorb);
            matrix[keep][k] = merged;
            matrix[k][keep] = merged;
        }

        if let Some(group) = groups[keep].as_mut() {
            group.extend(absorbed);
        }
    }

    let mut result: Vec<Vec<usize>> = groups
        .into_iter()
        .flatten()
        .map(|mut group| {
            group.sort_unstable();
            group
        })
        .collect();
    result.sort_by_key(|group| group[0]);
    result
}
