use crate::types::Peak;

/// Find local maxima of a 1-D series.
///
/// Positions `i` in `[radius, len - radius)` are visited in order. A position
/// is a peak when its value is `>=` every value in `[i - radius, i + radius]`,
/// so plateaus qualify. After a peak the scan jumps `radius` positions
/// further before resuming, so no two peaks lie within `radius` of each
/// other. This is a greedy rule, not a plateau detector: a plateau wider than
/// `radius` still yields one peak per jump.
///
/// # Examples
///
/// ```rust
/// use orfind_core::peaks::find_1d_peaks;
///
/// let peaks = find_1d_peaks(&[0.0, 2.0, 0.0, 0.0, 3.0, 1.0, 0.0], 1);
/// let indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
/// assert_eq!(indices, vec![1, 4]);
/// ```
#[must_use]
pub fn find_1d_peaks(series: &[f64], radius: usize) -> Vec<Peak> {
    let mut peaks = Vec::new();
    let mut index = radius;

    while index + radius < series.len() {
        let height = series[index];
        let window = &series[index - radius..=index + radius];
        if window.iter().all(|&neighbour| height >= neighbour) {
            peaks.push(Peak { index, height });
            index += radius;
        }
        index += 1;
    }

    peaks
}

/// Peaks whose height reaches `min_height`
#[must_use]
pub fn peaks_above(series: &[f64], radius: usize, min_height: f64) -> Vec<Peak> {
    find_1d_peaks(series, radius)
        .into_iter()
        .filter(|peak| peak.height >= min_height)
        .collect()
}
