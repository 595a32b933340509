//! Centroid defuzzification.

/// Centroid of the piecewise-linear curve through `(xs[i], mus[i])`.
///
/// Each sample interval is integrated exactly as a trapezoid, so the result
/// does not depend on sampling density for piecewise-linear shapes that
/// break on sample points.  Returns `None` when the curve has zero area.
pub fn centroid(xs: &[f64], mus: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), mus.len());

    let mut moment = 0.0_f64;
    let mut area = 0.0_f64;
    for (x, mu) in xs.windows(2).zip(mus.windows(2)) {
        let (x1, x2) = (x[0], x[1]);
        let (y1, y2) = (mu[0], mu[1]);
        let width = x2 - x1;
        if width == 0.0 || (y1 == 0.0 && y2 == 0.0) {
            continue;
        }

        let seg_area = 0.5 * width * (y1 + y2);
        // Centroid of a trapezoid measured from x1.
        let seg_centroid = x1 + width * (y1 + 2.0 * y2) / (3.0 * (y1 + y2));
        moment += seg_centroid * seg_area;
        area += seg_area;
    }

    (area > 0.0).then(|| moment / area)
}
