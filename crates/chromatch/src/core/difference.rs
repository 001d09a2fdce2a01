use crate::Float;

#[cfg(feature = "f64")]
use std::f64::consts::PI;
#[cfg(not(feature = "f64"))]
use std::f32::consts::PI;

/// 25 to the 7th power, the chroma pivot of CIEDE2000's G and R<sub>C</sub>.
const POW25_7: Float = 6_103_515_625.0;

/// Compute the share of chroma beyond the pivot, i.e., `sqrt(C⁷ / (C⁷ + 25⁷))`.
#[inline]
fn chroma_weight(chroma: Float) -> Float {
    let chroma7 = chroma.powi(7);
    (chroma7 / (chroma7 + POW25_7)).sqrt()
}

/// Convert radians to degrees, evaluated as `360 r / 2π`.
#[inline]
fn degrees(radians: Float) -> Float {
    360.0 * radians / (2.0 * PI)
}

/// Convert degrees to radians, evaluated as `2π d / 360`.
#[inline]
fn radians(degrees: Float) -> Float {
    2.0 * PI * degrees / 360.0
}

/// Compute the chroma `sqrt(a² + b²)`.
#[inline]
fn chroma(a: Float, b: Float) -> Float {
    (a * a + b * b).sqrt()
}

/// Compute the hue angle in degrees `0..360`.
#[inline]
fn hue_angle(a: Float, b: Float) -> Float {
    let h = degrees(b.atan2(a));
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Compute Delta-E 2000 between two colors in CIE Lab.
///
/// This function implements the CIEDE2000 color difference with unit weights
/// for lightness, chroma, and hue. The first color is the reference, the second
/// the sample; differences are computed as sample minus reference. For two
/// achromatic colors, both hue angles are zero because `atan2(0, 0)` is zero.
///
/// When the hue angles are more than 180º apart, the mean hue always adds 360º
/// and hence may exceed 360º. The weighting function T is periodic and
/// unaffected, whereas the rotation term's Gaussian around 275º is not.
#[allow(non_snake_case)]
#[must_use = "function returns a new distance and does not mutate original values"]
pub(crate) fn delta_e_2000(reference: &[Float; 3], sample: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *reference;
    let [L2, a2, b2] = *sample;

    // Rotate the a axis depending on the mean chroma.
    let mean_L = (L1 + L2) / 2.0;
    let C1 = chroma(a1, b1);
    let C2 = chroma(a2, b2);
    let G = (1.0 - chroma_weight((C1 + C2) / 2.0)) / 2.0;

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);
    let C1p = chroma(a1p, b1);
    let C2p = chroma(a2p, b2);
    let mean_Cp = (C1p + C2p) / 2.0;

    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);
    let mean_hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let T = 1.0 - 0.17 * radians(mean_hp - 30.0).cos()
        + 0.24 * radians(2.0 * mean_hp).cos()
        + 0.32 * radians(3.0 * mean_hp + 6.0).cos()
        - 0.20 * radians(4.0 * mean_hp - 63.0).cos();

    // Take the shorter arc between the hue angles.
    let mut Δhp = h2p - h1p;
    if Δhp.abs() > 180.0 {
        if h2p <= h1p {
            Δhp += 360.0;
        } else {
            Δhp -= 360.0;
        }
    }

    let ΔLp = L2 - L1;
    let ΔCp = C2p - C1p;
    let ΔHp = 2.0 * (C1p * C2p).sqrt() * (radians(Δhp) / 2.0).sin();

    let offset_L = (mean_L - 50.0) * (mean_L - 50.0);
    let SL = 1.0 + 0.015 * offset_L / (20.0 + offset_L).sqrt();
    let SC = 1.0 + 0.045 * mean_Cp;
    let SH = 1.0 + 0.015 * mean_Cp * T;

    let Δθ = 30.0 * (-((mean_hp - 275.0) / 25.0).powi(2)).exp();
    let RC = 2.0 * chroma_weight(mean_Cp);
    let RT = -RC * (2.0 * radians(Δθ)).sin();

    let ΔL = ΔLp / SL;
    let ΔC = ΔCp / SC;
    let ΔH = ΔHp / SH;

    (ΔL * ΔL + ΔC * ΔC + ΔH * ΔH + RT * ΔC * ΔH).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color, or `None` if there are no candidates. Among equally
/// close candidates, the first one wins.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

/// Rank the candidate colors by their distance from the origin.
///
/// This function computes the distance between the origin and every candidate
/// color, sorts the resulting `(index, distance)` pairs by ascending distance,
/// and keeps the first `limit` pairs. The sort is stable, so candidates at the
/// same distance retain their relative order.
pub(crate) fn rank_by_distance<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    limit: usize,
    mut compute_distance: F,
) -> Vec<(usize, Float)>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut ranking: Vec<(usize, Float)> = candidates
        .into_iter()
        .map(|candidate| compute_distance(origin, candidate))
        .enumerate()
        .collect();

    ranking.sort_by(|(_, d1), (_, d2)| d1.total_cmp(d2));
    ranking.truncate(limit);
    ranking
}
