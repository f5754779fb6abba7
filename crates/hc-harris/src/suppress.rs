use hc_matrix::Matrix;

use crate::Corner;

/// Non-maximum suppression over 3x3 neighborhoods, in place.
///
/// This is the single deliberately mutating operation in the pipeline: it
/// takes `&mut Matrix` and zeroes cells directly, rather than returning a
/// copy. Cells are visited in row-major order and zeroed as soon as any
/// in-bounds neighbor strictly exceeds them; later cells therefore see the
/// already-suppressed values. Neighbors outside the matrix are skipped, not
/// treated as zero, and equal-valued neighbors may all survive.
pub fn suppress_non_maxima(m: &mut Matrix) {
    let (rows, cols) = m.shape();
    for i in 0..rows {
        for j in 0..cols {
            let v = m.get(i, j).expect("in-bounds scan");
            if v != 0.0 && exceeded_by_neighbor(m, i, j, v) {
                *m.get_mut(i, j).expect("in-bounds scan") = 0.0;
            }
        }
    }
}

fn exceeded_by_neighbor(m: &Matrix, i: usize, j: usize, v: f64) -> bool {
    let (rows, cols) = m.shape();
    for di in -1isize..=1 {
        let ni = i as isize + di;
        if ni < 0 || ni >= rows as isize {
            continue;
        }

        for dj in -1isize..=1 {
            let nj = j as isize + dj;
            if nj < 0 || nj >= cols as isize {
                continue;
            }

            let neighbor = m
                .get(ni as usize, nj as usize)
                .expect("in-bounds neighborhood access");
            if neighbor > v {
                return true;
            }
        }
    }
    false
}

/// Collects the coordinates of every nonzero cell in row-major scan order.
///
/// The scan order is the output order: callers can rely on corners being
/// sorted by row, then by column.
pub fn collect_corners(m: &Matrix) -> Vec<Corner> {
    let mut corners = Vec::new();
    for i in 0..m.rows() {
        for (j, &v) in m.row(i).iter().enumerate() {
            if v != 0.0 {
                corners.push(Corner { x: i, y: j });
            }
        }
    }
    corners
}
