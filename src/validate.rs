//! Reconstruction validator.
//!
//! Checks the three validity rules any LCSk/LCSk++ reconstruction must
//! satisfy: in-bounds matching pairs, strict monotonicity, and
//! run-length constraints on maximal diagonal runs.

/// Validate a reconstruction under LCSk rules: every maximal diagonal run
/// (consecutive pairs where both row and column advance by exactly 1)
/// must have a length that is a multiple of `k`.
pub fn is_valid_lcsk(a: &[u8], b: &[u8], k: usize, recon: &[(usize, usize)]) -> bool {
    validate(a, b, k, recon, false)
}

/// Validate a reconstruction under LCSk++ rules: every maximal diagonal
/// run must have length at least `k`.
pub fn is_valid_lcskpp(a: &[u8], b: &[u8], k: usize, recon: &[(usize, usize)]) -> bool {
    validate(a, b, k, recon, true)
}

fn validate(a: &[u8], b: &[u8], k: usize, recon: &[(usize, usize)], lcskpp: bool) -> bool {
    if recon.is_empty() {
        return true;
    }

    for &(i, j) in recon {
        if i >= a.len() || j >= b.len() || a[i] != b[j] {
            return false;
        }
    }

    for pair in recon.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if cur.0 <= prev.0 || cur.1 <= prev.1 {
            return false;
        }
    }

    let run_ok = |len: usize| if lcskpp { len >= k } else { len % k == 0 };

    // Row-runs and column-runs are tracked independently, since a run in A
    // and the corresponding run in B need not share the same breakpoints.
    let mut run_a = 1usize;
    let mut run_b = 1usize;
    for (i, pair) in recon.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        let last = i + 1 == recon.len() - 1;

        if cur.0 == prev.0 + 1 {
            run_a += 1;
        }
        if cur.1 == prev.1 + 1 {
            run_b += 1;
        }

        if last || cur.0 != prev.0 + 1 {
            if !run_ok(run_a) {
                return false;
            }
            run_a = 1;
        }
        if last || cur.1 != prev.1 + 1 {
            if !run_ok(run_b) {
                return false;
            }
            run_b = 1;
        }
    }

    true
}
