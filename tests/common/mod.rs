//! Oracle and validator support shared by the integration tests.
//!
//! Reimplements, test-only, the slow reference DP and randomized
//! sequence generators this engine is checked against. Not part of the
//! library's public surface.

use rand::Rng;

/// Full O(|A|·|B|·k) reference DP, independent of the sparse engine.
/// Returns only the optimal length (the engine's own `validate` module
/// checks reconstruction shape; this checks the engine agrees on length
/// with a dramatically simpler, slower implementation).
pub fn slow_dp_length(a: &[u8], b: &[u8], k: usize, lcskpp: bool) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            let mut best = dp[i - 1][j].max(dp[i][j - 1]);
            let limit = i.min(j).min(2 * k);
            let mut ok = true;
            for kk in 1..=limit {
                if !ok {
                    break;
                }
                if a[i - kk] != b[j - kk] {
                    ok = false;
                    continue;
                }
                if (!lcskpp && kk == k) || (lcskpp && kk >= k) {
                    best = best.max(dp[i - kk][j - kk] + kk);
                }
            }
            dp[i][j] = best;
        }
    }

    dp[n][m]
}

/// O(r²) sparse-oracle reconstruction over a pre-extracted, sorted list of
/// match pairs `(i, j)` (each meaning `a[i..i+k) == b[j..j+k)`). Independent
/// of the fast engine's threshold-table machinery, used to cross-check
/// hand-picked scenarios without paying the full O(|A||B|k) DP cost.
pub fn sparse_oracle_reconstruction(
    matches: &[(usize, usize)],
    k: usize,
    lcskpp: bool,
) -> (usize, Vec<(usize, usize)>) {
    if matches.is_empty() {
        return (0, Vec::new());
    }

    let n = matches.len();
    let mut dp = vec![k; n];
    let mut recon: Vec<Option<usize>> = vec![None; n];
    let mut best_idx = 0;

    for i in 0..n {
        for j in 0..i {
            if matches[j].0 + k <= matches[i].0 && matches[j].1 + k <= matches[i].1 {
                if dp[j] + k > dp[i] {
                    dp[i] = dp[j] + k;
                    recon[i] = Some(j);
                }
            }
            if lcskpp && matches[j].0 + 1 == matches[i].0 && matches[j].1 + 1 == matches[i].1 {
                if dp[j] + 1 > dp[i] {
                    dp[i] = dp[j] + 1;
                    recon[i] = Some(j);
                }
            }
        }
        if dp[i] > dp[best_idx] {
            best_idx = i;
        }
    }

    let mut out = Vec::new();
    let mut cur = Some(best_idx);
    while let Some(i) = cur {
        let mut r = matches[i].0 + k - 1;
        let mut c = matches[i].1 + k - 1;
        let is_full_block = match recon[i] {
            None => true,
            Some(p) => matches[p].0 + k <= matches[i].0 && matches[p].1 + k <= matches[i].1,
        };
        if is_full_block {
            for _ in 0..k {
                out.push((r, c));
                r = r.wrapping_sub(1);
                c = c.wrapping_sub(1);
            }
        } else {
            out.push((r, c));
        }
        cur = recon[i];
    }
    out.reverse();

    (dp[best_idx], out)
}

/// Uniform random DNA string of length `len` over {A,C,G,T}.
pub fn random_dna(len: usize, rng: &mut impl Rng) -> Vec<u8> {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    (0..len).map(|_| BASES[rng.random_range(0..4)]).collect()
}

/// A copy of `seq` with each base independently replaced (by a different
/// random base) with probability `p_err`.
pub fn mutate(seq: &[u8], p_err: f64, rng: &mut impl Rng) -> Vec<u8> {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    seq.iter()
        .map(|&base| {
            if rng.random_bool(p_err) {
                loop {
                    let candidate = BASES[rng.random_range(0..4)];
                    if candidate != base {
                        return candidate;
                    }
                }
            } else {
                base
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_dp_matches_fast_engine_on_known_scenario() {
        let a = b"ACGTACGT";
        let b = b"ACGTACGT";
        assert_eq!(slow_dp_length(a, b, 3, true), 8);
        assert_eq!(slow_dp_length(a, b, 3, false), 6);
    }

    #[test]
    fn random_dna_uses_only_four_bases() {
        let mut rng = rand::rng();
        let seq = random_dna(200, &mut rng);
        assert!(seq.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
    }

    #[test]
    fn mutate_never_reproduces_the_original_base_at_a_mutated_site() {
        let mut rng = rand::rng();
        let original = random_dna(50, &mut rng);
        let mutated = mutate(&original, 1.0, &mut rng);
        for (o, m) in original.iter().zip(mutated.iter()) {
            assert_ne!(o, m);
        }
    }

    #[test]
    fn sparse_oracle_matches_scenario_4() {
        // k=2 windows of A="ACAC" vs B="CACA": matches are where a 2-window
        // of A equals a 2-window of B.
        let matches = [(0, 1), (1, 0), (1, 2), (2, 1)];
        let (lcsk_len, lcsk_recon) = sparse_oracle_reconstruction(&matches, 2, false);
        assert_eq!(lcsk_len, 2);
        assert_eq!(lcsk_recon.len(), 2);

        let (lcskpp_len, lcskpp_recon) = sparse_oracle_reconstruction(&matches, 2, true);
        assert_eq!(lcskpp_len, 3);
        assert_eq!(lcskpp_recon.len(), 3);
    }

    #[test]
    fn sparse_oracle_empty_matches_yields_empty_reconstruction() {
        assert_eq!(sparse_oracle_reconstruction(&[], 3, true), (0, Vec::new()));
    }
}
