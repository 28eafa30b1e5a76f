pub struct Stats {
    pub mean: f64,
    pub sd: f64,    // Standard deviation
    pub ci_95: f64, // 95% confidence interval half-width
}

pub fn calculate_stats(values: &[f64]) -> Stats {
    let n = values.len() as f64;
    if n < 2.0 {
        let mean = if n > 0.0 { values[0] } else { 0.0 };
        return Stats {
            mean,
            sd: 0.0,
            ci_95: 0.0,
        };
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let sd = variance.sqrt();
    let std_error = sd / n.sqrt();
    let ci_95 = Z_95 * std_error;
    Stats { mean, sd, ci_95 }
}

pub fn calculate_stats_u64(values: &[u64]) -> Stats {
    let floats: Vec<f64> = values.iter().map(|&x| x as f64).collect();
    calculate_stats(&floats)
}

const Z_95: f64 = 1.96; // Z-score for 95% confidence interval

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton() {
        assert_eq!(calculate_stats(&[]).mean, 0.0);
        let s = calculate_stats(&[3.0]);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.sd, 0.0);
    }

    #[test]
    fn mean_and_sd() {
        let s = calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.mean - 5.0).abs() < 1e-9);
        assert!((s.sd - 2.138089935).abs() < 1e-6);
    }

    #[test]
    fn u64_conversion() {
        let s = calculate_stats_u64(&[1, 2, 3]);
        assert!((s.mean - 2.0).abs() < 1e-9);
    }
}
