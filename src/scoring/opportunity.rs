// Market saturation (Sk) and efficiency (Ek) formulas.
//
// Sk = documents / monthly searches: how much content already competes for
// each search. Ek = (conversion rate / (Sk + 1)) * log10(volume): rewards
// demand on a log scale and discounts it by competition.
//
// Both functions are total. Volumes under the significance cutoff score 0.0
// instead of producing noisy ratios from tiny denominators.

/// Volumes below this are statistically insignificant and score 0.0.
pub const MIN_SIGNIFICANT_VOLUME: u64 = 50;

/// Sentinel saturation for a zero search volume.
pub const ZERO_VOLUME_SATURATION: f64 = 999.0;

/// Default share of searchers assumed to convert.
pub const DEFAULT_CONVERSION_RATE: f64 = 0.05;

/// Compute the Saturation Index (Sk) for a keyword.
pub fn saturation(document_count: u64, search_volume: u64) -> f64 {
    if search_volume < MIN_SIGNIFICANT_VOLUME {
        return 0.0;
    }

    // Unreachable while the cutoff is above zero, but the sentinel is part
    // of the contract if the cutoff ever changes.
    if search_volume == 0 {
        return ZERO_VOLUME_SATURATION;
    }

    document_count as f64 / search_volume as f64
}

/// Compute the Efficiency Score (Ek) for a keyword.
///
/// The `+ 1.0` keeps the denominator positive when Sk is 0, and the volume
/// is floored at 1 before the log. Anything non-finite or negative collapses
/// to 0.0.
pub fn efficiency(saturation_index: f64, search_volume: u64, conversion_rate: f64) -> f64 {
    if search_volume < MIN_SIGNIFICANT_VOLUME {
        return 0.0;
    }

    let log_volume = (search_volume.max(1) as f64).log10();
    let score = (conversion_rate / (saturation_index + 1.0)) * log_volume;

    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

/// Parse a `--conversion-rate` value. Accepts (0, 1].
pub fn parse_conversion_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if rate > 0.0 && rate <= 1.0 {
        Ok(rate)
    } else {
        Err(format!("conversion rate must be in (0, 1], got {rate}"))
    }
}

/// Competition band for a saturation index, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationBand {
    BlueOcean,
    Good,
    Competitive,
    RedOcean,
}

impl SaturationBand {
    /// Classify Sk. NaN and negatives fail every comparison and land in BlueOcean.
    pub fn from_saturation(saturation: f64) -> Self {
        match saturation {
            s if s >= 5.0 => SaturationBand::RedOcean,
            s if s >= 1.0 => SaturationBand::Competitive,
            s if s >= 0.5 => SaturationBand::Good,
            _ => SaturationBand::BlueOcean,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaturationBand::BlueOcean => "Blue Ocean",
            SaturationBand::Good => "Good",
            SaturationBand::Competitive => "Competitive",
            SaturationBand::RedOcean => "Red Ocean",
        }
    }
}

impl std::fmt::Display for SaturationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturation_ratio() {
        let sk = saturation(200, 1000);
        assert!((sk - 0.2).abs() < 1e-12, "Expected 0.2, got {sk}");
    }

    #[test]
    fn test_saturation_below_cutoff_ignores_documents() {
        assert_eq!(saturation(50, 10), 0.0);
        assert_eq!(saturation(1_000_000, 49), 0.0);
    }

    #[test]
    fn test_saturation_at_cutoff_is_ratio() {
        // 50 is the first significant volume
        let sk = saturation(100, 50);
        assert!((sk - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_volume_hits_cutoff_not_sentinel() {
        // The 999.0 sentinel is shadowed by the cutoff: zero volume is < 50.
        assert_eq!(saturation(500, 0), 0.0);
        assert_ne!(saturation(500, 0), ZERO_VOLUME_SATURATION);
    }

    #[test]
    fn test_efficiency_reference_value() {
        let ek = efficiency(0.2, 1000, 0.05);
        // (0.05 / 1.2) * log10(1000) = 0.041666 * 3 = 0.125
        assert!((ek - 0.125).abs() < 1e-9, "Expected ~0.125, got {ek}");
    }

    #[test]
    fn test_efficiency_below_cutoff() {
        assert_eq!(efficiency(0.0, 49, DEFAULT_CONVERSION_RATE), 0.0);
        assert_eq!(efficiency(0.1, 0, DEFAULT_CONVERSION_RATE), 0.0);
    }

    #[test]
    fn test_efficiency_zero_saturation_uses_offset() {
        let ek = efficiency(0.0, 100, 0.05);
        // 0.05 / 1.0 * 2 = 0.1
        assert!((ek - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_negative_rate_collapses_to_zero() {
        assert_eq!(efficiency(0.2, 1000, -0.05), 0.0);
        assert_eq!(efficiency(0.0, 5000, -1.0), 0.0);
    }

    #[test]
    fn test_parse_conversion_rate() {
        assert_eq!(parse_conversion_rate("0.05"), Ok(0.05));
        assert_eq!(parse_conversion_rate("1"), Ok(1.0));
        assert!(parse_conversion_rate("0").is_err());
        assert!(parse_conversion_rate("-0.05").is_err());
        assert!(parse_conversion_rate("1.5").is_err());
        assert!(parse_conversion_rate("NaN").is_err());
        assert!(parse_conversion_rate("five percent").is_err());
    }

    #[test]
    fn test_efficiency_non_finite_collapses_to_zero() {
        // Sk of exactly -1 would divide by zero
        assert_eq!(efficiency(-1.0, 1000, 0.05), 0.0);
        assert_eq!(efficiency(f64::NAN, 1000, 0.05), 0.0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SaturationBand::from_saturation(0.49), SaturationBand::BlueOcean);
        assert_eq!(SaturationBand::from_saturation(0.5), SaturationBand::Good);
        assert_eq!(SaturationBand::from_saturation(1.0), SaturationBand::Competitive);
        assert_eq!(SaturationBand::from_saturation(4.999), SaturationBand::Competitive);
        assert_eq!(SaturationBand::from_saturation(5.0), SaturationBand::RedOcean);
        assert_eq!(SaturationBand::from_saturation(f64::NAN), SaturationBand::BlueOcean);
    }
}
