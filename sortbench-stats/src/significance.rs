//! Two-Sample Significance Testing
//!
//! Independent two-sample t-test between the same metric measured for two
//! algorithms. The test only ever sees the two sample slices.
//!
//! - Student (pooled variance, `df = n1 + n2 - 2`) is the default
//! - Welch (unequal variances, Welch–Satterthwaite `df`) is available
//!
//! The two-tailed p-value comes from the Student t distribution through the
//! regularized incomplete beta function:
//! `p = I_{df / (df + t²)}(df / 2, 1 / 2)`.

use crate::summary::{StatsError, check_samples, mean, sample_variance};
use serde::{Deserialize, Serialize};

/// p-values strictly below this are reported as significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Which variance assumption the t-test makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    /// Pooled variance (equal variances assumed)
    #[default]
    Student,
    /// Separate variances
    Welch,
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestKind::Student => write!(f, "Student's t-test"),
            TestKind::Welch => write!(f, "Welch's t-test"),
        }
    }
}

/// Verdict of a significance test at [`SIGNIFICANCE_LEVEL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    /// `p < 0.05`
    Significant,
    /// `p >= 0.05`
    NotSignificant,
}

impl std::fmt::Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Significance::Significant => {
                write!(f, "Statistically significant difference (p < 0.05)")
            }
            Significance::NotSignificant => {
                write!(f, "No statistically significant difference (p >= 0.05)")
            }
        }
    }
}

/// Classify a p-value against the fixed significance level
pub fn classify(p_value: f64) -> Significance {
    if p_value < SIGNIFICANCE_LEVEL {
        Significance::Significant
    } else {
        Significance::NotSignificant
    }
}

/// Outcome of a two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// Variance assumption used
    pub kind: TestKind,
    /// t statistic (positive when the first sample has the larger mean).
    /// Infinite values are written as `"inf"` / `"-inf"`.
    #[serde(with = "signed_infinity")]
    pub statistic: f64,
    /// Degrees of freedom
    pub df: f64,
    /// Two-tailed p-value
    pub p_value: f64,
}

impl TTestResult {
    /// Verdict at [`SIGNIFICANCE_LEVEL`]
    pub fn significance(&self) -> Significance {
        classify(self.p_value)
    }

    /// Whether `p < 0.05`
    pub fn is_significant(&self) -> bool {
        self.significance() == Significance::Significant
    }
}

/// Serde adapter for an `f64` that may be `±inf`, which JSON numbers cannot hold
mod signed_infinity {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid t statistic `{other}`"))),
            },
        }
    }
}

/// Two-sample t-test of `a` against `b`.
///
/// When both samples have zero variance the statistic is 0 with `p = 1` for
/// equal means, and infinite with `p = 0` otherwise.
pub fn t_test(a: &[f64], b: &[f64], kind: TestKind) -> Result<TTestResult, StatsError> {
    check_samples(a)?;
    check_samples(b)?;

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let m1 = mean(a);
    let m2 = mean(b);
    let v1 = sample_variance(a, m1);
    let v2 = sample_variance(b, m2);

    let (std_err, df) = match kind {
        TestKind::Student => {
            let df = n1 + n2 - 2.0;
            let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        TestKind::Welch => {
            let se1 = v1 / n1;
            let se2 = v2 / n2;
            let total = se1 + se2;
            let df = if total > 0.0 {
                total * total / (se1 * se1 / (n1 - 1.0) + se2 * se2 / (n2 - 1.0))
            } else {
                n1 + n2 - 2.0
            };
            (total.sqrt(), df)
        }
    };

    let diff = m1 - m2;
    if std_err == 0.0 {
        let (statistic, p_value) = if diff == 0.0 {
            (0.0, 1.0)
        } else {
            (diff.signum() * f64::INFINITY, 0.0)
        };
        return Ok(TTestResult {
            kind,
            statistic,
            df,
            p_value,
        });
    }

    let statistic = diff / std_err;
    Ok(TTestResult {
        kind,
        statistic,
        df,
        p_value: two_tailed_p(statistic, df),
    })
}

/// A t-test between two metric series together with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesComparison {
    /// Raw test outcome
    pub test: TTestResult,
    /// Verdict at [`SIGNIFICANCE_LEVEL`]
    pub significance: Significance,
}

/// Run `kind` on two series and classify the outcome.
pub fn compare_series(
    a: &[f64],
    b: &[f64],
    kind: TestKind,
) -> Result<SeriesComparison, StatsError> {
    let test = t_test(a, b, kind)?;
    Ok(SeriesComparison {
        test,
        significance: test.significance(),
    })
}

/// Two-tailed p-value of `t` under a Student t distribution with `df` degrees
/// of freedom.
pub fn two_tailed_p(t: f64, df: f64) -> f64 {
    if t.is_infinite() {
        return 0.0;
    }
    let x = df / (df + t * t);
    regularized_incomplete_beta(df / 2.0, 0.5, x).clamp(0.0, 1.0)
}

// ─── Special functions ───────────────────────────────────────────────────────

const LANCZOS_G: f64 = 7.0;
#[allow(clippy::excessive_precision)]
const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function (Lanczos approximation)
fn ln_gamma(x: f64) -> f64 {
    use std::f64::consts::PI;
    if x < 0.5 {
        // Reflection formula
        (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let t = x + LANCZOS_G + 0.5;
        let series = LANCZOS_COEF
            .iter()
            .enumerate()
            .skip(1)
            .fold(LANCZOS_COEF[0], |acc, (i, c)| acc + c / (x + i as f64));
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
    }
}

/// Regularized incomplete beta function `I_x(a, b)`
fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    // The continued fraction converges fastest on this side of the mean
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta function (modified Lentz)
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: usize = 1000;
    const EPSILON: f64 = 1e-15;
    const TINY: f64 = 1e-300;

    let guard = |v: f64| if v.abs() < TINY { TINY } else { v };

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 / guard(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / guard(1.0 + aa * d);
        c = guard(1.0 + aa / c);
        h *= d * c;

        // Odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / guard(1.0 + aa * d);
        c = guard(1.0 + aa / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }

    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold() {
        assert_eq!(classify(0.01), Significance::Significant);
        assert_eq!(classify(0.0499), Significance::Significant);
        assert_eq!(classify(0.05), Significance::NotSignificant);
        assert_eq!(classify(0.8), Significance::NotSignificant);
    }

    #[test]
    fn test_ln_gamma_known_values() {
        // Γ(1) = Γ(2) = 1, Γ(5) = 24, Γ(1/2) = √π
        assert!(ln_gamma(1.0).abs() < 1e-12);
        assert!(ln_gamma(2.0).abs() < 1e-12);
        assert!((ln_gamma(5.0) - 24f64.ln()).abs() < 1e-10);
        assert!((ln_gamma(0.5) - std::f64::consts::PI.sqrt().ln()).abs() < 1e-10);
    }

    #[test]
    fn test_incomplete_beta_symmetry() {
        // I_0.5(a, a) = 0.5 for any a
        for a in [0.5, 1.0, 3.0, 10.0] {
            assert!((regularized_incomplete_beta(a, a, 0.5) - 0.5).abs() < 1e-10);
        }
        // I_x(1, 1) = x
        assert!((regularized_incomplete_beta(1.0, 1.0, 0.3) - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_p_value_cauchy() {
        // df = 1 is the Cauchy distribution: P(|T| > 1) = 0.5
        assert!((two_tailed_p(1.0, 1.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_p_value_large_df_approaches_normal() {
        let p = two_tailed_p(1.959_963_984_540_054, 1e4);
        assert!((p - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_student_known_result() {
        // Shifted copies: t = -1, df = 8, p ≈ 0.346594
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let r = t_test(&a, &b, TestKind::Student).unwrap();

        assert!((r.statistic + 1.0).abs() < 1e-12);
        assert!((r.df - 8.0).abs() < 1e-12);
        assert!((r.p_value - 0.346_593_507).abs() < 1e-6);
        assert_eq!(r.significance(), Significance::NotSignificant);
    }

    #[test]
    fn test_welch_equals_student_for_balanced_equal_variance() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let s = t_test(&a, &b, TestKind::Student).unwrap();
        let w = t_test(&a, &b, TestKind::Welch).unwrap();

        assert!((s.statistic - w.statistic).abs() < 1e-12);
        assert!((s.df - w.df).abs() < 1e-9);
        assert!((s.p_value - w.p_value).abs() < 1e-9);
    }

    #[test]
    fn test_identical_series_not_significant() {
        let samples = [100.0, 102.0, 98.0, 101.0, 99.0, 100.0, 101.0, 99.0];
        let r = t_test(&samples, &samples, TestKind::Student).unwrap();
        assert!(r.statistic.abs() < 1e-12);
        assert!((r.p_value - 1.0).abs() < 1e-9);
        assert!(!r.is_significant());
    }

    #[test]
    fn test_clear_difference_significant() {
        let a = [100.0, 102.0, 98.0, 101.0, 99.0, 100.0, 101.0, 99.0];
        let b = [200.0, 202.0, 198.0, 201.0, 199.0, 200.0, 201.0, 199.0];
        for kind in [TestKind::Student, TestKind::Welch] {
            let r = t_test(&a, &b, kind).unwrap();
            assert!(r.statistic < 0.0);
            assert!(r.p_value < 1e-6);
            assert!(r.is_significant());
        }
    }

    #[test]
    fn test_zero_variance_series() {
        let a = [1225.0; 5];
        let b = [1225.0; 5];
        let r = t_test(&a, &b, TestKind::Student).unwrap();
        assert_eq!(r.p_value, 1.0);
        assert_eq!(r.statistic, 0.0);

        let c = [300.0; 5];
        let r = t_test(&a, &c, TestKind::Welch).unwrap();
        assert_eq!(r.p_value, 0.0);
        assert_eq!(r.statistic, f64::INFINITY);
        assert!(r.is_significant());
    }

    #[test]
    fn test_infinite_statistic_survives_json() {
        let low = [300.0; 5];
        let high = [1225.0; 5];
        for (a, b, text) in [(&high, &low, "\"inf\""), (&low, &high, "\"-inf\"")] {
            let cmp = compare_series(a, b, TestKind::Student).unwrap();
            let json = serde_json::to_string(&cmp).unwrap();
            assert!(json.contains(text));

            let back: SeriesComparison = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cmp);
        }
    }

    #[test]
    fn test_finite_statistic_stays_a_number() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let r = t_test(&a, &b, TestKind::Student).unwrap();
        let value = serde_json::to_value(r).unwrap();
        assert!(value["statistic"].is_f64());

        let back: TTestResult = serde_json::from_value(value).unwrap();
        assert_eq!(back.statistic, r.statistic);
        assert!(serde_json::from_str::<TTestResult>(
            r#"{"kind":"student","statistic":"big","df":8.0,"p_value":0.5}"#
        )
        .is_err());
    }

    #[test]
    fn test_compare_series_carries_verdict() {
        let a = [10.0, 11.0, 9.0, 10.5, 9.5];
        let b = [30.0, 31.0, 29.0, 30.5, 29.5];
        let cmp = compare_series(&a, &b, TestKind::Student).unwrap();
        assert_eq!(cmp.significance, Significance::Significant);
        assert_eq!(cmp.test.kind, TestKind::Student);
    }

    #[test]
    fn test_insufficient_samples() {
        assert!(matches!(
            t_test(&[1.0], &[1.0, 2.0], TestKind::Student),
            Err(StatsError::Degenerate { actual: 1, .. })
        ));
        assert!(matches!(
            t_test(&[1.0, 2.0], &[], TestKind::Welch),
            Err(StatsError::Degenerate { actual: 0, .. })
        ));
    }
}
