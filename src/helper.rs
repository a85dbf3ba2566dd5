use crate::types::Scalar;

/// Trim a number such that it fits into the range [lower, upper].
pub fn clamp(lower: Scalar, upper: Scalar, x: Scalar) -> Scalar {
    Scalar::max(Scalar::min(upper, x), lower)
}

/// An adjustment amount between 0.0 and 1.0. Values outside this range are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction {
    f: Scalar,
}

impl Fraction {
    pub fn from(s: Scalar) -> Self {
        Fraction {
            f: clamp(0.0, 1.0, s),
        }
    }

    pub fn value(self) -> Scalar {
        self.f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_relative_eq!(0.0, clamp(0.0, 1.0, -0.3));
        assert_relative_eq!(0.25, clamp(0.0, 1.0, 0.25));
        assert_relative_eq!(1.0, clamp(0.0, 1.0, 1.7));
    }

    #[test]
    fn test_fraction() {
        assert_relative_eq!(0.3, Fraction::from(0.3).value());
        assert_relative_eq!(0.0, Fraction::from(-2.0).value());
        assert_relative_eq!(1.0, Fraction::from(12.0).value());
    }
}
