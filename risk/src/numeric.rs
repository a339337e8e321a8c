use std::ops::{Add, Div, Mul, Sub};

/// Mimic the key features of a field.
pub trait PseudoField:
    Sized + Copy + Add<Output = Self> + Div<Output = Self> + Mul<Output = Self> + Sub<Output = Self>
{
    /// False for zero and NaN, or when the magnitude is below the threshold.
    fn is_divisible(&self, threshold: Option<Self>) -> bool;

    fn is_finite(&self) -> bool;

    /// Lift a weight or cut-off constant into the numeric type.
    fn from_f64(value: f64) -> Self;
}

#[macro_export]
macro_rules! impl_numeric {
    ($impl_type:ty) => {
        impl $crate::numeric::PseudoField for $impl_type {
            fn is_divisible(&self, tolerance: Option<Self>) -> bool {
                match tolerance {
                    Some(tol) => self.abs() >= tol,
                    None => self.abs() > 0.0,
                }
            }

            fn is_finite(&self) -> bool {
                <$impl_type>::is_finite(*self)
            }

            fn from_f64(value: f64) -> Self {
                value as $impl_type
            }
        }
    };
}

impl_numeric! { f32 }
impl_numeric! { f64 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_without_threshold() {
        assert!(2.0_f64.is_divisible(None));
        assert!((-1e-300_f64).is_divisible(None));
        assert!(!0.0_f64.is_divisible(None));
        assert!(!(-0.0_f32).is_divisible(None));
        assert!(!f64::NAN.is_divisible(None));
        assert!(!f32::NAN.is_divisible(Some(0.1)));
    }

    #[test]
    fn divisible_with_threshold() {
        assert!(0.01_f32.is_divisible(Some(0.01)));
        assert!(!0.01_f32.is_divisible(Some(0.05)));
        assert!((-0.5_f64).is_divisible(Some(0.1)));
    }

    #[test]
    fn finiteness() {
        assert!(PseudoField::is_finite(&1.5_f64));
        assert!(!PseudoField::is_finite(&f64::INFINITY));
        assert!(!PseudoField::is_finite(&f32::NAN));
    }

    #[test]
    fn lifts_constants() {
        assert_eq!(f64::from_f64(1.4), 1.4_f64);
        assert_eq!(f32::from_f64(3.3), 3.3_f32);
    }
}
