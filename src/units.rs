//! Fixed-point physical quantities returned by the calibrated reads

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// Force in nanonewtons
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Force(pub i64);

/// Temperature in nanokelvin
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature(pub i64);

/// One standard gravity acting on one kilogram
pub const EARTH_GRAVITY: Force = Force(9_806_650_000);

/// A difference of one degree Celsius
pub const CELSIUS: Temperature = Temperature(1_000_000_000);

/// 0 °C
pub const ZERO_CELSIUS: Temperature = Temperature(273_150_000_000);

impl Force {
    /// Value in nanonewtons
    pub const fn nanonewtons(self) -> i64 {
        self.0
    }
}

impl Temperature {
    /// Value in nanokelvin
    pub const fn nanokelvin(self) -> i64 {
        self.0
    }
}

macro_rules! impl_arith {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;

            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;

            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = $t;

            fn neg(self) -> $t {
                $t(-self.0)
            }
        }

        impl Mul<i64> for $t {
            type Output = $t;

            fn mul(self, rhs: i64) -> $t {
                $t(self.0 * rhs)
            }
        }

        impl Mul<$t> for i64 {
            type Output = $t;

            fn mul(self, rhs: $t) -> $t {
                $t(self * rhs.0)
            }
        }
    };
}

impl_arith!(Force);
impl_arith!(Temperature);

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}nN", self.0)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}nK", self.0)
    }
}
