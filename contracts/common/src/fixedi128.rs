use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::WAD;

/// Fixed type with inner type of i128 and fixed denominator 10e18 (WAD)
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = WAD;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: FixedI128) -> Option<FixedI128> {
        self.0.checked_add(value.0).map(FixedI128)
    }

    /// Subtraction of two fixed values
    pub fn checked_sub(self, other: FixedI128) -> Option<FixedI128> {
        self.0.checked_sub(other.0).map(FixedI128)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value rounded down, the product is widened to I256 when it exceeds i128
    pub fn mul_int<T: Into<i128>>(self, env: &Env, other: T) -> i128 {
        self.0.fixed_mul_floor(env, &other.into(), &Self::DENOMINATOR)
    }

    /// Scales fixed value by `nom / denom`, rounds down.
    /// Fails when `denom` is zero
    pub fn mul_ratio<N: Into<i128>, D: Into<i128>>(
        self,
        env: &Env,
        nom: N,
        denom: D,
    ) -> Option<FixedI128> {
        let denom = denom.into();

        if denom == 0 {
            return None;
        }

        Some(FixedI128(self.0.fixed_mul_floor(env, &nom.into(), &denom)))
    }
}
