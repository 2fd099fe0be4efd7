//! Numeric cast traits
//!
//! Generic narrowing/widening between primitive numbers with plain `as`
//! semantics: integers truncate to the target width, floats round to the
//! nearest representable value. Nothing here panics or reports overflow.

/// Any primitive integer.
///
/// Casts go through `i128`. Two's complement truncation composes, so
/// `T::from_i128(v.to_i128())` is identical to a direct `v as T`.
pub trait Integer: Copy {
    fn to_i128(self) -> i128;
    fn from_i128(value: i128) -> Self;

    /// Cast into another integer type
    fn cast<T: Integer>(self) -> T {
        T::from_i128(self.to_i128())
    }
}

/// Any primitive float
pub trait Float: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;

    fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Float for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

impl Float for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}
