use half::f16;
use num_traits::Zero;
use std::fmt;

/// Runtime tag for the element type held by a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F16,
    F32,
    F64,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::F16 => "f16",
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }

    pub fn size_of(&self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 | DType::F16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }
}

/// Concrete numeric types a matrix can hold. `Zero` supplies the value
/// sized construction fills with.
pub trait Element: Copy + PartialEq + fmt::Debug + Zero {
    const DTYPE: DType;
}

#[macro_export]
macro_rules! impl_element {
    ($($e:ident => $d:ident),* $(,)?) => {
        $(impl Element for $e {
            const DTYPE: DType = DType::$d;
        })*
    };
}

impl_element!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);

impl Element for f16 {
    const DTYPE: DType = DType::F16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<i32 as Element>::DTYPE, DType::I32);
        assert_eq!(<f16 as Element>::DTYPE, DType::F16);
        assert_eq!(DType::F64.name(), "f64");
        assert_eq!(DType::I32.size_of(), 4);
        assert!(DType::F16.is_float());
        assert!(!DType::U64.is_float());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(f16::zero(), f16::from_f32(0.0));
    }
}
