use crate::dtype::{DType, Element};
use crate::matrix::Matrix;
use crate::shape::Shape;
use half::f16;

pub type UCharMat = Matrix<u8>;
pub type UShortMat = Matrix<u16>;
pub type UIntMat = Matrix<u32>;
pub type ULongMat = Matrix<u64>;
pub type CharMat = Matrix<i8>;
pub type ShortMat = Matrix<i16>;
pub type IntMat = Matrix<i32>;
pub type LongMat = Matrix<i64>;
pub type HalfMat = Matrix<f16>;
pub type FloatMat = Matrix<f32>;
pub type DoubleMat = Matrix<f64>;

impl DType {
    /// Name of the concrete matrix payload type carrying this element type.
    pub fn mat_name(&self) -> &'static str {
        match self {
            DType::U8 => "UCharMat",
            DType::U16 => "UShortMat",
            DType::U32 => "UIntMat",
            DType::U64 => "ULongMat",
            DType::I8 => "CharMat",
            DType::I16 => "ShortMat",
            DType::I32 => "IntMat",
            DType::I64 => "LongMat",
            DType::F16 => "HalfMat",
            DType::F32 => "FloatMat",
            DType::F64 => "DoubleMat",
        }
    }
}

/// Runtime type queries over a matrix payload, concrete or type-erased.
pub trait Introspectable {
    fn type_name(&self) -> &'static str;

    fn dtype(&self) -> DType;

    fn shape(&self) -> Shape;

    fn elem_count(&self) -> usize {
        self.shape().elem_count()
    }
}

impl<A: Element> Introspectable for Matrix<A> {
    fn type_name(&self) -> &'static str {
        A::DTYPE.mat_name()
    }

    fn dtype(&self) -> DType {
        A::DTYPE
    }

    fn shape(&self) -> Shape {
        Matrix::shape(self)
    }
}

/// Type-erased matrix: one variant per supported element type.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericMat {
    U8(Matrix<u8>),
    U16(Matrix<u16>),
    U32(Matrix<u32>),
    U64(Matrix<u64>),
    I8(Matrix<i8>),
    I16(Matrix<i16>),
    I32(Matrix<i32>),
    I64(Matrix<i64>),
    F16(Matrix<f16>),
    F32(Matrix<f32>),
    F64(Matrix<f64>),
}

impl GenericMat {
    pub fn dtype(&self) -> DType {
        match self {
            GenericMat::U8(m) => m.dtype(),
            GenericMat::U16(m) => m.dtype(),
            GenericMat::U32(m) => m.dtype(),
            GenericMat::U64(m) => m.dtype(),
            GenericMat::I8(m) => m.dtype(),
            GenericMat::I16(m) => m.dtype(),
            GenericMat::I32(m) => m.dtype(),
            GenericMat::I64(m) => m.dtype(),
            GenericMat::F16(m) => m.dtype(),
            GenericMat::F32(m) => m.dtype(),
            GenericMat::F64(m) => m.dtype(),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            GenericMat::U8(m) => m.shape(),
            GenericMat::U16(m) => m.shape(),
            GenericMat::U32(m) => m.shape(),
            GenericMat::U64(m) => m.shape(),
            GenericMat::I8(m) => m.shape(),
            GenericMat::I16(m) => m.shape(),
            GenericMat::I32(m) => m.shape(),
            GenericMat::I64(m) => m.shape(),
            GenericMat::F16(m) => m.shape(),
            GenericMat::F32(m) => m.shape(),
            GenericMat::F64(m) => m.shape(),
        }
    }

    pub fn elem_count(&self) -> usize {
        self.shape().elem_count()
    }
}

impl Introspectable for GenericMat {
    fn type_name(&self) -> &'static str {
        self.dtype().mat_name()
    }

    fn dtype(&self) -> DType {
        GenericMat::dtype(self)
    }

    fn shape(&self) -> Shape {
        GenericMat::shape(self)
    }
}

macro_rules! impl_from_mat {
    ($($e:ident => $v:ident),* $(,)?) => {
        $(impl From<Matrix<$e>> for GenericMat {
            fn from(m: Matrix<$e>) -> Self {
                GenericMat::$v(m)
            }
        })*
    };
}

impl_from_mat!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f16 => F16,
    f32 => F32,
    f64 => F64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_type_queries() {
        let m = IntMat::zeros(3, 4);
        assert_eq!(m.type_name(), "IntMat");
        assert_eq!(Introspectable::dtype(&m), DType::I32);
        assert_eq!(m.elem_count(), 12);
    }

    #[test]
    fn test_erased_type_queries() {
        let g: GenericMat = DoubleMat::zeros(10, 5).into();
        assert_eq!(g.dtype(), DType::F64);
        assert_eq!(g.type_name(), "DoubleMat");
        assert_eq!(g.shape().dims2(), (10, 5));
        assert_eq!(g.elem_count(), 50);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let i: GenericMat = IntMat::zeros(2, 2).into();
        let d: GenericMat = DoubleMat::new().into();
        let objs: Vec<&dyn Introspectable> = vec![&i, &d];
        assert_eq!(objs[0].type_name(), "IntMat");
        assert_eq!(objs[1].type_name(), "DoubleMat");
        assert_eq!(objs[1].elem_count(), 0);
    }

    #[test]
    fn test_erased_eq() {
        let a: GenericMat = IntMat::zeros(2, 2).into();
        let b: GenericMat = IntMat::zeros(2, 2).into();
        let c: GenericMat = DoubleMat::zeros(2, 2).into();
        assert_eq!(a, b);
        // same geometry, different dtype
        assert_ne!(a, c);
    }
}
