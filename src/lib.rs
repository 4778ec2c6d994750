mod dtype;
mod error;
mod generic;
mod matrix;
mod payload;
mod shape;

pub use dtype::{DType, Element};
pub use error::{MResult, MatError};
pub use generic::{
    CharMat, DoubleMat, FloatMat, GenericMat, HalfMat, IntMat, Introspectable, LongMat, ShortMat,
    UCharMat, UIntMat, ULongMat, UShortMat,
};
pub use matrix::{Matrix, MatrixView};
pub use payload::Payload;
pub use shape::Shape;

#[macro_export]
macro_rules! mat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from_rows(vec![$([$($x,)*],)*])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat_macro() {
        let m: Matrix<i32> = mat![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.shape().dims2(), (2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_public_surface() {
        let m = DoubleMat::zeros(10, 5);
        let v = m.view();
        assert_eq!(v.elem_count(), 50);
        let g = GenericMat::from(m);
        assert_eq!(g.dtype(), DType::F64);
    }
}
