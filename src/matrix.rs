use crate::dtype::{DType, Element};
use crate::error::{MResult, MatError};
use crate::shape::Shape;
use core::ptr::NonNull;
use rawpointer::PointerExt;
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;

/// Backing storage of a matrix. Owns the allocation; views alias it.
pub(crate) struct OwnedSlice<P> {
    ptr: NonNull<P>,
    len: usize,
    cap: usize,
}

impl<P> OwnedSlice<P> {
    pub(crate) fn from_vec(v: Vec<P>) -> Self {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let cap = v.capacity();
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Self { ptr, len, cap }
    }

    pub(crate) fn as_ptr(&self) -> NonNull<P> {
        self.ptr
    }

    pub(crate) fn as_slice(&self) -> &[P] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr() as *const P, self.len) }
    }

    pub(crate) fn as_slice_mut(&self) -> &mut [P] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl<P> Drop for OwnedSlice<P> {
    fn drop(&mut self) {
        unsafe { drop(Vec::from_raw_parts(self.ptr.as_ptr(), self.len, self.cap)) }
    }
}

/// Dynamically sized 2-D container over a contiguous row-major buffer.
///
/// Buffer length is always rows * cols. Default construction is 0 x 0 with
/// no allocation; sized construction zero-fills.
pub struct Matrix<A: Element> {
    data: OwnedSlice<A>,
    shape: Shape,
}

impl<A: Element> Matrix<A> {
    pub fn new() -> Self {
        Self {
            data: OwnedSlice::from_vec(Vec::new()),
            shape: Shape::empty(),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(A::zero(), rows, cols)
    }

    pub fn from_elem(elem: A, rows: usize, cols: usize) -> Self {
        let shape = Shape::new(rows, cols);
        let v = vec![elem; shape.elem_count()];
        Self {
            data: OwnedSlice::from_vec(v),
            shape,
        }
    }

    pub fn from_vec(v: Vec<A>, rows: usize, cols: usize) -> MResult<Self> {
        let shape = Shape::new(rows, cols);
        if v.len() != shape.elem_count() {
            return Err(MatError::BufferShapeMismatch { shape, len: v.len() });
        }
        Ok(Self {
            data: OwnedSlice::from_vec(v),
            shape,
        })
    }

    pub fn from_rows<const N: usize>(rows: Vec<[A; N]>) -> Self {
        let shape = Shape::new(rows.len(), N);
        let mut v = Vec::with_capacity(shape.elem_count());
        for row in rows {
            v.extend_from_slice(&row);
        }
        Self {
            data: OwnedSlice::from_vec(v),
            shape,
        }
    }

    pub fn dtype(&self) -> DType {
        A::DTYPE
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn elem_count(&self) -> usize {
        self.data.len()
    }

    /// Aliasing view of the buffer. Every view of a matrix shares the
    /// matrix's storage; a write through one is observed through all of
    /// them. The borrow pins the matrix for as long as any view lives.
    pub fn view(&self) -> MatrixView<'_, A> {
        MatrixView {
            ptr: self.data.as_ptr(),
            shape: self.shape,
            marker: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[A] {
        self.data.as_slice()
    }

    pub fn as_slice_mut(&mut self) -> &mut [A] {
        self.data.as_slice_mut()
    }

    pub fn get(&self, row: usize, col: usize) -> MResult<A> {
        if !self.shape.contains(row, col) {
            return Err(MatError::IndexOutOfBounds {
                shape: self.shape,
                row,
                col,
                op: "get",
            });
        }
        Ok(self.as_slice()[self.shape.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: A) -> MResult<()> {
        if !self.shape.contains(row, col) {
            return Err(MatError::IndexOutOfBounds {
                shape: self.shape,
                row,
                col,
                op: "set",
            });
        }
        let offset = self.shape.offset(row, col);
        self.as_slice_mut()[offset] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: A) {
        for e in self.as_slice_mut() {
            *e = value;
        }
    }

    /// Reallocate to a new geometry, zero-filled. A no-op when the
    /// geometry is unchanged; existing content is discarded otherwise.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let shape = Shape::new(rows, cols);
        if shape == self.shape {
            return;
        }
        self.data = OwnedSlice::from_vec(vec![A::zero(); shape.elem_count()]);
        self.shape = shape;
    }
}

impl<A: Element> Default for Matrix<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Element> Clone for Matrix<A> {
    fn clone(&self) -> Self {
        Self {
            data: OwnedSlice::from_vec(self.as_slice().to_vec()),
            shape: self.shape,
        }
    }
}

impl<A: Element> PartialEq for Matrix<A> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

/// Non-owning handle into a matrix's buffer.
///
/// Carries shape metadata plus a pointer to the owner's storage. Two views
/// of the same matrix are distinct handles over one allocation; mutation
/// through either is visible through both. The lifetime parameter keeps
/// the owning matrix alive for the duration of the view.
pub struct MatrixView<'a, A> {
    ptr: NonNull<A>,
    shape: Shape,
    marker: PhantomData<&'a A>,
}

impl<'a, A> Clone for MatrixView<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A> Copy for MatrixView<'a, A> {}

impl<'a, A: Element> MatrixView<'a, A> {
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    pub fn as_slice(&self) -> &'a [A] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr() as *const A, self.elem_count()) }
    }

    fn as_slice_mut(&self) -> &'a mut [A] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.elem_count()) }
    }

    pub fn row(&self, row: usize) -> MResult<&'a [A]> {
        if row >= self.shape.rows() {
            return Err(MatError::IndexOutOfBounds {
                shape: self.shape,
                row,
                col: 0,
                op: "row",
            });
        }
        let offset = self.shape.offset(row, 0);
        Ok(unsafe {
            std::slice::from_raw_parts(self.ptr.add(offset).as_ptr(), self.shape.cols())
        })
    }

    pub fn get(&self, row: usize, col: usize) -> MResult<A> {
        if !self.shape.contains(row, col) {
            return Err(MatError::IndexOutOfBounds {
                shape: self.shape,
                row,
                col,
                op: "get",
            });
        }
        Ok(unsafe { *self.ptr.add(self.shape.offset(row, col)).as_ptr() })
    }

    /// Write through the shared storage. Observable through the owning
    /// matrix and every other view of it.
    pub fn set(&self, row: usize, col: usize, value: A) -> MResult<()> {
        if !self.shape.contains(row, col) {
            return Err(MatError::IndexOutOfBounds {
                shape: self.shape,
                row,
                col,
                op: "set",
            });
        }
        unsafe { *self.ptr.add(self.shape.offset(row, col)).as_ptr() = value };
        Ok(())
    }

    pub fn fill(&self, value: A) {
        for e in self.as_slice_mut() {
            *e = value;
        }
    }
}

impl<'a, A: Element> PartialEq for MatrixView<'a, A> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

fn format_matrix<A: Element>(view: MatrixView<'_, A>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (rows, cols) = view.shape().dims2();
    let v = view.as_slice();
    f.write_str("[")?;
    for r in 0..rows {
        if r > 0 {
            f.write_str(",\n ")?;
        }
        write!(f, "{:?}", &v[r * cols..(r + 1) * cols])?;
    }
    f.write_str("]")
}

impl<A: Element> fmt::Debug for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(self.view(), f)
    }
}

impl<A: Element> fmt::Display for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(self.view(), f)
    }
}

impl<'a, A: Element> fmt::Debug for MatrixView<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(*self, f)
    }
}
