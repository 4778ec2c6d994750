#[inline(always)]
pub fn stride_offset(n: usize, stride: usize) -> usize {
    n * stride
}

/// Geometry of a 2-D row-major buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Shape {
        Shape { rows, cols }
    }

    pub fn empty() -> Shape {
        Shape { rows: 0, cols: 0 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.elem_count() == 0
    }

    // [r, c] => strides [c, 1]
    pub fn strides(&self) -> (usize, usize) {
        (self.cols, 1)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        let (rs, cs) = self.strides();
        stride_offset(row, rs) + stride_offset(col, cs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_and_offset() {
        let s = Shape::new(3, 7);
        assert_eq!(s.strides(), (7, 1));
        assert_eq!(s.offset(0, 0), 0);
        assert_eq!(s.offset(2, 2), 16);
        assert_eq!(s.offset(2, 6), 20);
        assert_eq!(s.elem_count(), 21);
    }

    #[test]
    fn test_empty_shape() {
        let s = Shape::empty();
        assert_eq!(s.dims2(), (0, 0));
        assert_eq!(s.elem_count(), 0);
        assert!(s.is_empty());
        assert!(!s.contains(0, 0));
    }
}
