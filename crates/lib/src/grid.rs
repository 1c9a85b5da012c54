//! Two-dimensional grids.

use core::fmt;
use core::ops::{Index, IndexMut};

use bstr::ByteSlice;

use crate::input::{ErrorKind, FromInput, IStr, IStrError};
use crate::point::Point;

/// An owned, row-major grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    data: Vec<T>,
    columns: usize,
    rows: usize,
}

impl<T> Grid<T> {
    /// Construct a grid with every cell set to `value`.
    pub fn new(columns: usize, rows: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; columns * rows],
            columns,
            rows,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Test if the point is inside of the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }

    /// Linear index of the given point.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;

        if x >= self.columns || y >= self.rows {
            return None;
        }

        Some(y * self.columns + x)
    }

    /// Point at the given linear index.
    #[inline]
    pub fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.columns) as i64, (index / self.columns) as i64)
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.data.get(self.index_of(p)?)
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        let index = self.index_of(p)?;
        self.data.get_mut(index)
    }

    /// Get a cell as if the grid was repeated infinitely in every direction.
    #[inline]
    pub fn get_wrapping(&self, p: Point) -> &T {
        let x = p.x.rem_euclid(self.columns as i64) as usize;
        let y = p.y.rem_euclid(self.rows as i64) as usize;
        &self.data[y * self.columns + x]
    }

    /// Get the given row.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[T]> {
        let start = y.checked_mul(self.columns)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }

    /// Iterate over rows.
    #[inline]
    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.columns.max(1))
    }

    /// Iterate over the cells of the given column from top to bottom.
    #[inline]
    pub fn column(&self, x: usize) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let cells = if x < self.columns { self.data.get(x..) } else { None };
        cells
            .unwrap_or_default()
            .iter()
            .step_by(self.columns.max(1))
    }

    /// Iterate over every cell and its position.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(index, value)| (self.point_of(index), value))
    }

    /// Position of the first cell equal to `value`.
    pub fn position(&self, value: &T) -> Option<Point>
    where
        T: PartialEq,
    {
        let index = self.data.iter().position(|v| v == value)?;
        Some(self.point_of(index))
    }

    /// Access the underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably access the underlying row-major data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Map every cell into a new grid.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let data = (0..self.columns)
            .flat_map(|x| self.column(x).cloned())
            .collect();

        Self {
            data,
            columns: self.rows,
            rows: self.columns,
        }
    }

    /// Rotate the grid 90 degrees clockwise.
    pub fn rotate_clockwise(&self) -> Self
    where
        T: Clone,
    {
        let data = (0..self.columns)
            .flat_map(|x| self.column(x).rev().cloned())
            .collect();

        Self {
            data,
            columns: self.rows,
            rows: self.columns,
        }
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, p: Point) -> &T {
        match self.get(p) {
            Some(value) => value,
            None => panic!("{p:?} is outside of {}x{} grid", self.columns, self.rows),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut T {
        let (columns, rows) = (self.columns, self.rows);

        match self.get_mut(p) {
            Some(value) => value,
            None => panic!("{p:?} is outside of {columns}x{rows} grid"),
        }
    }
}

/// Parses a block of equally long lines, ending at a blank line or the end of
/// input.
impl FromInput for Grid<u8> {
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>, IStrError> {
        let mut data = Vec::new();
        let mut columns = 0;
        let mut rows = 0;

        while let Some(line) = p.try_line::<IStr>()? {
            let row = line.as_data();

            if row.is_empty() {
                break;
            }

            if rows == 0 {
                columns = row.len();
            } else if row.len() != columns {
                return Err(IStrError::new(
                    line.index()..p.index(),
                    ErrorKind::RaggedGrid {
                        row: rows,
                        expected: columns,
                        actual: row.len(),
                    },
                ));
            }

            data.extend_from_slice(row);
            rows += 1;
        }

        if rows == 0 {
            return Ok(None);
        }

        Ok(Some(Self {
            data,
            columns,
            rows,
        }))
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            writeln!(f, "{}", row.as_bstr())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({}x{})", self.columns, self.rows)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests;
