//! Points and directions on a plane where `y` grows downwards.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point on a two-dimensional plane.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Construct a point out of grid coordinates.
    #[inline]
    pub const fn at(x: usize, y: usize) -> Self {
        Self::new(x as i64, y as i64)
    }

    /// The point one step away in the given direction.
    #[inline]
    pub fn step(self, dir: Dir) -> Self {
        self + dir.offset()
    }

    /// Manhattan distance to another point.
    ///
    /// ```
    /// use lib::point::Point;
    ///
    /// assert_eq!(Point::new(1, 6).manhattan(Point::new(5, 11)), 9);
    /// ```
    #[inline]
    pub fn manhattan(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Neighbouring points, optionally including diagonal ones.
    pub fn neighbours(self, diagonal: bool) -> impl Iterator<Item = (Dir, Point)> {
        let dirs: &'static [Dir] = if diagonal { &Dir::ALL } else { &Dir::CARDINAL };
        dirs.iter().map(move |&dir| (dir, self.step(dir)))
    }

    /// Test if `other` is a neighbour of this point.
    #[inline]
    pub fn is_adjacent(self, other: Self, diagonal: bool) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);

        match (dx, dy) {
            (0, 1) | (1, 0) => true,
            (1, 1) => diagonal,
            _ => false,
        }
    }

    /// Points on the horizontal, vertical or diagonal line from this point to
    /// `other`, both included.
    ///
    /// ```
    /// use lib::point::Point;
    ///
    /// let line = Point::new(0, 0).line_to(Point::new(2, 2)).collect::<Vec<_>>();
    /// assert_eq!(line, [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]);
    /// ```
    pub fn line_to(self, other: Self) -> impl Iterator<Item = Point> {
        let step = Point::new((other.x - self.x).signum(), (other.y - self.y).signum());
        let steps = self.x.abs_diff(other.x).max(self.y.abs_diff(other.y));
        (0..=steps as i64).map(move |n| self + step * n)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A direction to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Dir {
    /// Directions which are not diagonal.
    pub const CARDINAL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub const ALL: [Dir; 8] = [
        Dir::Up,
        Dir::Down,
        Dir::Left,
        Dir::Right,
        Dir::UpLeft,
        Dir::DownLeft,
        Dir::UpRight,
        Dir::DownRight,
    ];

    /// Offset of a single step.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Dir::Up => Point::new(0, -1),
            Dir::Down => Point::new(0, 1),
            Dir::Left => Point::new(-1, 0),
            Dir::Right => Point::new(1, 0),
            Dir::UpLeft => Point::new(-1, -1),
            Dir::DownLeft => Point::new(-1, 1),
            Dir::UpRight => Point::new(1, -1),
            Dir::DownRight => Point::new(1, 1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Dir::UpLeft | Dir::DownLeft | Dir::UpRight | Dir::DownRight
        )
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::UpLeft => Dir::DownRight,
            Dir::DownLeft => Dir::UpRight,
            Dir::UpRight => Dir::DownLeft,
            Dir::DownRight => Dir::UpLeft,
        }
    }

    /// Turn 90 degrees counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Dir::Up => Dir::Left,
            Dir::Left => Dir::Down,
            Dir::Down => Dir::Right,
            Dir::Right => Dir::Up,
            Dir::UpLeft => Dir::DownLeft,
            Dir::DownLeft => Dir::DownRight,
            Dir::DownRight => Dir::UpRight,
            Dir::UpRight => Dir::UpLeft,
        }
    }

    /// Turn 90 degrees clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        self.turn_left().reverse()
    }

    /// Index of a cardinal direction, useful for bitsets.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests;
