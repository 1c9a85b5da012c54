/// Extensions to slices.
pub trait SliceExt<O> {
    /// Iterate over every unordered pair of distinct elements.
    ///
    /// ```
    /// use lib::ext::SliceExt;
    ///
    /// let pairs = [1, 2, 3].pairs().collect::<Vec<_>>();
    /// assert_eq!(pairs, [(&1, &2), (&1, &3), (&2, &3)]);
    /// ```
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a O, &'a O)>
    where
        O: 'a;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T)>
    where
        T: 'a,
    {
        self.iter()
            .enumerate()
            .flat_map(move |(n, a)| self[n + 1..].iter().map(move |b| (a, b)))
    }
}
