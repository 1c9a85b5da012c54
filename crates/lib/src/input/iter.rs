use core::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over values parsed from an [IStr], see [IStr::iter].
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}

/// Iterator over lines parsed from an [IStr], see [IStr::lines].
pub struct Lines<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Lines<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Lines<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line().transpose()
    }
}

/// Iterator over blank line separated paragraphs, see [IStr::paragraphs].
pub struct Paragraphs<'a> {
    input: &'a mut IStr,
}

impl<'a> Paragraphs<'a> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self { input }
    }
}

impl Iterator for Paragraphs<'_> {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.paragraph()
    }
}
