//! Input parser.

mod error;
mod iter;

use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::{ArrayString, ArrayVec};
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{Iter, Lines, Paragraphs};

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(prod, repr(transparent))]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor over the whole of `data`.
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"1 2\n3 4\n");
    /// assert_eq!(input.line::<(u32, u32)>()?, (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>()?, (3, 4));
    /// assert!(input.try_line::<(u32, u32)>()?.is_none());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self {
            data,
            index: Size::ZERO,
        }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over values of type `T`.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Construct an iterator over lines parsed as `T`.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, T> {
        Lines::new(self)
    }

    /// Construct an iterator over blank line separated paragraphs.
    #[inline]
    pub fn paragraphs(&mut self) -> Paragraphs<'_> {
        Paragraphs::new(self)
    }

    /// Split off the next paragraph, which is everything up until the next
    /// blank line. Leading newlines are skipped.
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"a\nb\n\n\nc\n");
    /// assert_eq!(input.paragraph().unwrap().as_data(), b"a\nb");
    /// assert_eq!(input.paragraph().unwrap().as_data(), b"c\n");
    /// assert!(input.paragraph().is_none());
    /// ```
    pub fn paragraph(&mut self) -> Option<IStr> {
        let n = self.find(0, |b| *b != NL);
        self.advance(n);

        let paragraph = self.split_once_at(|data| memchr::memmem::find(data, b"\n\n"), 2)?;

        let n = self.find(0, |b| *b != NL);
        self.advance(n);
        Some(paragraph)
    }

    /// Split on the given byte, see [Split].
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator + '_ {
        return Iterator { input: self, byte };

        struct Iterator<'a> {
            input: &'a mut IStr,
            byte: u8,
        }

        impl<'a> InputIterator for Iterator<'a> {
            #[inline]
            fn index(&self) -> Size {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<IStr> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if there are
    /// no more lines or the line is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line is
    /// not a valid value of type `T`, returns `Ok(None)` if there is no more
    /// data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Shorthand for using [Ws] to scan newlines.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next whitespace delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split off everything up to the position found by `find`, skipping
    /// `skip` bytes of separator. Takes everything if nothing is found.
    fn split_once_at<T>(&mut self, find: T, skip: usize) -> Option<IStr>
    where
        T: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = find(self.data) else {
            let data = mem::take(&mut self.data);
            self.index = index.saturating_add(Size::new(data.len()));
            return Some(IStr { data, index });
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(skip)?);
        Some(IStr { data, index })
    }

    /// Split once at the given byte or until the end of string.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        self.split_once_at(|data| memchr::memchr(b, data), 1)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is no value to parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over inputs.
pub trait InputIterator {
    /// Current index of the input iterator.
    fn index(&self) -> Size;

    /// Get next input.
    fn next(&mut self) -> Option<IStr>;
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter: Sized {
    /// Parse a value, returning `None` if the inputs ran out.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };
                )*

                let $first_id = <$first>::from_input(&mut $first_id)?;
                $(let $rest_id = <$rest>::from_input(&mut $rest_id)?;)*
                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! number {
    ($ty:ty, $error:ident) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word()? else {
                    return Ok(None);
                };

                let Ok(n) = str::parse(string) else {
                    return Err(IStrError::new(index.saturating_add(n)..p.index, ErrorKind::$error(string)));
                };

                Ok(Some(n))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);
tuple!(5 => A a, B b, C c, D d, E e);
tuple!(6 => A a, B b, C c, D d, E e, F f);

number!(usize, NotInteger);
number!(isize, NotInteger);
number!(u8, NotInteger);
number!(u16, NotInteger);
number!(u32, NotInteger);
number!(u64, NotInteger);
number!(u128, NotInteger);
number!(i8, NotInteger);
number!(i16, NotInteger);
number!(i32, NotInteger);
number!(i64, NotInteger);
number!(i128, NotInteger);

impl FromInput for char {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedChar
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        use bstr::ByteSlice;

        let Some(c) = p.data.chars().next() else {
            return Ok(None);
        };

        p.advance(c.len_utf8());
        Ok(Some(c))
    }
}

/// Takes the rest of the input.
impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let rest = *p;
        p.advance(p.len());
        Ok(Some(rest))
    }
}

impl FromInput for &[u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<const N: usize> FromInput for ArrayString<N> {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(string) = <&str>::try_from_input(p)? else {
            return Ok(None);
        };

        match ArrayString::from(string) {
            Ok(string) => Ok(Some(string)),
            Err(..) => Err(IStrError::new(index..p.index, ErrorKind::StringCapacity(N))),
        }
    }
}

/// Parse until end of line.
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut input) = p.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(Self(input.next()?)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());

        let Some(data) = p.data.get(..n) else {
            return Ok(Some(Self(0)));
        };

        p.advance(n);
        Ok(Some(Self(memchr::memchr_iter(NL, data).count())))
    }
}

impl<T, const N: usize> FromInput for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let start = p.index;

        let Some(output) = ArrayVec::<T, N>::try_from_input(p)? else {
            return Ok(None);
        };

        match output.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

/// Repeatedly parse elements, until the input runs out or an element can't be
/// parsed.
fn collect<T>(p: &mut IStr, mut push: impl FnMut(T) -> Result<()>) -> Result<()>
where
    T: FromInput,
{
    while !p.is_empty() {
        let before = p.len();

        let Some(element) = T::try_from_input(p)? else {
            break;
        };

        push(element)?;

        if p.len() == before {
            break;
        }
    }

    Ok(())
}

impl<T, const N: usize> FromInput for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = ArrayVec::new();

        collect(p, |element| {
            output
                .try_push(element)
                .map_err(|_| IStrError::new(index..index, ErrorKind::ArrayCapacity(N)))
        })?;

        Ok(Some(output))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        collect(p, |element| {
            output.push(element);
            Ok(())
        })?;

        Ok(Some(output))
    }
}

/// Split on byte `D`, parsing each piece into an element of `T`.
///
/// ```
/// use lib::input::{IStr, Split};
///
/// let mut input = IStr::new(b"1,0,1~1,2,1\n");
/// let Split((Split([x, y, z]), Split(end))) = input.line::<Split<'~', (Split<',', [u32; 3]>, Split<',', Vec<u32>>)>>()?;
/// assert_eq!((x, y, z), (1, 0, 1));
/// assert_eq!(end, [1, 2, 1]);
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<const N: usize, T> FromInputIter for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let index = it.index();
        let mut array = ArrayVec::<T, N>::new();

        while array.remaining_capacity() > 0 {
            let Some(mut value) = it.next() else {
                return Ok(None);
            };

            array.push(T::from_input(&mut value)?);
        }

        match array.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                index..it.index(),
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

impl<T> FromInputIter for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let mut output = Vec::new();

        while let Some(mut value) = it.next() {
            output.push(T::from_input(&mut value)?);
        }

        Ok(Some(output))
    }
}

impl<T, const N: usize> FromInputIter for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let index = it.index();
        let mut output = ArrayVec::new();

        while let Some(mut value) = it.next() {
            let value = T::from_input(&mut value)?;

            if output.try_push(value).is_err() {
                return Err(IStrError::new(
                    index..it.index(),
                    ErrorKind::ArrayCapacity(N),
                ));
            }
        }

        Ok(Some(output))
    }
}

/// Consumes nothing.
#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace or control character.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}

/// Read a single byte.
pub struct B(pub u8);

impl FromInput for B {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedChar
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(&b) = p.data.first() else {
            return Ok(None);
        };

        p.advance(1);
        Ok(Some(Self(b)))
    }
}

#[cfg(test)]
mod tests;
