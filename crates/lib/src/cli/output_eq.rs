/// Compare an answer against its expected value.
///
/// Unlike [`PartialEq`] this lets an answer of type `u64` be compared against
/// an expectation written as an integer literal inside of a tuple, where
/// inference picks the answer's type for the literal.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

macro_rules! tuple {
    ($($a:ident $b:ident $n:tt),*) => {
        impl<$($a, $b,)*> OutputEq<($($b,)*)> for ($($a,)*)
        where
            $($a: OutputEq<$b>,)*
        {
            #[inline]
            fn output_eq(&self, other: &($($b,)*)) -> bool {
                $(self.$n.output_eq(&other.$n))&&*
            }
        }
    };
}

tuple!(A C 0, B D 1);
tuple!(A D 0, B E 1, C F 2);

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl OutputEq<&str> for String {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self == other
    }
}

macro_rules! partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq<$ty> for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    other == self
                }
            }
        )*
    };
}

partial_eq!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, bool, ());
