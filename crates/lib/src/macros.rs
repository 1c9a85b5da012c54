/// Implement [FromInput][crate::input::FromInput] for a type by parsing
/// something else first and converting it with a fallible block.
///
/// ```
/// use lib::prelude::*;
///
/// enum Turn {
///     Left,
///     Right,
/// }
///
/// lib::from_input! {
///     |B(b): B| -> Turn {
///         Ok(match b {
///             b'L' => Turn::Left,
///             b'R' => Turn::Right,
///             b => bail!("bad turn {:?}", b as char),
///         })
///     }
/// }
///
/// let mut input = IStr::new(b"LR");
/// assert!(matches!(input.next::<Turn>()?, Turn::Left));
/// assert!(matches!(input.next::<Turn>()?, Turn::Right));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Custom(e)))
                    }
                }
            }
        }
    };
}
