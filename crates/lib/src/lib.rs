//! Support library for puzzle solutions.
//!
//! Every solution is a binary using `#[entry]` from the [prelude], which takes
//! care of loading input, running and benchmarking.

pub mod cli;
pub mod ext;
pub mod grid;
pub mod input;
pub mod math;
pub mod point;

mod macros;

#[cfg(not(prod))]
#[path = "env/tracked.rs"]
pub mod env;

#[cfg(prod)]
#[path = "env/embedded.rs"]
pub mod env;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::ext::SliceExt;
    pub use crate::grid::Grid;
    pub use crate::input::{IStr, Nl, Skip, Split, B, W};
    pub use crate::math::{gcd, lcm, lcm_all};
    pub use crate::point::{Dir, Point};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use arrayvec::ArrayString;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::ByteSlice;
    pub use log::{debug, info};
    pub use macros::entry;
}
