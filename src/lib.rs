//! # Tidepool
//!
//! Optional values and logged computations, composed without null checks or
//! side-channel logging.
//!
//! - [`Maybe<T>`](Maybe): a value or its absence. Every transformation skips
//!   its closure once the value is gone.
//! - [`Writer<T, W>`](Writer): a value plus the ordered log of entries
//!   produced while computing it. Binding concatenates logs, earlier first.
//!
//! Both types obey the functor and monad laws, come with a method-chaining
//! surface and an equivalent set of free functions ([`maybe`], [`writer`]),
//! and are immutable: every combinator consumes its input and returns a new
//! value.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidepool::{Maybe, Writer};
//!
//! fn find_user(id: u32) -> Maybe<String> {
//!     if id == 7 { Maybe::some("ada".to_string()) } else { Maybe::none() }
//! }
//!
//! fn greet(name: String) -> Writer<String, String> {
//!     Writer::tell(format!("greeting {}", name))
//!         .map(move |()| format!("hello, {}", name))
//! }
//!
//! let greeting = find_user(7)
//!     .map(greet)
//!     .fold(|| Writer::new("nobody".to_string(), vec!["lookup failed".to_string()]), |w| w);
//!
//! assert_eq!(greeting.value(), "hello, ada");
//! assert_eq!(greeting.log(), ["greeting ada"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: replay Writer logs as `tracing` events (`tracing::WriterTracingExt`).
//! - `proptest`: `Arbitrary` impls for [`Maybe`] and [`Writer`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod maybe;
pub mod monoid;
pub mod semigroup;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod writer;

// Re-exports
pub use maybe::Maybe;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use writer::Writer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::maybe::Maybe;
    pub use crate::monoid::Monoid;
    pub use crate::semigroup::Semigroup;
    #[cfg(feature = "tracing")]
    pub use crate::tracing::WriterTracingExt;
    pub use crate::writer::Writer;
}
