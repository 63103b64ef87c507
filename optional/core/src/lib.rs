//! [`Optional<T>`], a value-semantic container holding zero or one `T`.
//!
//! The container is either *present* (holds a `T`) or *absent*. It never
//! changes state after construction; every transformation builds a new
//! container.
//!
//! # Nil detection
//!
//! Rust values have no universal nil, so [`Optional::new`] never inspects its
//! argument and always produces a present container. This includes raw
//! pointers: a null `*const T` passed to [`Optional::new`] is still a value of
//! type `*const T`, and the container is present.
//!
//! The one case where presence depends on the wrapped value is an *interface*
//! value that may be nil. In Rust that is an `Option` of a trait-object
//! pointer, e.g. `Option<Box<dyn Trait>>`, and it enters through
//! [`Optional::from_interface`]:
//!
//! - `None` is the nil interface value and yields an absent container.
//! - `Some(p)` yields a present container, even if `p` points at a concrete
//!   value whose own internal pointer is null.
//!
//! ```
//! use optional::Optional;
//!
//! trait Shape {
//!     fn sides(&self) -> Option<u32>;
//! }
//!
//! struct Unknown {
//!     sides: Option<Box<u32>>,
//! }
//!
//! impl Shape for Unknown {
//!     fn sides(&self) -> Option<u32> {
//!         self.sides.as_deref().copied()
//!     }
//! }
//!
//! let nil: Option<Box<dyn Shape>> = None;
//! assert!(Optional::from_interface(nil).is_nil());
//!
//! let boxed: Box<dyn Shape> = Box::new(Unknown { sides: None });
//! assert!(!Optional::from_interface(Some(boxed)).is_nil());
//! ```

use std::ops::Deref;

pub mod error;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::AbsentError;
#[cfg(feature = "json")]
pub use error::JsonError;

/// A container that either holds a value of type `T` or holds nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    wrapped: Option<T>,
}

impl<T> Optional<T> {
    /// Wraps `value` in a present container.
    ///
    /// The value is not inspected. For a possibly-nil interface value, use
    /// [`Optional::from_interface`].
    pub const fn new(value: T) -> Self {
        Self {
            wrapped: Some(value),
        }
    }

    /// Returns an absent container.
    pub const fn nil() -> Self {
        Self { wrapped: None }
    }

    /// Builds a container from a nullable reference, copying the referenced value.
    ///
    /// The container owns its copy, so later changes to the referenced storage
    /// are not observed through it.
    pub fn from_ptr(ptr: Option<&T>) -> Self
    where
        T: Clone,
    {
        match ptr {
            Some(value) => Self::new(value.clone()),
            None => Self::nil(),
        }
    }

    /// Builds a container from a raw pointer, copying the pointee.
    ///
    /// # Safety
    /// If `ptr` is non-null, it must be properly aligned and point to an
    /// initialized `T` that is valid for reads.
    pub unsafe fn from_raw(ptr: *const T) -> Self
    where
        T: Clone,
    {
        // SAFETY: the caller upholds the requirements of `<*const T>::as_ref`.
        Self::from_ptr(unsafe { ptr.as_ref() })
    }

    /// Returns true if the container holds no value.
    pub const fn is_nil(&self) -> bool {
        self.wrapped.is_none()
    }

    /// Returns true if the container holds a value.
    pub const fn is_present(&self) -> bool {
        self.wrapped.is_some()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics if the container is absent. Call sites that cannot prove presence
    /// should use [`Optional::value`], [`Optional::try_value`] or one of the
    /// defaulting accessors instead.
    #[track_caller]
    pub fn force_value(self) -> T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the contained value, or [`AbsentError`] if there is none.
    pub fn try_value(self) -> Result<T, AbsentError> {
        self.wrapped.ok_or(AbsentError)
    }

    /// Returns the contained value and `true`, or `T::default()` and `false`
    /// if the container is absent.
    ///
    /// Types without a zero value, such as `Box<dyn Trait>`, cannot use this.
    /// Read them through [`Optional::try_value`] or [`Optional::get`].
    pub fn value(self) -> (T, bool)
    where
        T: Default,
    {
        match self.wrapped {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Returns the contained value, or `default` if the container is absent.
    ///
    /// `default` is an ordinary argument, so it is evaluated before the call
    /// whether or not it ends up being used. When computing it is expensive or
    /// has side effects, use [`Optional::value_or_lazy_default`].
    pub fn value_or_default(self, default: T) -> T {
        match self.wrapped {
            Some(value) => value,
            None => default,
        }
    }

    /// Returns the contained value, or the result of `f` if the container is
    /// absent. `f` is only called when the container is absent.
    pub fn value_or_lazy_default<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.wrapped {
            Some(value) => value,
            None => f(),
        }
    }

    /// Transforms the contained value with `f`.
    ///
    /// `f` is never called for an absent container, so it may be partial over
    /// values that only an absent container would otherwise produce.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.wrapped {
            Some(value) => Optional::new(f(value)),
            None => Optional::nil(),
        }
    }

    /// Borrows the contained value, producing an `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            wrapped: self.wrapped.as_ref(),
        }
    }

    /// Returns a reference to the contained value, if any.
    pub const fn get(&self) -> Option<&T> {
        self.wrapped.as_ref()
    }

    /// Converts into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.wrapped
    }
}

impl<P> Optional<P>
where
    P: Deref,
{
    /// Wraps an interface value that may be nil.
    ///
    /// This is the conversion to use for trait-object pointers
    /// (`Box<dyn Trait>`, `Rc<dyn Trait>`, `&dyn Trait`, ...). `None` is the nil
    /// interface value and produces an absent container. `Some(p)` always
    /// produces a present container, even if the concrete value behind `p`
    /// carries a null pointer of its own.
    ///
    /// The container itself behaves exactly like `From<Option<P>>`; the
    /// `Deref` bound only keeps the name honest at call sites and does not stop
    /// other smart pointers such as `String` or `Vec<T>` from being passed.
    pub fn from_interface(value: Option<P>) -> Self {
        Self { wrapped: value }
    }
}

impl<T> Optional<Optional<T>> {
    /// Collapses one level of nesting.
    ///
    /// The result is present only if both the outer and the inner container
    /// are present. Deeper nesting is left untouched.
    pub fn compact(self) -> Optional<T> {
        match self.wrapped {
            Some(inner) => inner,
            None => Optional::nil(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { wrapped: value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.wrapped
    }
}
