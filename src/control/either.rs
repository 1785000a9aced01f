//! N-way discriminated unions, from two to eight cases.
//!
//! `Either2<A, B>` through `Either8<A, B, C, D, E, F, G, H>` each hold exactly
//! one populated slot. The leading slots are named `First`, `Second`, ...,
//! `Seventh`; the final slot is always `Last`, whatever the arity.
//!
//! All arities are produced by a single macro, so every case analysis
//! (`index`, `is_*`, slot extraction, `fold`) dispatches on the enum tag in
//! exactly the same way. The arities are distinct types: there is no
//! conversion between, say, `Either2<A, B>` and `Either3<A, B, C>`.
//!
//! `Either2` additionally takes part in the
//! [`Outcome`](crate::combinator::Outcome) contract, with `First` as the
//! failure channel and `Last` as the success channel, so it gets the complete
//! combinator surface.
//!
//! # Examples
//!
//! ```rust
//! use lambars_adt::control::Either3;
//!
//! let value: Either3<i32, String, bool> = Either3::Second("hello".to_string());
//! assert_eq!(value.index(), 1);
//!
//! let described = value.fold(
//!     |number| format!("number {number}"),
//!     |text| format!("text {text}"),
//!     |flag| format!("flag {flag}"),
//! );
//! assert_eq!(described, "text hello");
//! ```

macro_rules! define_either {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal;
        $($variant:ident($type_param:ident) = $index:literal),+;
        Last($last_param:ident) = $last_index:literal
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub enum $name<$($type_param,)+ $last_param> {
                $(
                    #[doc = concat!("Slot ", stringify!($index), ".")]
                    $variant($type_param),
                )+
                /// The final slot.
                Last($last_param),
            }

            impl<$($type_param,)+ $last_param> $name<$($type_param,)+ $last_param> {
                /// The number of slots of this union.
                pub const ARITY: usize = $arity;

                /// Returns the 0-based index of the active slot.
                #[inline]
                pub const fn index(&self) -> usize {
                    match self {
                        $(Self::$variant(_) => $index,)+
                        Self::Last(_) => $last_index,
                    }
                }

                $(
                    #[doc = concat!("Returns `true` if the `", stringify!($variant), "` slot is active.")]
                    #[inline]
                    pub const fn [<is_ $variant:lower>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    #[doc = concat!("Returns the `", stringify!($variant), "` value, consuming the union.")]
                    #[inline]
                    pub fn [<$variant:lower>](self) -> Option<$type_param> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }

                    #[doc = concat!("Returns a reference to the `", stringify!($variant), "` value.")]
                    #[inline]
                    pub const fn [<$variant:lower _ref>](&self) -> Option<&$type_param> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                )+

                /// Returns `true` if the `Last` slot is active.
                #[inline]
                pub const fn is_last(&self) -> bool {
                    matches!(self, Self::Last(_))
                }

                /// Returns the `Last` value, consuming the union.
                #[inline]
                pub fn last(self) -> Option<$last_param> {
                    match self {
                        Self::Last(value) => Some(value),
                        _ => None,
                    }
                }

                /// Returns a reference to the `Last` value.
                #[inline]
                pub const fn last_ref(&self) -> Option<&$last_param> {
                    match self {
                        Self::Last(value) => Some(value),
                        _ => None,
                    }
                }

                /// Eliminates the union with one function per slot.
                ///
                /// Exactly one function runs: the one matching the active slot.
                #[allow(clippy::too_many_arguments)]
                #[inline]
                pub fn fold<R>(
                    self,
                    $([<on_ $variant:lower>]: impl FnOnce($type_param) -> R,)+
                    on_last: impl FnOnce($last_param) -> R,
                ) -> R {
                    match self {
                        $(Self::$variant(value) => [<on_ $variant:lower>](value),)+
                        Self::Last(value) => on_last(value),
                    }
                }

                /// Transforms the `Last` value; other slots pass through.
                #[inline]
                pub fn map_last<U, Function>(
                    self,
                    function: Function,
                ) -> $name<$($type_param,)+ U>
                where
                    Function: FnOnce($last_param) -> U,
                {
                    match self {
                        $(Self::$variant(value) => $name::$variant(value),)+
                        Self::Last(value) => $name::Last(function(value)),
                    }
                }

                /// Chains on the `Last` value; other slots short-circuit and
                /// `function` is not called.
                #[inline]
                pub fn bind_last<U, Function>(
                    self,
                    function: Function,
                ) -> $name<$($type_param,)+ U>
                where
                    Function: FnOnce($last_param) -> $name<$($type_param,)+ U>,
                {
                    match self {
                        $(Self::$variant(value) => $name::$variant(value),)+
                        Self::Last(value) => function(value),
                    }
                }
            }

            #[cfg(feature = "async")]
            impl<$($type_param,)+ $last_param> crate::effect::ToTask
                for $name<$($type_param,)+ $last_param>
            where
                $($type_param: Send + 'static,)+
                $last_param: Send + 'static,
            {
            }
        }
    };
}

define_either! {
    /// A two-case union: `First` or `Last`.
    ///
    /// As an outcome, `Last` is the success and `First` the failure. The
    /// inherent `fold` is positional and takes `(on_first, on_last)`, so it
    /// handles the failure first. Call
    /// [`Combinators::fold`](crate::combinator::Combinators::fold) for the
    /// `(on_success, on_failure)` order shared with the other outcome types.
    ///
    /// ```rust
    /// use lambars_adt::combinator::Combinators;
    /// use lambars_adt::control::Either2;
    ///
    /// let value: Either2<&str, i32> = Either2::Last(2);
    /// assert_eq!(value.fold(|_| 0, |number| number * 10), 20);
    /// assert_eq!(Combinators::fold(value, |number| number * 10, |_| 0), 20);
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::Either2;
    ///
    /// let value: Either2<String, i32> = Either2::Last(42);
    /// assert!(value.is_last());
    /// assert_eq!(value.map_last(|number| number * 2), Either2::Last(84));
    /// ```
    Either2, 2;
    First(A) = 0;
    Last(B) = 1
}

define_either! {
    /// A three-case union.
    Either3, 3;
    First(A) = 0, Second(B) = 1;
    Last(C) = 2
}

define_either! {
    /// A four-case union.
    Either4, 4;
    First(A) = 0, Second(B) = 1, Third(C) = 2;
    Last(D) = 3
}

define_either! {
    /// A five-case union.
    Either5, 5;
    First(A) = 0, Second(B) = 1, Third(C) = 2, Fourth(D) = 3;
    Last(E) = 4
}

define_either! {
    /// A six-case union.
    Either6, 6;
    First(A) = 0, Second(B) = 1, Third(C) = 2, Fourth(D) = 3, Fifth(E) = 4;
    Last(F) = 5
}

define_either! {
    /// A seven-case union.
    Either7, 7;
    First(A) = 0, Second(B) = 1, Third(C) = 2, Fourth(D) = 3, Fifth(E) = 4,
    Sixth(F) = 5;
    Last(G) = 6
}

define_either! {
    /// An eight-case union.
    Either8, 8;
    First(A) = 0, Second(B) = 1, Third(C) = 2, Fourth(D) = 3, Fifth(E) = 4,
    Sixth(F) = 5, Seventh(G) = 6;
    Last(H) = 7
}

// =============================================================================
// Two-case Specific Operations
// =============================================================================

impl<A, B> Either2<A, B> {
    /// Swaps the two slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_adt::control::Either2;
    ///
    /// let value: Either2<i32, &str> = Either2::First(1);
    /// assert_eq!(value.swap(), Either2::Last(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either2<B, A> {
        match self {
            Self::First(value) => Either2::Last(value),
            Self::Last(value) => Either2::First(value),
        }
    }

    /// Converts into a `Result`, reading `Last` as success.
    #[inline]
    pub fn into_result(self) -> Result<B, A> {
        match self {
            Self::First(value) => Err(value),
            Self::Last(value) => Ok(value),
        }
    }

    /// Transforms the `First` value; `Last` passes through.
    #[inline]
    pub fn map_first<U, Function>(self, function: Function) -> Either2<U, B>
    where
        Function: FnOnce(A) -> U,
    {
        match self {
            Self::First(value) => Either2::First(function(value)),
            Self::Last(value) => Either2::Last(value),
        }
    }
}

impl<A, B> From<Result<B, A>> for Either2<A, B> {
    /// `Ok` becomes `Last` and `Err` becomes `First`.
    #[inline]
    fn from(result: Result<B, A>) -> Self {
        match result {
            Ok(value) => Self::Last(value),
            Err(error) => Self::First(error),
        }
    }
}

impl<A, B> From<Either2<A, B>> for Result<B, A> {
    #[inline]
    fn from(either: Either2<A, B>) -> Self {
        either.into_result()
    }
}
