//! Enum-tagged sum types over existing types.
//!
//! [`evariant!`](crate::evariant!) takes a list of types, the alternatives, and declares next to
//! them:
//! - `V`, an enum with one tuple variant per alternative, named after it.
//! - `E`, a fieldless enum with identically named variants, to compare and store the kind of a
//!   `V` without borrowing it.
//! - `enum_of(&V) -> E`.
//! - `From<Alt> for V` for every alternative and typed access through [`Alternative`].
//!
//! The macro is meant to be invoked inside a module dedicated to the sum type, so that the
//! generated names read as `event::V` and `event::E`.


/// Typed access to one alternative of a sum type declared by [`evariant!`](crate::evariant!).
pub trait Alternative<V>: Sized {
    /// Returns the alternative if `v` currently holds it.
    fn get(v: &V) -> Option<&Self>;

    fn get_mut(v: &mut V) -> Option<&mut Self>;

    /// Moves the alternative out of `v`, or hands `v` back if it holds another one.
    fn into_alt(v: V) -> Result<Self, V>;
}

/// Declares a sum type `V` over the listed alternative types, a parallel kind enum `E` and
/// `enum_of`. Attributes before the list apply to `V`.
///
/// # Examples
/// ```
/// mod event {
///     #[derive(Debug, PartialEq)]
///     pub struct Click;
///     #[derive(Debug, PartialEq)]
///     pub struct Key {
///         pub code: u32,
///     }
///
///     meadow::evariant!(#[derive(Debug, PartialEq)] Click, Key);
/// }
///
/// let v = event::V::from(event::Key { code: 7 });
/// assert_eq!(event::enum_of(&v), event::E::Key);
/// match v {
///     event::V::Click(_) => unreachable!(),
///     event::V::Key(key) => assert_eq!(key.code, 7),
/// }
/// ```
#[macro_export]
macro_rules! evariant {
    ($(#[$meta:meta])* $($alt:ident),+ $(,)?) => {
        $(#[$meta])*
        pub enum V {
            $($alt($alt),)+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum E {
            $($alt,)+
        }

        impl E {
            /// Every kind, in declaration order.
            pub const ALL: &'static [E] = &[$(E::$alt,)+];
        }

        /// Returns the kind of alternative `v` currently holds.
        #[allow(dead_code)]
        pub fn enum_of(v: &V) -> E {
            match v {
                $(V::$alt(_) => E::$alt,)+
            }
        }

        #[allow(dead_code)]
        impl V {
            pub fn kind(&self) -> E {
                enum_of(self)
            }

            pub fn get<A: $crate::evariant::Alternative<V>>(&self) -> Option<&A> {
                A::get(self)
            }

            pub fn get_mut<A: $crate::evariant::Alternative<V>>(&mut self) -> Option<&mut A> {
                A::get_mut(self)
            }

            pub fn into_alt<A: $crate::evariant::Alternative<V>>(self) -> Result<A, V> {
                A::into_alt(self)
            }
        }

        $(
            impl From<$alt> for V {
                fn from(value: $alt) -> V {
                    V::$alt(value)
                }
            }

            impl $crate::evariant::Alternative<V> for $alt {
                #[allow(unreachable_patterns)]
                fn get(v: &V) -> Option<&$alt> {
                    match v {
                        V::$alt(x) => Some(x),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn get_mut(v: &mut V) -> Option<&mut $alt> {
                    match v {
                        V::$alt(x) => Some(x),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn into_alt(v: V) -> Result<$alt, V> {
                    match v {
                        V::$alt(x) => Ok(x),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}
