//! Composition of slice reducers into one root reducer.
//!
//! [`combine_reducers!`](crate::combine_reducers) declares the root state
//! struct (one field per slice) together with a zero-sized root reducer type.
//! The root reducer:
//!
//! - hands every action to every slice reducer, in declaration order
//! - builds a fresh root value on every call, even if no slice changed
//! - passes `None` to each slice reducer while the root state is `None`
//! - fails as a whole as soon as one slice reducer fails; slice errors are
//!   converted into the declared root error with `From`

/// Declare a root state struct and the reducer that owns it.
///
/// ```
/// use std::convert::Infallible;
/// use slice_store::{combine_reducers, pure, Reducer};
///
/// #[derive(Debug)]
/// pub enum Action {
///     Increment,
///     Rename(String),
/// }
///
/// fn count(state: Option<u32>, action: &Action) -> u32 {
///     let state = state.unwrap_or_default();
///     match action {
///         Action::Increment => state + 1,
///         _ => state,
///     }
/// }
///
/// fn name(state: Option<String>, action: &Action) -> String {
///     match action {
///         Action::Rename(name) => name.clone(),
///         _ => state.unwrap_or_default(),
///     }
/// }
///
/// combine_reducers! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Root {
///         count: u32 => pure(count),
///         name: String => pure(name),
///     }
///     pub reducer RootReducer(Action) -> Infallible;
/// }
///
/// let root = RootReducer.reduce(None, &Action::Increment).unwrap();
/// assert_eq!(root, Root { count: 1, name: String::new() });
/// assert_eq!(Root::SLICES, ["count", "name"]);
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$state_meta:meta])*
        $state_vis:vis struct $state:ident {
            $(
                $(#[$slice_meta:meta])*
                $slice:ident : $slice_ty:ty => $slice_reducer:expr
            ),+ $(,)?
        }
        $(#[$reducer_meta:meta])*
        $reducer_vis:vis reducer $reducer:ident ( $action:ty ) -> $error:ty;
    ) => {
        $(#[$state_meta])*
        $state_vis struct $state {
            $(
                $(#[$slice_meta])*
                pub $slice: $slice_ty,
            )+
        }

        impl $state {
            /// Slice names, in the order their reducers run.
            pub const SLICES: &'static [&'static str] = &[$(stringify!($slice)),+];
        }

        $(#[$reducer_meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $reducer_vis struct $reducer;

        impl $crate::Reducer<$state, $action> for $reducer {
            type Error = $error;

            fn reduce(
                &self,
                state: ::std::option::Option<$state>,
                action: &$action,
            ) -> ::std::result::Result<$state, $error> {
                // Field names, not locals: a slice may share its name with its reducer fn.
                struct __SliceParts {
                    $( $slice: ::std::option::Option<$slice_ty>, )+
                }

                let parts = match state {
                    ::std::option::Option::Some(previous) => __SliceParts {
                        $( $slice: ::std::option::Option::Some(previous.$slice), )+
                    },
                    ::std::option::Option::None => __SliceParts {
                        $( $slice: ::std::option::Option::None, )+
                    },
                };
                ::std::result::Result::Ok($state {
                    $(
                        $slice: <_ as $crate::Reducer<$slice_ty, $action>>::reduce(
                            &$slice_reducer,
                            parts.$slice,
                            action,
                        )?,
                    )+
                })
            }
        }
    };
}
