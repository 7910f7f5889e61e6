//! Macros for declaring state enums.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// Variants must be unit variants. Besides the `State` impl the macro
/// generates:
/// - `ALL`, every variant in declaration order
/// - `Display`, printing the variant name
///
/// # Example
///
/// ```
/// use statecraft::core::State;
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Order {
///         Open,
///         Paid,
///         Shipped,
///     }
///     final: [Shipped]
/// }
///
/// assert_eq!(Order::ALL.len(), 3);
/// assert_eq!(Order::Paid.to_string(), "Paid");
/// assert!(Order::Shipped.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Ticket {
            Open,
            Assigned,
            Closed,
        }
        final: [Closed]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Ticket::Open.name(), "Open");
        assert!(!Ticket::Open.is_final());
        assert!(!Ticket::Assigned.is_final());
        assert!(Ticket::Closed.is_final());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            Ticket::ALL,
            &[Ticket::Open, Ticket::Assigned, Ticket::Closed]
        );
    }

    #[test]
    fn display_prints_the_name() {
        assert_eq!(Ticket::Assigned.to_string(), "Assigned");
        assert_eq!(format!("{}", Ticket::Closed), "Closed");
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            pub enum Phase {
                One,
                Two,
            }
        }

        assert!(Phase::ALL.iter().all(|p| !p.is_final()));
    }
}
