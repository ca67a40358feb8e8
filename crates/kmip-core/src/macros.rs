//! Declaration helper for KMIP enumerations.

/// Declares a `#[repr(u32)]` KMIP enumeration with wire conversions.
///
/// Generates `from_u32`, `to_u32` and an `ALL` slice listing every variant in
/// declaration order.
macro_rules! kmip_enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every variant, in wire-value order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Convert from wire format (u32).
            pub fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Convert to wire format (u32).
            pub fn to_u32(self) -> u32 {
                self as u32
            }
        }
    };
}
