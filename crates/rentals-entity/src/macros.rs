//! Declarative helpers shared by the enum modules.

/// Define a closed string-backed enumeration.
///
/// Generates the enum with snake_case serde names, an `ALL` list in
/// declaration order, `as_str`, `Display`, and a case-insensitive
/// `FromStr` that rejects unknown values with a validation error.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the member's wire name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = rentals_core::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(rentals_core::AppError::validation(format!(
                        concat!("Invalid ", stringify!($name), ": '{}'. Expected one of: {}"),
                        s,
                        [$($text),+].join(", ")
                    ))),
                }
            }
        }
    };
}
