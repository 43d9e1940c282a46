//! Open-world string enums
//!
//! ARM services add values to their enumerations without bumping the API
//! version. Every enum declared with [`open_enum!`] therefore keeps the values
//! it knows as variants and carries anything else verbatim in `Other`.
//!
//! ```ignore
//! open_enum! {
//!     pub enum CommandState {
//!         Accepted => "Accepted",
//!         Running => "Running",
//!     }
//! }
//!
//! assert_eq!(CommandState::parse("RUNNING"), CommandState::Running);
//! assert_eq!(CommandState::parse("Paused").as_str(), "Paused");
//! ```

/// Declares an open-world string enum.
///
/// Generates the enum (with a trailing `Other(String)` variant),
/// `possible_values`, a case-insensitive `parse`, `as_str`, `is_known`,
/// `FromStr` with an infallible error, `Display`, `From<&str>` and the serde
/// hooks. Deserialization only fails when the JSON value is not a string.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this client does not know about, kept verbatim
            Other(String),
        }

        impl $name {
            /// Canonical wire values in declaration order
            pub fn possible_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            /// Parse a wire value, ignoring case. Unknown values are kept as `Other`.
            pub fn parse(input: &str) -> Self {
                let lowered = input.to_lowercase();
                $(
                    if lowered == $value.to_lowercase() {
                        return Self::$variant;
                    }
                )+
                Self::Other(input.to_string())
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// False for values carried through `Other`
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(input: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::parse(input))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let decoded = <String as ::serde::Deserialize>::deserialize(deserializer).map_err(|e| {
                    <D::Error as ::serde::de::Error>::custom(format!("unmarshaling: {}", e))
                })?;
                Ok(Self::parse(&decoded))
            }
        }
    };
}

pub(crate) use open_enum;

#[cfg(test)]
mod tests {
    open_enum! {
        pub enum Sample {
            Running => "Running",
            FailedToStart => "FailedToStart",
            Upper => "CUTOVER_START",
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Sample::parse("Running"), Sample::Running);
        assert_eq!(Sample::parse("RUNNING"), Sample::Running);
        assert_eq!(Sample::parse("running"), Sample::Running);
        assert_eq!(Sample::parse("cutover_start"), Sample::Upper);
    }

    #[test]
    fn unknown_values_pass_through() {
        let parsed = Sample::parse("Bogus");
        assert_eq!(parsed, Sample::Other("Bogus".to_string()));
        assert_eq!(parsed.as_str(), "Bogus");
        assert!(!parsed.is_known());
        assert_eq!("Bogus".parse::<Sample>().unwrap().to_string(), "Bogus");
    }

    #[test]
    fn possible_values_keep_declaration_order() {
        assert_eq!(Sample::possible_values(), &["Running", "FailedToStart", "CUTOVER_START"]);
    }

    #[test]
    fn serde_hooks_use_canonical_values() {
        let decoded: Sample = serde_json::from_str("\"failedtostart\"").unwrap();
        assert_eq!(decoded, Sample::FailedToStart);
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"FailedToStart\"");

        let err = serde_json::from_str::<Sample>("42").unwrap_err();
        assert!(err.to_string().starts_with("unmarshaling:"));
    }
}
