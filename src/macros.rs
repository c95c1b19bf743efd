//! Macros for declaring the dossier's display-label enums.

/// Generate a fieldless enum whose variants carry an upper-case display label.
///
/// The generated type derives the usual value traits plus serde, serializes
/// each variant as its label, and gets `label()`, `all()` and `Display`.
///
/// # Example
///
/// ```
/// use dossier::label_enum;
///
/// label_enum! {
///     pub enum Alert {
///         Green => "GREEN",
///         Red => "RED",
///     }
/// }
///
/// assert_eq!(Alert::Red.label(), "RED");
/// assert_eq!(Alert::all().len(), 2);
/// assert_eq!(Alert::Green.to_string(), "GREEN");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Upper-case label shown on the dossier.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Every variant, in declaration order.
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    label_enum! {
        enum TestLabel {
            First => "FIRST",
            Second => "SECOND",
            Third => "THIRD",
        }
    }

    #[test]
    fn label_returns_declared_text() {
        assert_eq!(TestLabel::First.label(), "FIRST");
        assert_eq!(TestLabel::Second.label(), "SECOND");
        assert_eq!(TestLabel::Third.label(), "THIRD");
    }

    #[test]
    fn all_preserves_declaration_order() {
        assert_eq!(
            TestLabel::all(),
            &[TestLabel::First, TestLabel::Second, TestLabel::Third]
        );
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", TestLabel::Second), "SECOND");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&TestLabel::Third).unwrap();
        assert_eq!(json, "\"THIRD\"");

        let parsed: TestLabel = serde_json::from_str("\"FIRST\"").unwrap();
        assert_eq!(parsed, TestLabel::First);
    }

    #[test]
    fn label_enum_is_copy() {
        let a = TestLabel::First;
        let b = a;
        assert_eq!(a, b);
    }
}
