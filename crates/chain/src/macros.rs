//! Internal macros for declaring built-in attachers.

// ============================================================================
// TYPE CHECK ATTACHERS
// ============================================================================

/// Generates chain methods that attach an unparameterized predicate.
///
/// ```rust,ignore
/// type_check_attachers! {
///     /// Attaches a check that the value is a string.
///     string => rules::is_string;
/// }
/// ```
macro_rules! type_check_attachers {
    ($( $(#[$meta:meta])* $name:ident => $rule:path; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Self {
                self.attach(|value, _| $rule(value))
            }
        )*
    };
}
