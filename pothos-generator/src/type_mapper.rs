//! Prisma type names to Pothos type references.

/// Scalars Pothos declares itself and exposes through `t.string(..)` style
/// shorthands on input field builders.
const DEFAULT_SCALARS: [(&str, &str); 4] = [
    ("String", "string"),
    ("Int", "int"),
    ("Float", "float"),
    ("Boolean", "boolean"),
];

/// Maps Prisma type names onto the names used in generated Pothos code.
pub struct PothosTypeMapper;

impl PothosTypeMapper {
    /// Input field builder shorthand for a built-in scalar (`Int` -> `int`).
    pub fn input_shorthand(type_name: &str) -> Option<&'static str> {
        DEFAULT_SCALARS
            .iter()
            .find(|(prisma, _)| *prisma == type_name)
            .map(|(_, method)| *method)
    }

    /// Whether Pothos ships this scalar out of the box.
    pub fn is_default_scalar(type_name: &str) -> bool {
        Self::input_shorthand(type_name).is_some()
    }

    /// Name of the generated declaration for a type referenced from inputs.
    ///
    /// `BigInt` is a JavaScript global, so its scalar is declared as
    /// `Bigint`. `Unchecked` variants collapse onto their checked twin.
    pub fn input_type_name(type_name: &str) -> String {
        if type_name == "BigInt" {
            return "Bigint".to_string();
        }
        strip_unchecked(type_name)
    }
}

/// Drop the `Unchecked` marker from an input type name.
pub fn strip_unchecked(name: &str) -> String {
    name.replace("Unchecked", "")
}
