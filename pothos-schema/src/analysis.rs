//! Queries over the input-type section of a document.

use crate::{InputField, InputObjectType, InputTypeRef, TypeLocation};

/// Non-primitive scalars Prisma may reference from input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialScalar {
    DateTime,
    Decimal,
    Bytes,
    Json,
    BigInt,
}

impl SpecialScalar {
    /// All special scalars, in declaration order.
    pub const ALL: [SpecialScalar; 5] = [
        SpecialScalar::DateTime,
        SpecialScalar::Decimal,
        SpecialScalar::Bytes,
        SpecialScalar::Json,
        SpecialScalar::BigInt,
    ];

    /// The Prisma type name.
    pub fn name(&self) -> &'static str {
        match self {
            SpecialScalar::DateTime => "DateTime",
            SpecialScalar::Decimal => "Decimal",
            SpecialScalar::Bytes => "Bytes",
            SpecialScalar::Json => "Json",
            SpecialScalar::BigInt => "BigInt",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Which special scalars appear anywhere in the given inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedScalars {
    used: Vec<SpecialScalar>,
}

impl UsedScalars {
    /// Scan every field of every input for scalar references.
    pub fn scan(inputs: &[InputObjectType]) -> Self {
        let mut used = Vec::new();
        let refs = inputs
            .iter()
            .flat_map(|i| &i.fields)
            .flat_map(|f| &f.input_types)
            .filter(|t| t.location == TypeLocation::Scalar);

        for t in refs {
            if let Some(scalar) = SpecialScalar::from_name(&t.type_name)
                && !used.contains(&scalar)
            {
                used.push(scalar);
            }
        }
        Self { used }
    }

    pub fn contains(&self, scalar: SpecialScalar) -> bool {
        self.used.contains(&scalar)
    }
}

fn location_rank(location: TypeLocation) -> u8 {
    match location {
        TypeLocation::InputObjectTypes => 0,
        TypeLocation::EnumTypes => 1,
        TypeLocation::Scalar => 2,
        TypeLocation::FieldRefTypes | TypeLocation::OutputObjectTypes => 3,
    }
}

/// Pick the type used to declare an input field.
///
/// Prisma lists every accepted shape (`IntFilter | Int`, `[UserWhereInput] |
/// UserWhereInput`). The richest one wins: input objects over enums over
/// scalars, lists over single values. `Null` is never selected.
pub fn main_input(field: &InputField) -> Option<&InputTypeRef> {
    field
        .input_types
        .iter()
        .filter(|t| !(t.location == TypeLocation::Scalar && t.type_name == "Null"))
        .min_by_key(|t| (location_rank(t.location), !t.is_list))
        .or_else(|| field.input_types.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_ref(name: &str, location: TypeLocation, is_list: bool) -> InputTypeRef {
        InputTypeRef {
            type_name: name.to_string(),
            location,
            is_list,
        }
    }

    fn field(types: Vec<InputTypeRef>) -> InputField {
        InputField {
            name: "f".into(),
            is_required: false,
            input_types: types,
        }
    }

    #[test]
    fn test_main_input_prefers_input_object() {
        let f = field(vec![
            type_ref("Int", TypeLocation::Scalar, false),
            type_ref("IntFilter", TypeLocation::InputObjectTypes, false),
        ]);
        assert_eq!(main_input(&f).unwrap().type_name, "IntFilter");
    }

    #[test]
    fn test_main_input_prefers_list() {
        let f = field(vec![
            type_ref("UserWhereInput", TypeLocation::InputObjectTypes, false),
            type_ref("UserWhereInput", TypeLocation::InputObjectTypes, true),
        ]);
        assert!(main_input(&f).unwrap().is_list);
    }

    #[test]
    fn test_main_input_skips_null() {
        let f = field(vec![
            type_ref("Null", TypeLocation::Scalar, false),
            type_ref("String", TypeLocation::Scalar, false),
        ]);
        assert_eq!(main_input(&f).unwrap().type_name, "String");
    }

    #[test]
    fn test_main_input_enum_over_scalar() {
        let f = field(vec![
            type_ref("String", TypeLocation::Scalar, false),
            type_ref("Role", TypeLocation::EnumTypes, false),
        ]);
        assert_eq!(main_input(&f).unwrap().type_name, "Role");
    }

    #[test]
    fn test_main_input_only_null_falls_back() {
        let f = field(vec![type_ref("Null", TypeLocation::Scalar, false)]);
        assert_eq!(main_input(&f).unwrap().type_name, "Null");
        assert!(main_input(&field(vec![])).is_none());
    }

    #[test]
    fn test_used_scalars_scan() {
        let inputs = vec![InputObjectType {
            name: "PostWhereInput".into(),
            fields: vec![
                field(vec![type_ref("DateTime", TypeLocation::Scalar, false)]),
                field(vec![type_ref("Json", TypeLocation::Scalar, true)]),
                field(vec![type_ref("Decimal", TypeLocation::EnumTypes, false)]),
            ],
        }];
        let used = UsedScalars::scan(&inputs);

        assert!(used.contains(SpecialScalar::DateTime));
        assert!(used.contains(SpecialScalar::Json));
        assert!(!used.contains(SpecialScalar::Decimal));
        assert!(!used.contains(SpecialScalar::BigInt));
    }
}
