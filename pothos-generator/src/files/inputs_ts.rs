//! `inputs.ts`: scalars, enums and input types used by resolver arguments.

use std::path::{Path, PathBuf};

use pothos_crud_config::Config;
use pothos_crud_core::GeneratedFile;
use pothos_crud_schema::{Document, SpecialScalar, UsedScalars};

use crate::{
    ast::{ArrowFn, Const, Import, JsArray, JsObject, MethodChain, property_key, single_quote},
    code_file::{CodeFile, RawCode},
    inputs::{InputDecl, InputFieldDecl, InputFieldType, InputSelector},
};

/// Name of the placeholder scalar used by inputs left without fields.
pub const NEVER: &str = "NEVER";

const UTIL_TYPES: &str = r#"type Filters = {
  string: Prisma.StringFieldUpdateOperationsInput;
  nullableString: Prisma.NullableStringFieldUpdateOperationsInput;
  dateTime: Prisma.DateTimeFieldUpdateOperationsInput;
  nullableDateTime: Prisma.NullableDateTimeFieldUpdateOperationsInput;
  int: Prisma.IntFieldUpdateOperationsInput;
  nullableInt: Prisma.NullableIntFieldUpdateOperationsInput;
  bool: Prisma.BoolFieldUpdateOperationsInput;
  nullableBool: Prisma.NullableBoolFieldUpdateOperationsInput;
  bigInt: Prisma.BigIntFieldUpdateOperationsInput;
  nullableBigInt: Prisma.NullableBigIntFieldUpdateOperationsInput;
  bytes: Prisma.BytesFieldUpdateOperationsInput;
  nullableBytes: Prisma.NullableBytesFieldUpdateOperationsInput;
  float: Prisma.FloatFieldUpdateOperationsInput;
  nullableFloat: Prisma.NullableFloatFieldUpdateOperationsInput;
  decimal: Prisma.DecimalFieldUpdateOperationsInput;
  nullableDecimal: Prisma.NullableDecimalFieldUpdateOperationsInput;
};

type ApplyFilters<InputField> = {
  [F in keyof Filters]: 0 extends 1 & Filters[F]
    ? never
    : Filters[F] extends InputField
      ? Filters[F]
      : never;
}[keyof Filters];

type PrismaUpdateOperationsInputFilter<T extends object> = {
  [K in keyof T]: [ApplyFilters<T[K]>] extends [never] ? T[K] : ApplyFilters<T[K]>;
};"#;

/// A custom scalar declaration.
struct ScalarTemplate {
    /// Exported binding (`BigInt` is a JavaScript global, so it becomes `Bigint`).
    export: &'static str,
    graphql: &'static str,
    description: Option<&'static str>,
    parse_value: Option<&'static str>,
    serialize: &'static str,
}

impl ScalarTemplate {
    fn of(scalar: SpecialScalar) -> Self {
        match scalar {
            SpecialScalar::DateTime => Self {
                export: "DateTime",
                graphql: "DateTime",
                description: None,
                parse_value: Some("new Date(value as string)"),
                serialize: "(value instanceof Date ? value.toISOString() : value)",
            },
            SpecialScalar::Decimal => Self {
                export: "Decimal",
                graphql: "Decimal",
                description: None,
                parse_value: Some("new Prisma.Decimal(value as string)"),
                serialize: "value.toString()",
            },
            SpecialScalar::Bytes => Self {
                export: "Bytes",
                graphql: "Bytes",
                description: None,
                parse_value: Some("Buffer.from((value as { data: number[] }).data)"),
                serialize: "({ type: 'Buffer' as const, data: [...value] })",
            },
            SpecialScalar::Json => Self {
                export: "Json",
                graphql: "Json",
                description: None,
                parse_value: Some("value"),
                serialize: "value",
            },
            SpecialScalar::BigInt => Self {
                export: "Bigint",
                graphql: "BigInt",
                description: None,
                parse_value: Some("BigInt(value as string)"),
                serialize: "value.toString()",
            },
        }
    }

    fn never() -> Self {
        Self {
            export: NEVER,
            graphql: NEVER,
            description: Some("Never fill this, it only exists for inputs without fields"),
            parse_value: None,
            serialize: "value",
        }
    }

    fn declaration(&self) -> Const {
        let mut options = JsObject::new();
        if let Some(description) = self.description {
            options = options.string("description", description);
        }
        if let Some(parse) = self.parse_value {
            options = options.arrow_fn("parseValue", ArrowFn::new("value").expr(parse));
        }
        let options = options.arrow_fn("serialize", ArrowFn::new("value").expr(self.serialize));

        Const::new(
            self.export,
            format!(
                "builder.scalarType({}, {})",
                single_quote(self.graphql),
                options.build()
            ),
        )
    }
}

/// The `inputs.ts` module.
pub struct InputsTs<'a> {
    document: &'a Document,
    config: &'a Config,
}

impl<'a> InputsTs<'a> {
    pub fn new(document: &'a Document, config: &'a Config) -> Self {
        Self { document, config }
    }

    fn scalars(&self, needs_never: bool) -> Vec<Const> {
        let used = UsedScalars::scan(self.document.input_types());
        let inputs = &self.config.inputs;

        let mut templates: Vec<ScalarTemplate> = SpecialScalar::ALL
            .into_iter()
            .filter(|scalar| used.contains(*scalar) && !inputs.excludes_scalar(scalar.name()))
            .map(ScalarTemplate::of)
            .collect();
        if needs_never && !inputs.excludes_scalar(NEVER) {
            templates.push(ScalarTemplate::never());
        }

        templates.iter().map(ScalarTemplate::declaration).collect()
    }

    fn enums(&self) -> Vec<Const> {
        self.document
            .enums()
            .into_iter()
            .map(|(name, values)| {
                let options = JsObject::new().array("values", JsArray::from_strings(values).as_const());
                Const::new(
                    name,
                    format!("builder.enumType({}, {})", single_quote(name), options.build()),
                )
            })
            .collect()
    }
}

fn field_line(field: &InputFieldDecl) -> String {
    let key = property_key(&field.name);
    let options = JsObject::new().bool("required", field.required);
    match &field.ty {
        InputFieldType::Shorthand(method) => {
            format!("{key}: t.{method}({}),", options.build_inline())
        }
        InputFieldType::Field { type_name, list } => {
            let ty = if *list {
                JsArray::new().raw(type_name).build()
            } else {
                type_name.clone()
            };
            format!("{key}: t.field({}),", options.raw("type", ty).build_inline())
        }
    }
}

fn input_declaration(input: &InputDecl) -> Const {
    let lines: Vec<String> = if input.is_empty() {
        vec![format!("_: t.field({{ type: {NEVER} }}),")]
    } else {
        input.fields.iter().map(field_line).collect()
    };
    let fields = format!(
        "({{\n{}\n}})",
        lines
            .iter()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    let options = JsObject::new().arrow_fn("fields", ArrowFn::new("t").expr(fields));

    let value = MethodChain::new("builder")
        .call_generic(
            "inputRef",
            format!(
                "PrismaUpdateOperationsInputFilter<Prisma.{}>, false",
                input.prisma_name
            ),
            vec![single_quote(&input.name)],
        )
        .call("implement", options.build())
        .build_inline();
    Const::new(&input.name, value)
}

impl GeneratedFile for InputsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("inputs.ts")
    }

    fn render(&self) -> String {
        let inputs = InputSelector::new(self.document, self.config).select();
        let needs_never = inputs.iter().any(InputDecl::is_empty);

        CodeFile::new()
            .verbatim_import(&self.config.inputs.prisma_importer)
            .import(Import::new(&self.config.global.builder_import_path).named("builder"))
            .add(RawCode::new(UTIL_TYPES))
            .add_all(self.scalars(needs_never))
            .add_all(self.enums())
            .add_all(inputs.iter().map(input_declaration))
            .render()
    }
}
