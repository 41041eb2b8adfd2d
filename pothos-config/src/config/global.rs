use serde::Deserialize;

/// Options shared by the CRUD and inputs passes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Root of all emitted files
    pub output_dir: String,

    /// Wipe `output_dir` before writing anything
    pub delete_output_dir_before_generate: bool,

    /// Strip nested relation mutations (create, connectOrCreate, upsert, ...)
    /// from every input type
    pub no_nested_input: bool,

    /// Module specifier of the user's Pothos builder, spliced verbatim
    pub builder_import_path: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_dir: "./generated".into(),
            delete_output_dir_before_generate: false,
            no_nested_input: true,
            builder_import_path: "./builder".into(),
        }
    }
}
