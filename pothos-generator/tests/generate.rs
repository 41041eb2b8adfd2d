//! End-to-end generation tests.
//!
//! Each test runs a sample Prisma document through the pipeline and the
//! generator, either as a preview or written to a temporary directory.

use std::{collections::BTreeMap, path::Path};

use pothos_crud_codegen::{
    pipeline::Pipeline,
    plan::Operation,
    testing::{generate_to_temp, read_tree},
};
use pothos_crud_config::Config;
use pothos_crud_generator::{Generator, LanguageCodegen};
use pothos_crud_schema::{
    Document,
    testing::{blog_document, user_document},
};

fn config(toml: &str) -> Config {
    toml.parse().expect("config should parse")
}

fn preview(document: Document, config: Config) -> BTreeMap<String, String> {
    let ctx = Pipeline::new().run(document, config).expect("pipeline failed");
    let generator = Generator::from_context(&ctx).expect("plan missing");
    generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn generate(document: Document, config: Config, dir: &Path) -> eyre::Result<()> {
    let ctx = Pipeline::new().run(document, config)?;
    Generator::from_context(&ctx)?.generate(dir)?;
    Ok(())
}

#[test]
fn test_resolver_files_follow_naming() {
    let files = preview(blog_document(), Config::default());

    for model in ["User", "Post"] {
        for op in Operation::ALL {
            let kind = op.kind();
            let path = format!("{model}/{}/{}.base.ts", kind.dir(), op.name());
            let content = files.get(&path).unwrap_or_else(|| panic!("missing {path}"));
            let base = format!("{}{model}{}", op.name(), kind.as_str());
            assert!(content.contains(&format!("export const {base}Args = ")), "{path}");
            assert!(content.contains(&format!("export const {base}Object = ")), "{path}");
            assert!(content.contains(&format!("export const {base} = ")), "{path}");
        }
    }
}

#[test]
fn test_include_overrides_exclude() {
    let files = preview(
        user_document(),
        config(
            r#"
[crud]
includeResolversContain = ["User"]
excludeResolversExact = ["deleteOneUser"]
includeResolversExact = ["deleteOneUser"]
"#,
        ),
    );
    assert!(files.contains_key("User/mutations/deleteOne.base.ts"));
}

#[test]
fn test_excluded_resolver_is_absent_everywhere() {
    let files = preview(
        user_document(),
        config(
            r#"
[crud]
excludeResolversExact = ["deleteOneUser"]
"#,
        ),
    );

    assert!(!files.contains_key("User/mutations/deleteOne.base.ts"));
    assert!(files.contains_key("User/mutations/deleteMany.base.ts"));
    assert!(!files["User/mutations/index.ts"].contains("deleteOneUser"));
    assert!(!files["autocrud.ts"].contains("deleteOneUserMutationObject"));
    assert!(files["autocrud.ts"].contains("deleteMany: User.deleteManyUserMutationObject,"));
}

#[test]
fn test_batch_operations_return_payload() {
    let files = preview(blog_document(), Config::default());

    for (path, content) in &files {
        let batch = path.ends_with("/updateMany.base.ts") || path.ends_with("/deleteMany.base.ts");
        if batch {
            assert!(content.contains("type: BatchPayload,"), "{path}");
            assert!(content.contains("defineMutationObject({"), "{path}");
        } else if path.contains("/mutations/") && path.ends_with(".base.ts") {
            assert!(content.contains("defineMutationPrismaObject({"), "{path}");
            assert!(!content.contains("BatchPayload"), "{path}");
        }
    }
    assert!(files["objects.ts"].contains("export const BatchPayload = "));
}

#[test]
fn test_user_scenario() {
    let files = preview(user_document(), Config::default());

    insta::assert_snapshot!(files["User/object.base.ts"].as_str(), @r#"
    import { definePrismaObject } from '../utils';

    export const UserObject = definePrismaObject('User', {
      fields: (t) => ({
        id: t.expose("id", { type: "Int", nullable: false }),
        name: t.expose("name", { type: "String", nullable: false }),
      }),
    });
    "#);

    let update_many = &files["User/mutations/updateMany.base.ts"];
    assert!(update_many.contains("export const updateManyUserMutationObject = defineMutationFunction((t) =>"));
    assert!(update_many.contains("await context.prisma.user.updateMany({"));
    assert!(update_many.contains("updateManyUser: t.field(updateManyUserMutationObject(t)),"));
}

#[test]
fn test_nested_inputs_toggle() {
    let stripped = preview(blog_document(), Config::default());
    let kept = preview(
        blog_document(),
        config(
            r#"
[global]
noNestedInput = false
"#,
        ),
    );

    let needle = "connectOrCreate: t.field(";
    assert!(!stripped["inputs.ts"].contains(needle));
    assert!(kept["inputs.ts"].contains(needle));
}

#[test]
fn test_where_unique_id_mapping() {
    let files = preview(
        user_document(),
        config(
            r#"
[inputs]
mapIdFieldsToGraphqlId = "WhereUniqueInputs"
"#,
        ),
    );
    let inputs = &files["inputs.ts"];
    assert!(inputs.contains("('UserWhereUniqueInput').implement({\n  fields: (t) => ({\n    id: t.id({ required: false }),"));
    assert!(inputs.contains("    id: t.field({ required: false, type: IntFilter }),\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let first = generate_to_temp(|dir| generate(blog_document(), Config::default(), dir)).unwrap();
    let second = generate_to_temp(|dir| generate(blog_document(), Config::default(), dir)).unwrap();

    let first = read_tree(first.path()).unwrap();
    let second = read_tree(second.path()).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_regenerating_leaves_files_unchanged() {
    let temp = tempfile::TempDir::new().unwrap();
    let ctx = Pipeline::new().run(user_document(), Config::default()).unwrap();
    let generator = Generator::from_context(&ctx).unwrap();

    let first = generator.generate(temp.path()).unwrap();
    assert_eq!(first.stats.unchanged, 0);
    let second = generator.generate(temp.path()).unwrap();
    assert_eq!(second.stats.written, 0);
    assert_eq!(second.stats.unchanged, first.stats.written);
}

#[test]
fn test_delete_output_dir_before_generate() {
    let temp = tempfile::TempDir::new().unwrap();
    let stale = temp.path().join("Stale/object.base.ts");
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, "stale").unwrap();

    let ctx = Pipeline::new()
        .run(
            user_document(),
            config(
                r#"
[global]
deleteOutputDirBeforeGenerate = true
"#,
            ),
        )
        .unwrap();
    let result = Generator::from_context(&ctx).unwrap().generate(temp.path()).unwrap();

    assert!(result.deleted_output_dir);
    assert!(!stale.exists());
    assert!(temp.path().join("User/object.base.ts").exists());
}

#[test]
fn test_stale_files_survive_without_delete() {
    let temp = tempfile::TempDir::new().unwrap();
    let stale = temp.path().join("notes.ts");
    std::fs::write(&stale, "keep").unwrap();

    let ctx = Pipeline::new().run(user_document(), Config::default()).unwrap();
    let result = Generator::from_context(&ctx).unwrap().generate(temp.path()).unwrap();

    assert!(!result.deleted_output_dir);
    assert!(stale.exists());
}

#[test]
fn test_clean_removes_output() {
    let temp = tempfile::TempDir::new().unwrap();
    let out = temp.path().join("generated");
    let ctx = Pipeline::new().run(user_document(), Config::default()).unwrap();
    let generator = Generator::from_context(&ctx).unwrap();

    generator.generate(&out).unwrap();
    assert!(generator.clean(&out).unwrap().removed);
    assert!(!out.exists());
    assert!(!generator.clean(&out).unwrap().removed);
}
