//! Sample documents for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use serde_json::{Value, json};

use crate::Document;

fn scalar(name: &str, ty: &str, required: bool, is_id: bool) -> Value {
    json!({
        "name": name, "kind": "scalar", "type": ty,
        "isRequired": required, "isList": false, "isId": is_id
    })
}

fn relation(name: &str, ty: &str, relation: &str, required: bool, is_list: bool) -> Value {
    json!({
        "name": name, "kind": "object", "type": ty, "relationName": relation,
        "isRequired": required, "isList": is_list, "isId": false
    })
}

fn t(ty: &str, location: &str, is_list: bool) -> Value {
    json!({ "type": ty, "location": location, "isList": is_list })
}

fn input_field(name: &str, required: bool, types: Vec<Value>) -> Value {
    json!({ "name": name, "isRequired": required, "inputTypes": types })
}

fn input(name: &str, fields: Vec<Value>) -> Value {
    json!({ "name": name, "fields": fields })
}

fn obj(ty: &str) -> Value {
    t(ty, "inputObjectTypes", false)
}

fn sc(ty: &str) -> Value {
    t(ty, "scalar", false)
}

fn build(models: Value, enums: Value, inputs: Vec<Value>, enum_types: Value) -> Document {
    let value = json!({
        "datamodel": { "models": models, "enums": enums },
        "schema": {
            "inputObjectTypes": { "prisma": inputs },
            "enumTypes": { "prisma": enum_types }
        }
    });
    match serde_json::from_value(value) {
        Ok(doc) => doc,
        Err(e) => panic!("sample document is malformed: {e}"),
    }
}

/// A single `User { id Int @id, name String }` model with the inputs Prisma
/// generates for it.
pub fn user_document() -> Document {
    let models = json!([{
        "name": "User",
        "fields": [scalar("id", "Int", true, true), scalar("name", "String", true, false)],
        "primaryKey": null
    }]);

    let inputs = vec![
        input(
            "UserWhereInput",
            vec![
                input_field(
                    "AND",
                    false,
                    vec![obj("UserWhereInput"), t("UserWhereInput", "inputObjectTypes", true)],
                ),
                input_field("id", false, vec![obj("IntFilter"), sc("Int")]),
                input_field("name", false, vec![obj("StringFilter"), sc("String")]),
            ],
        ),
        input("UserWhereUniqueInput", vec![input_field("id", false, vec![sc("Int")])]),
        input(
            "UserOrderByWithRelationInput",
            vec![
                input_field("id", false, vec![t("SortOrder", "enumTypes", false)]),
                input_field("name", false, vec![t("SortOrder", "enumTypes", false)]),
            ],
        ),
        input("UserCreateInput", vec![input_field("name", true, vec![sc("String")])]),
        input(
            "UserUncheckedCreateInput",
            vec![
                input_field("id", false, vec![sc("Int")]),
                input_field("name", true, vec![sc("String")]),
            ],
        ),
        input(
            "UserCreateManyInput",
            vec![
                input_field("id", false, vec![sc("Int")]),
                input_field("name", true, vec![sc("String")]),
            ],
        ),
        input(
            "UserUpdateInput",
            vec![input_field(
                "name",
                false,
                vec![sc("String"), obj("StringFieldUpdateOperationsInput")],
            )],
        ),
        input(
            "UserUpdateManyMutationInput",
            vec![input_field(
                "name",
                false,
                vec![sc("String"), obj("StringFieldUpdateOperationsInput")],
            )],
        ),
        input(
            "IntFilter",
            vec![
                input_field("equals", false, vec![sc("Int")]),
                input_field("in", false, vec![t("Int", "scalar", true)]),
                input_field("not", false, vec![sc("Int"), obj("NestedIntFilter")]),
            ],
        ),
        input(
            "StringFilter",
            vec![
                input_field("equals", false, vec![sc("String")]),
                input_field("contains", false, vec![sc("String")]),
            ],
        ),
        input(
            "StringFieldUpdateOperationsInput",
            vec![input_field("set", false, vec![sc("String")])],
        ),
        input(
            "UserCountOutputTypeSelect",
            vec![input_field("posts", false, vec![sc("Boolean")])],
        ),
    ];

    let enum_types = json!([
        { "name": "SortOrder", "values": ["asc", "desc"] },
        { "name": "UserScalarFieldEnum", "values": ["id", "name"] }
    ]);

    build(models, json!([]), inputs, enum_types)
}

/// A `User`/`Post` blog schema with a relation, an enum, a documented model,
/// a `DateTime` column and nested relation inputs.
pub fn blog_document() -> Document {
    let models = json!([
        {
            "name": "User",
            "documentation": "A registered author",
            "fields": [
                scalar("id", "Int", true, true),
                scalar("email", "String", true, false),
                {
                    "name": "password", "kind": "scalar", "type": "String",
                    "isRequired": true, "isList": false, "isId": false,
                    "documentation": "@Pothos.omit()"
                },
                {
                    "name": "role", "kind": "enum", "type": "Role",
                    "isRequired": true, "isList": false, "isId": false
                },
                relation("posts", "Post", "PostToUser", true, true)
            ]
        },
        {
            "name": "Post",
            "fields": [
                scalar("id", "Int", true, true),
                scalar("title", "String", true, false),
                {
                    "name": "createdAt", "kind": "scalar", "type": "DateTime",
                    "isRequired": true, "isList": false, "isId": false,
                    "documentation": "@Pothos.omit(create, update) Creation time"
                },
                scalar("authorId", "Int", false, false),
                relation("author", "User", "PostToUser", false, false)
            ]
        }
    ]);

    let enums = json!([{ "name": "Role", "values": [{ "name": "USER" }, { "name": "ADMIN" }] }]);

    let inputs = vec![
        input(
            "UserWhereInput",
            vec![
                input_field("id", false, vec![obj("IntFilter"), sc("Int")]),
                input_field("email", false, vec![obj("StringFilter"), sc("String")]),
                input_field("password", false, vec![obj("StringFilter"), sc("String")]),
                input_field("posts", false, vec![obj("PostListRelationFilter")]),
            ],
        ),
        input(
            "UserWhereUniqueInput",
            vec![
                input_field("id", false, vec![sc("Int")]),
                input_field("email", false, vec![sc("String")]),
            ],
        ),
        input(
            "UserCreateInput",
            vec![
                input_field("email", true, vec![sc("String")]),
                input_field("password", true, vec![sc("String")]),
                input_field("role", false, vec![t("Role", "enumTypes", false)]),
                input_field("posts", false, vec![obj("PostCreateNestedManyWithoutAuthorInput")]),
            ],
        ),
        input(
            "UserUncheckedCreateInput",
            vec![
                input_field("id", false, vec![sc("Int")]),
                input_field("email", true, vec![sc("String")]),
                input_field(
                    "posts",
                    false,
                    vec![obj("PostUncheckedCreateNestedManyWithoutAuthorInput")],
                ),
            ],
        ),
        input(
            "PostWhereInput",
            vec![
                input_field("id", false, vec![obj("IntFilter"), sc("Int")]),
                input_field("title", false, vec![obj("StringFilter"), sc("String")]),
                input_field("createdAt", false, vec![obj("DateTimeFilter"), sc("DateTime")]),
                input_field("author", false, vec![obj("UserRelationFilter"), obj("UserWhereInput")]),
            ],
        ),
        input(
            "PostCreateInput",
            vec![
                input_field("title", true, vec![sc("String")]),
                input_field("createdAt", false, vec![sc("DateTime")]),
                input_field("author", false, vec![obj("UserCreateNestedOneWithoutPostsInput")]),
            ],
        ),
        input(
            "PostUpdateInput",
            vec![
                input_field(
                    "title",
                    false,
                    vec![sc("String"), obj("StringFieldUpdateOperationsInput")],
                ),
                input_field("createdAt", false, vec![sc("DateTime")]),
            ],
        ),
        input(
            "PostCreateNestedManyWithoutAuthorInput",
            vec![
                input_field("create", false, vec![t("PostCreateWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("connectOrCreate", false, vec![t("PostCreateOrConnectWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("createMany", false, vec![obj("PostCreateManyAuthorInputEnvelope")]),
            ],
        ),
        input(
            "PostUpdateManyWithoutAuthorNestedInput",
            vec![
                input_field("create", false, vec![t("PostCreateWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("upsert", false, vec![t("PostUpsertWithWhereUniqueWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("set", false, vec![t("PostWhereUniqueInput", "inputObjectTypes", true)]),
                input_field("connect", false, vec![t("PostWhereUniqueInput", "inputObjectTypes", true)]),
                input_field("update", false, vec![t("PostUpdateWithWhereUniqueWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("updateMany", false, vec![t("PostUpdateManyWithWhereWithoutAuthorInput", "inputObjectTypes", true)]),
                input_field("delete", false, vec![t("PostWhereUniqueInput", "inputObjectTypes", true)]),
                input_field("deleteMany", false, vec![t("PostScalarWhereInput", "inputObjectTypes", true)]),
            ],
        ),
        input(
            "PostListRelationFilter",
            vec![
                input_field("every", false, vec![obj("PostWhereInput")]),
                input_field("some", false, vec![obj("PostWhereInput")]),
            ],
        ),
        input(
            "DateTimeFilter",
            vec![
                input_field("equals", false, vec![sc("DateTime")]),
                input_field("lt", false, vec![sc("DateTime")]),
            ],
        ),
        input(
            "BigIntFilter",
            vec![input_field("equals", false, vec![sc("BigInt")])],
        ),
    ];

    let enum_types = json!([
        { "name": "SortOrder", "values": ["asc", "desc"] },
        { "name": "UserScalarFieldEnum", "values": ["id", "email", "password", "role"] },
        { "name": "PostScalarFieldEnum", "values": ["id", "title", "createdAt", "authorId"] }
    ]);

    build(models, enums, inputs, enum_types)
}
