use ormser::schema::{Column, FieldTy, RelationKind};
use ormser::stmt::{Type, Value};
use ormser::{Mapping, Model};
use pretty_assertions::assert_eq;

#[test]
fn default_table_name_is_pluralized() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct UserProfile {
        #[key]
        id: i64,

        bio: String,
    }

    let schema = UserProfile::schema();
    assert_eq!(schema.name.upper_camel_case(), "UserProfile");
    assert_eq!(schema.table_name(), "user_profiles");
    assert_eq!(
        schema.columns(),
        [
            Column::new("id", Type::I64).primary_key(),
            Column::new("bio", Type::String),
        ]
    );
}

#[test]
fn table_attribute_names_the_table() {
    #[derive(Model)]
    #[table = "people"]
    #[allow(dead_code)]
    struct User {
        id: i64,
    }

    assert_eq!(User::schema().table_name(), "people");
}

#[test]
fn column_attribute_renames_storage() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct User {
        #[key]
        id: i64,

        #[column("user_name")]
        name: String,
    }

    let schema = User::schema();
    let names: Vec<_> = schema.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "user_name"]);

    let field = schema.field("name").unwrap();
    assert_eq!(field.name.storage_name(), "user_name");
    assert_eq!(schema.column_for(field).unwrap().ty, Type::String);

    // Same name as the field: no rename recorded
    #[derive(Model)]
    #[allow(dead_code)]
    struct Plain {
        #[column("id")]
        id: i64,
    }

    assert_eq!(Plain::schema().fields[0].name.storage_name, None);
}

#[test]
fn option_fields_are_nullable() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct User {
        id: i64,
        email: Option<String>,
        avatar: Option<Vec<u8>>,
    }

    let schema = User::schema();
    let email = schema.column("email").unwrap();
    assert!(email.nullable);
    assert_eq!(email.ty, Type::String);
    assert!(!email.has_default());

    assert_eq!(schema.column("avatar").unwrap().ty, Type::Bytes);
    assert!(!schema.column("id").unwrap().nullable);
}

#[test]
fn defaults_convert_through_the_field_type() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct User {
        id: i64,

        #[default("anon")]
        name: String,

        #[default(18)]
        age: u8,

        #[default(None)]
        nickname: Option<String>,

        #[default(true)]
        active: bool,
    }

    let schema = User::schema();
    let default = |name: &str| schema.column(name).unwrap().default.clone();

    assert_eq!(default("id"), None);
    assert_eq!(default("name"), Some(Value::from("anon")));
    assert_eq!(default("age"), Some(Value::U8(18)));
    assert_eq!(default("nickname"), Some(Value::Null));
    assert_eq!(default("active"), Some(Value::Bool(true)));
}

#[test]
fn relations_are_fields_but_not_columns() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct Post {
        #[key]
        id: i64,

        #[belongs_to]
        user: User,
    }

    #[derive(Model)]
    #[allow(dead_code)]
    struct User {
        #[key]
        id: i64,

        #[has_many]
        posts: Vec<Post>,

        #[has_one]
        manager: Option<Box<Self>>,
    }

    let schema = User::schema();
    assert_eq!(schema.columns().len(), 1);
    assert_eq!(schema.fields.len(), 3);

    let relations: Vec<_> = schema
        .relations()
        .map(|field| match &field.ty {
            FieldTy::Relation(rel) => (field.name.app_name.as_str(), rel.kind, rel.target.as_str()),
            FieldTy::Primitive { .. } => unreachable!(),
        })
        .collect();

    assert_eq!(
        relations,
        [
            ("posts", RelationKind::HasMany, "Post"),
            ("manager", RelationKind::HasOne, "User"),
        ]
    );

    assert_eq!(Post::schema().columns().len(), 1);
}

#[test]
fn raw_identifiers_drop_the_prefix() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct Item {
        id: i64,
        r#type: String,
    }

    let schema = Item::schema();
    assert!(schema.column("type").is_some());
    assert!(schema.field("type").is_some());
}

#[test]
fn columns_follow_declaration_order() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct Wide {
        a: i8,
        b: i16,
        c: i32,
        d: u64,
        e: f32,
        f: f64,
        g: uuid::Uuid,
    }

    let schema = Wide::schema();
    let tys: Vec<_> = schema.columns().iter().map(|c| c.ty).collect();
    assert_eq!(
        tys,
        [
            Type::I8,
            Type::I16,
            Type::I32,
            Type::U64,
            Type::F32,
            Type::F64,
            Type::Uuid
        ]
    );

    for (index, field) in schema.fields.iter().enumerate() {
        assert_eq!(field.column(), Some(index));
    }
}
