use ormser::serializer::FieldDefault;
use ormser::stmt::{Type, Value};
use ormser::{Model, Serializer};
use pretty_assertions::assert_eq;
use tests::prelude::*;

#[derive(Model)]
#[allow(dead_code)]
struct User {
    #[key]
    id: i64,

    #[default("anon")]
    name: String,
}

#[test]
fn default_configuration_selects_every_column() {
    init_logging();

    let serializer = assert_ok!(User::serializer());
    assert_eq!(serializer.name(), "ModelSerializer");
    assert_eq!(field_names(&serializer), ["id", "name"]);

    let id = serializer.field("id").unwrap();
    assert_eq!(id.ty, Type::I64);
    assert_eq!(id.default, FieldDefault::Required);

    let name = serializer.field("name").unwrap();
    assert_eq!(name.ty, Type::String);
    assert_eq!(name.default, FieldDefault::Value(Value::from("anon")));
}

#[test]
fn include_attribute() {
    init_logging();

    #[derive(Model)]
    #[serializer(include(id))]
    #[allow(dead_code)]
    struct User {
        #[key]
        id: i64,

        #[default("anon")]
        name: String,
    }

    assert_eq!(User::serializer_config(), Serializer::new().include(["id"]));

    let serializer = assert_ok!(User::serializer());
    assert_eq!(field_names(&serializer), ["id"]);
    assert!(serializer.field("id").unwrap().is_required());
}

#[test]
fn exclude_attribute() {
    init_logging();

    #[derive(Model)]
    #[serializer(exclude(id))]
    #[allow(dead_code)]
    struct User {
        #[key]
        id: i64,

        #[default("anon")]
        name: String,
    }

    let serializer = assert_ok!(User::serializer());
    assert_eq!(field_names(&serializer), ["name"]);
    assert_eq!(
        serializer.field("name").unwrap().default_value(),
        Some(&Value::from("anon"))
    );
}

#[test]
fn empty_include_selects_nothing() {
    #[derive(Model)]
    #[serializer(include())]
    #[allow(dead_code)]
    struct User {
        id: i64,
    }

    assert!(assert_ok!(User::serializer()).is_empty());
}

#[test]
fn empty_exclude_with_include() {
    #[derive(Model)]
    #[serializer(include(id), exclude())]
    #[allow(dead_code)]
    struct User {
        id: i64,
        name: String,
    }

    let serializer = assert_ok!(User::serializer());
    assert_eq!(field_names(&serializer), ["id"]);
}

#[test]
fn raw_identifier_selector() {
    #[derive(Model)]
    #[serializer(include(r#type))]
    #[allow(dead_code)]
    struct Item {
        id: i64,
        r#type: String,
    }

    assert_eq!(Item::serializer_config(), Serializer::new().include(["type"]));

    let serializer = assert_ok!(Item::serializer());
    assert_eq!(field_names(&serializer), ["type"]);
}

#[test]
fn selectors_name_columns() {
    #[derive(Model)]
    #[serializer(exclude("user_name"))]
    #[allow(dead_code)]
    struct User {
        #[key]
        id: i64,

        #[column("user_name")]
        name: String,
    }

    let serializer = assert_ok!(User::serializer());
    assert_eq!(field_names(&serializer), ["id"]);

    // At runtime the field name gets a hint pointing at the column
    let err = assert_err!(
        Serializer::new().include(["name"]).from_model(&User::schema()),
        "(field `name` is stored in column `user_name`)"
    );
    assert!(err.is_configuration());
}

#[test]
fn relations_never_become_fields() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct Post {
        #[key]
        id: i64,
    }

    #[derive(Model)]
    #[allow(dead_code)]
    struct Author {
        #[key]
        id: i64,

        #[has_many]
        posts: Vec<Post>,
    }

    let serializer = assert_ok!(Author::serializer());
    assert_eq!(field_names(&serializer), ["id"]);

    let err = assert_err!(
        Serializer::new().exclude(["posts"]).from_model(&Author::schema()),
        "table `authors` doesn't have field `posts` (`posts` is a relation)"
    );
    assert!(err.is_configuration());
}

#[test]
fn runtime_configuration_errors() {
    let schema = User::schema();

    let err = assert_err!(Serializer::new()
        .include(["id"])
        .exclude(["name"])
        .from_model(&schema));
    assert_eq!(
        err.to_string(),
        "invalid serializer configuration: both `include_fields` and `exclude_fields` are set; set only one or neither"
    );

    let err = assert_err!(Serializer::new().include(["email"]).from_model(&schema));
    assert_eq!(
        err.to_string(),
        "invalid serializer configuration: table `users` doesn't have field `email`"
    );
}

#[test]
fn derivation_is_idempotent() {
    assert_eq!(
        assert_ok!(User::serializer()),
        assert_ok!(User::serializer())
    );
}

#[test]
fn schema_with_serializer_attaches() {
    init_logging();

    let schema = assert_ok!(User::schema_with_serializer());
    let expected = assert_ok!(User::serializer());

    assert_eq!(schema.serializer(), Some(&expected));

    // Everything but the serializer is untouched
    let mut detached = schema.clone();
    detached.serializer = None;
    assert_eq!(detached, User::schema());
}
