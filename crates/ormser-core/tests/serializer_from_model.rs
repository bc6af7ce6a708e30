use ormser_core::schema::{Column, RelationKind};
use ormser_core::serializer::FieldDefault;
use ormser_core::stmt::{Type, Value};
use ormser_core::{Model, Serializer};

use pretty_assertions::assert_eq;

fn user() -> Model {
    let _ = env_logger::builder().is_test(true).try_init();

    Model::builder("User")
        .column(Column::new("id", Type::I64).primary_key())
        .column(Column::new("name", Type::String).default("anon"))
        .relation("posts", RelationKind::HasMany, "Post")
        .build()
        .unwrap()
}

fn field_names(serializer: &ormser_core::ModelSerializer) -> Vec<&str> {
    serializer.field_names().collect()
}

#[test]
fn default_configuration_selects_every_column() {
    let serializer = Serializer::new().from_model(&user()).unwrap();

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
fn field_count_matches_column_count() {
    for n in 0..6 {
        let mut builder = Model::builder("Wide");
        for i in 0..n {
            builder = builder.column(Column::new(format!("c{i}"), Type::I32));
        }
        let model = builder.build().unwrap();

        let serializer = Serializer::new().from_model(&model).unwrap();
        let expected: Vec<_> = (0..n).map(|i| format!("c{i}")).collect();
        assert_eq!(serializer.len(), n);
        assert_eq!(
            serializer.field_names().map(String::from).collect::<Vec<_>>(),
            expected
        );
    }
}

#[test]
fn include_keeps_named_columns() {
    let serializer = Serializer::new().include(["id"]).from_model(&user()).unwrap();

    assert_eq!(field_names(&serializer), ["id"]);
    assert!(serializer.field("id").unwrap().is_required());
}

#[test]
fn exclude_drops_named_columns() {
    let serializer = Serializer::new().exclude(["id"]).from_model(&user()).unwrap();

    assert_eq!(field_names(&serializer), ["name"]);
    assert_eq!(
        serializer.field("name").unwrap().default_value(),
        Some(&Value::from("anon"))
    );
}

#[test]
fn include_and_exclude_together_fail() {
    let err = Serializer::new()
        .include(["id"])
        .exclude(["name"])
        .from_model(&user())
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err
        .to_string()
        .contains("both `include_fields` and `exclude_fields` are set"));
}

#[test]
fn include_and_exclude_fail_regardless_of_names() {
    let cases: [(&[&str], &[&str]); 3] = [
        (&["id"], &["name"]),
        (&["nope"], &["other"]),
        (&["id", "name"], &["name"]),
    ];

    for (include, exclude) in cases {
        let err = Serializer::new()
            .include(include.iter().copied())
            .exclude(exclude.iter().copied())
            .from_model(&user())
            .unwrap_err();
        assert!(err.is_configuration(), "{include:?} / {exclude:?}: {err}");
    }
}

#[test]
fn unknown_include_fails_naming_the_field() {
    let err = Serializer::new()
        .include(["email"])
        .from_model(&user())
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid serializer configuration: table `users` doesn't have field `email`"
    );
}

#[test]
fn unknown_exclude_fails_too() {
    let err = Serializer::new()
        .exclude(["email"])
        .from_model(&user())
        .unwrap_err();

    assert!(err.to_string().contains("email"));
}

#[test]
fn derivation_is_idempotent() {
    let model = user();
    let serializer = Serializer::new().exclude(["id"]);

    let first = serializer.from_model(&model).unwrap();
    let second = serializer.from_model(&model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn attach_stores_serializer_on_model() {
    let config = Serializer::new().include(["name"]);
    let expected = config.from_model(&user()).unwrap();

    let model = config.attach(user()).unwrap();

    assert_eq!(model.serializer(), Some(&expected));
    assert_eq!(model.table.name, "users");
    assert_eq!(model.fields.len(), 3);
}

#[test]
fn attach_fails_without_touching_model() {
    let err = Serializer::new().include(["email"]).attach(user()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn nullable_columns_stay_nullable() {
    let model = Model::builder("Profile")
        .column(Column::new("bio", Type::String).nullable())
        .build()
        .unwrap();

    let serializer = Serializer::new().from_model(&model).unwrap();
    let bio = serializer.field("bio").unwrap();
    assert!(bio.nullable);
    assert!(bio.is_required());
}
