use ormser::{FieldFailure, Model};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::prelude::*;

#[derive(Model)]
#[allow(dead_code)]
struct Account {
    #[key]
    id: uuid::Uuid,

    #[column("display_name")]
    #[default("anon")]
    name: String,

    email: Option<String>,

    #[default(0)]
    logins: u32,
}

#[test]
fn validate_and_dump() {
    init_logging();

    let serializer = assert_ok!(Account::serializer());
    let id = uuid::Uuid::new_v4();

    let record = assert_ok!(serializer.validate(&json!({
        "id": id.to_string(),
        "email": null,
        "unknown": 1,
    })));

    assert_eq!(record.get_as::<uuid::Uuid>("id").unwrap(), id);
    assert_eq!(record.get_as::<String>("display_name").unwrap(), "anon");
    assert_eq!(record.get_as::<u32>("logins").unwrap(), 0);

    assert_eq!(
        serializer.dump(&record),
        json!({
            "id": id.to_string(),
            "display_name": "anon",
            "email": null,
            "logins": 0,
        })
    );
}

#[test]
fn nullable_without_default_is_still_required() {
    let serializer = assert_ok!(Account::serializer());

    let err = assert_err!(serializer.validate(&json!({
        "id": uuid::Uuid::new_v4().to_string(),
    })));

    assert!(err.is_validation());
    assert_eq!(
        err.validation_failures().unwrap(),
        [FieldFailure::missing("email")]
    );
}

#[test]
fn every_failure_is_reported() {
    let serializer = assert_ok!(Account::serializer());

    let err = assert_err!(serializer.validate(&json!({
        "id": "not-a-uuid",
        "display_name": null,
        "email": "a@example.com",
        "logins": -1,
    })));

    let fields: Vec<_> = err
        .validation_failures()
        .unwrap()
        .iter()
        .map(|failure| failure.field.as_str())
        .collect();
    assert_eq!(fields, ["id", "display_name", "logins"]);
    assert!(err.to_string().starts_with("validation failed for ModelSerializer: "));
}

#[test]
fn json_schema_of_derived_serializer() {
    #[derive(Model)]
    #[serializer(exclude(id))]
    #[allow(dead_code)]
    struct Profile {
        #[key]
        id: i64,

        #[default(18)]
        age: u8,

        bio: Option<String>,
    }

    let serializer = assert_ok!(Profile::serializer());

    assert_eq!(
        serializer.json_schema(),
        json!({
            "title": "ModelSerializer",
            "type": "object",
            "properties": {
                "age": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 255,
                    "default": 18,
                },
                "bio": {
                    "type": ["string", "null"],
                },
            },
            "required": ["bio"],
        })
    );
}
