use holocron::server::controller::character::{create_character, get_character, get_characters};
use serde_json::{json, Map, Value};

use super::*;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

/// Tests listing stored characters.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_characters_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let result = get_characters(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests creating a character with catalog-style string numbers.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn create_character_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_character(
        State(test.into_app_state()),
        Json(object(factory::person_properties("Luke Skywalker"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a character whose height is not a number.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_character_rejects_invalid_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let mut fields = object(factory::person_properties("Jabba"));
    fields.insert("height".to_string(), json!("unknown"));

    let result = create_character(State(test.into_app_state()), Json(fields)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests creating a character whose skin color exceeds its column length.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_character_rejects_over_length_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let mut fields = object(factory::person_properties("Jabba"));
    fields.insert(
        "skin_color".to_string(),
        json!("green-tan with a glistening mottled hide"),
    );

    let result = create_character(State(test.into_app_state()), Json(fields)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests creating a character with a name already stored.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn create_character_conflicts_on_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_character("Luke Skywalker")
        .build()
        .await?;

    let result = create_character(
        State(test.into_app_state()),
        Json(object(factory::person_properties("Luke Skywalker"))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests fetching a stored character by ID.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_character_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let character = test.catalog().insert_character("Leia Organa").await?;

    let result = get_character(State(test.into_app_state()), Path(character.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests fetching a character that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn get_character_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_character(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
