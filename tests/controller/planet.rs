use holocron::server::controller::planet::{create_planet, get_planet, get_planets};
use serde_json::{Map, Value};

use super::*;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

/// Tests listing stored planets.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_planets_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_planet("Tatooine")
        .with_planet("Hoth")
        .build()
        .await?;

    let result = get_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests creating a planet.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn create_planet_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_planet(
        State(test.into_app_state()),
        Json(object(factory::planet_detail("Tatooine"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a planet without a population.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_planet_rejects_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let mut fields = object(factory::planet_detail("Dagobah"));
    fields.remove("population");

    let result = create_planet(State(test.into_app_state()), Json(fields)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests fetching a stored planet by ID.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_planet_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let planet = test.catalog().insert_planet("Naboo").await?;

    let result = get_planet(State(test.into_app_state()), Path(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_planet(State(test.into_app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
