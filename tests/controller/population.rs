use holocron::server::controller::population::{populate_characters, populate_planets};

use super::*;

/// Tests importing characters from the catalog.
///
/// Expected: Ok with 200 OK response and every mock endpoint called once
#[tokio::test]
async fn populate_characters_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_people_list_endpoint(vec![1, 2], 1)
        .with_person_endpoint(1, factory::person_properties("Luke Skywalker"), 1)
        .with_person_endpoint(2, factory::person_properties("C-3PO"), 1)
        .build()
        .await?;

    let result = populate_characters(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Tests importing planets when the catalog summary fails.
///
/// Expected: Err with 502 BAD_GATEWAY response
#[tokio::test]
async fn populate_planets_bad_gateway_when_catalog_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/planets/")
                .match_query(mockito::Matcher::Any)
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = populate_planets(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}
