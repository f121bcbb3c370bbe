use holocron::server::controller::{
    favorite::{
        add_favorite_character, add_favorite_planet, remove_favorite_character,
        remove_favorite_planet,
    },
    util::auth_user::AuthUser,
};

use super::*;

/// Tests favoriting a stored character.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn add_favorite_character_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda").await?;

    let result = add_favorite_character(
        State(test.into_app_state()),
        AuthUser(user.id),
        Path(character.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests favoriting the same character twice.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn add_favorite_character_conflicts_on_repeat() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda").await?;
    test.favorite()
        .insert_favorite(user.id, "character", character.id, "Yoda")
        .await?;

    let result = add_favorite_character(
        State(test.into_app_state()),
        AuthUser(user.id),
        Path(character.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests favoriting a character that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn add_favorite_character_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;

    let result =
        add_favorite_character(State(test.into_app_state()), AuthUser(user.id), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests removing a favorite character.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn remove_favorite_character_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda").await?;
    test.favorite()
        .insert_favorite(user.id, "character", character.id, "Yoda")
        .await?;

    let result = remove_favorite_character(
        State(test.into_app_state()),
        AuthUser(user.id),
        Path(character.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests removing a character favorite by a planet with the same ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn remove_favorite_planet_ignores_character_favorites() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda").await?;
    test.favorite()
        .insert_favorite(user.id, "character", character.id, "Yoda")
        .await?;

    let result = remove_favorite_planet(
        State(test.into_app_state()),
        AuthUser(user.id),
        Path(character.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests favoriting a stored planet.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn add_favorite_planet_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Dagobah").await?;

    let result =
        add_favorite_planet(State(test.into_app_state()), AuthUser(user.id), Path(planet.id))
            .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests removing a planet the user never favorited.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn remove_favorite_planet_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Dagobah").await?;

    let result =
        remove_favorite_planet(State(test.into_app_state()), AuthUser(user.id), Path(planet.id))
            .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
