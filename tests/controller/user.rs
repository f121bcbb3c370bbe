use holocron::{
    model::user::NewUserDto,
    server::controller::{
        user::{create_user, delete_user, get_user_favorites, get_users},
        util::auth_user::AuthUser,
    },
};

use super::*;

fn new_user(username: &str) -> NewUserDto {
    NewUserDto {
        name: Some("Leia Organa".to_string()),
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username)),
        password: Some(TEST_PASSWORD.to_string()),
    }
}

/// Tests listing users.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_users_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_tables()
        .with_user("luke")
        .build()
        .await?;
    let user = test.user().insert_user("leia").await?;

    let result = get_users(State(test.into_app_state()), AuthUser(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests registering a new user.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn create_user_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(State(test.into_app_state()), Json(new_user("leia"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn create_user_conflicts_on_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user("leia").build().await?;

    let result = create_user(State(test.into_app_state()), Json(new_user("leia"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests registering without an email.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_user_rejects_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Json(NewUserDto {
            email: None,
            ..new_user("leia")
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests registering with an email longer than its column.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn create_user_rejects_over_length_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Json(NewUserDto {
            email: Some(format!("{}@alderaan.gov", "leia".repeat(12))),
            ..new_user("leia")
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting the authenticated user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn delete_user_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("leia").await?;

    let result = delete_user(State(test.into_app_state()), AuthUser(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests deleting a user whose token outlived the account.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn delete_user_not_found_for_deleted_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = delete_user(State(test.into_app_state()), AuthUser(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing the favorites of a user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_user_favorites_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("leia").await?;
    test.favorite()
        .insert_favorite(user.id, "planet", 1, "Alderaan")
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), AuthUser(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
