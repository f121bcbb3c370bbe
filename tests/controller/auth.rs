use holocron::{model::user::LoginDto, server::controller::auth::login};

use super::*;

fn credentials(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

/// Tests login with a registered user's password.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn succeeds_with_correct_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    register_user(&test, "luke").await.unwrap();

    let result = login(
        State(test.into_app_state()),
        Json(credentials("luke", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests login with the wrong password.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn fails_with_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    register_user(&test, "luke").await.unwrap();

    let result = login(
        State(test.into_app_state()),
        Json(credentials("luke", "wrong password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests login for a username nobody registered.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        Json(credentials("vader", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests login without a password.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn fails_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        Json(LoginDto {
            username: Some("luke".to_string()),
            password: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
