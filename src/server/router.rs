//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa path annotation. The collected
//! OpenAPI document is served at `/docs/openapi.json` and browsed through Swagger UI at `/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `bearer` scheme referenced by protected endpoints
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /login` - Exchange credentials for a bearer token
/// - `GET /users`, `POST /users`, `DELETE /users` - List, register, and delete users
/// - `GET /users/favorites` - Favorites of the authenticated user
/// - `GET /characters`, `POST /characters`, `GET /characters/{id}`
/// - `GET /planets`, `POST /planets`, `GET /planets/{id}`
/// - `POST|DELETE /favorite/character/{id}` and `POST|DELETE /favorite/planet/{id}`
/// - `POST /population/characters`, `POST /population/planets` - Import from the catalog
///
/// # Returns
/// A `Router<AppState>`, call `with_state` to make it servable.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Holocron API"),
        modifiers(&BearerSecurity),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::user::USER_TAG, description = "User API routes"),
            (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
            (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
            (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
            (name = controller::population::POPULATION_TAG, description = "Catalog import API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(controller::population::populate_characters))
        .routes(routes!(controller::population::populate_planets))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
