use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, PlanetDto, PopulationDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::population::PopulationService,
    },
};

pub static POPULATION_TAG: &str = "population";

/// Import a page of people from the external catalog as characters
///
/// Records which cannot be imported are listed under `skipped` with the reason.
#[utoipa::path(
    post,
    path = "/population/characters",
    tag = POPULATION_TAG,
    responses(
        (status = 200, description = "Import finished", body = PopulationDto<CharacterDto>),
        (status = 502, description = "External catalog unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn populate_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let report = PopulationService::new(&state.db, &state.catalog)
        .populate_characters()
        .await?;

    let population: PopulationDto<CharacterDto> = report.into();

    Ok((StatusCode::OK, Json(population)))
}

/// Import a page of planets from the external catalog
#[utoipa::path(
    post,
    path = "/population/planets",
    tag = POPULATION_TAG,
    responses(
        (status = 200, description = "Import finished", body = PopulationDto<PlanetDto>),
        (status = 502, description = "External catalog unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn populate_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let report = PopulationService::new(&state.db, &state.catalog)
        .populate_planets()
        .await?;

    let population: PopulationDto<PlanetDto> = report.into();

    Ok((StatusCode::OK, Json(population)))
}
