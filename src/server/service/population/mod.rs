//! Bulk import of characters and planets from the external catalog.
//!
//! A population run fetches one summary page, fetches each record's detail with bounded
//! concurrency, and creates one row per record. Records that fail to fetch, fail validation, or
//! already exist are skipped and reported; only a failure to fetch the summary page aborts the
//! run. Repeat runs therefore create nothing and skip every record.

pub mod client;

use std::future::Future;

use futures::{stream, StreamExt};
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::{
    model::catalog::{PopulationDto, SkippedItemDto},
    server::{
        data::{
            character::{NewCharacter, CHARACTER_FIELDS},
            hydrate::{hydrate, FieldSpec, Hydrated},
            planet::{NewPlanet, PLANET_FIELDS},
        },
        error::{catalog::CatalogError, Error},
        model::{
            catalog::CatalogKind,
            db::{CharacterModel, PlanetModel},
        },
        service::{
            character::CharacterService, planet::PlanetService,
            population::client::CatalogClient,
        },
    },
};

/// A catalog record that was not imported
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedItem {
    pub url: String,
    pub reason: String,
}

impl From<SkippedItem> for SkippedItemDto {
    fn from(item: SkippedItem) -> Self {
        Self {
            url: item.url,
            reason: item.reason,
        }
    }
}

/// Rows created by a population run and the records skipped along the way
#[derive(Debug)]
pub struct ImportReport<T> {
    pub created: Vec<T>,
    pub skipped: Vec<SkippedItem>,
}

impl<M, T> From<ImportReport<M>> for PopulationDto<T>
where
    T: From<M>,
{
    fn from(report: ImportReport<M>) -> Self {
        Self {
            created: report.created.into_iter().map(T::from).collect(),
            skipped: report.skipped.into_iter().map(SkippedItemDto::from).collect(),
        }
    }
}

impl<T> ImportReport<T> {
    fn new() -> Self {
        Self {
            created: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

pub struct PopulationService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogClient,
}

impl<'a> PopulationService<'a> {
    /// Creates a new instance of [`PopulationService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogClient) -> Self {
        Self { db, catalog }
    }

    /// Imports the configured page of people from the catalog as characters
    ///
    /// # Returns
    /// - `Ok(ImportReport)`: Created characters in catalog order and every skipped record
    /// - `Err(Error::CatalogError(CatalogError::Unavailable))`: Summary page could not be fetched
    /// - `Err(Error::DbErr)`: The store failed for a reason other than a constraint violation
    pub async fn populate_characters(&self) -> Result<ImportReport<CharacterModel>, Error> {
        let db = self.db;

        self.populate(CatalogKind::Character, CHARACTER_FIELDS, move |hydrated| async move {
            let character = NewCharacter::from_hydrated(&hydrated)?;

            CharacterService::new(db).create(character).await
        })
        .await
    }

    /// Imports the configured page of planets from the catalog
    ///
    /// See [`PopulationService::populate_characters`] for the returned values.
    pub async fn populate_planets(&self) -> Result<ImportReport<PlanetModel>, Error> {
        let db = self.db;

        self.populate(CatalogKind::Planet, PLANET_FIELDS, move |hydrated| async move {
            let planet = NewPlanet::from_hydrated(&hydrated)?;

            PlanetService::new(db).create(planet).await
        })
        .await
    }

    async fn populate<T, F, Fut>(
        &self,
        kind: CatalogKind,
        schema: &[FieldSpec],
        create: F,
    ) -> Result<ImportReport<T>, Error>
    where
        F: Fn(Hydrated) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let details = self.fetch_details(kind).await?;
        let mut report = ImportReport::new();

        // Inserts run one at a time, each in its own transaction
        for (url, detail) in details {
            let result = match detail {
                Ok(fields) => create(hydrate(schema, &fields)).await,
                Err(err) => Err(err.into()),
            };

            match result {
                Ok(model) => report.created.push(model),
                Err(Error::DbErr(err)) => return Err(Error::DbErr(err)),
                Err(err) => {
                    tracing::warn!(%kind, %url, error = %err, "Skipping catalog record");

                    report.skipped.push(SkippedItem {
                        url,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            %kind,
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Finished catalog population"
        );

        Ok(report)
    }

    /// Fetches the summary page then every detail, keeping summary order
    async fn fetch_details(
        &self,
        kind: CatalogKind,
    ) -> Result<Vec<(String, Result<Map<String, Value>, CatalogError>)>, Error> {
        let catalog = self.catalog;

        let summaries = catalog
            .fetch_summaries(kind)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let details = stream::iter(summaries)
            .map(|summary| async move {
                let detail = catalog.fetch_detail(kind, &summary.url).await;
                (summary.url, detail)
            })
            .buffered(catalog.concurrency())
            .collect::<Vec<_>>()
            .await;

        Ok(details)
    }
}
