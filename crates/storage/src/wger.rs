//! Client for the exercise endpoint of the WGER REST API.

use reqwest::{Method, Url, header::HeaderMap};
use serde::Deserialize;

use exsync_domain as domain;

use crate::rest::{ConfigError, SendRequest, endpoint, fetch, json_headers, request};

pub const DEFAULT_URL: &str = "https://wger.de/api/v2";
pub const DEFAULT_LANGUAGE_ID: u32 = 2;
pub const DEFAULT_LIMIT: u32 = 200;

pub struct WgerREST<S: SendRequest> {
    sender: S,
    url: Url,
    headers: HeaderMap,
}

impl<S: SendRequest> WgerREST<S> {
    /// Requests a single page of at most `limit` exercises in the given language.
    pub fn new(
        sender: S,
        base_url: &Url,
        language_id: u32,
        limit: u32,
    ) -> Result<Self, ConfigError> {
        let mut url = endpoint(base_url, &["exercise", ""])?;
        url.query_pairs_mut()
            .append_pair("language", &language_id.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(Self {
            sender,
            url,
            headers: json_headers(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<S: SendRequest> domain::SourceRepository for WgerREST<S> {
    async fn read_source_exercises(
        &self,
    ) -> Result<Vec<domain::SourceExercise>, domain::ReadError> {
        let page: Page = fetch(
            &self.sender,
            request(Method::GET, self.url.clone(), &self.headers),
        )
        .await?;
        Ok(page
            .results
            .into_iter()
            .map(domain::SourceExercise::from)
            .collect())
    }
}

#[derive(Deserialize, Debug)]
struct Page {
    results: Vec<Exercise>,
}

#[derive(Deserialize, Debug)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub muscles: Vec<Muscle>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    pub language: Language,
}

#[derive(Deserialize, Debug)]
pub struct Category {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Muscle {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_front: bool,
}

#[derive(Deserialize, Debug)]
pub struct Equipment {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Language {
    pub id: u32,
    pub short_name: String,
}

impl From<Exercise> for domain::SourceExercise {
    fn from(value: Exercise) -> Self {
        domain::SourceExercise {
            id: value.id,
            name: value.name,
            description: value.description,
            category: domain::SourceCategory {
                id: value.category.id,
                name: value.category.name,
            },
            muscles: value
                .muscles
                .into_iter()
                .map(|m| domain::SourceMuscle {
                    id: m.id,
                    name: m.name,
                    is_front: m.is_front,
                })
                .collect(),
            equipment: value
                .equipment
                .into_iter()
                .map(|e| domain::SourceEquipment {
                    id: e.id,
                    name: e.name,
                })
                .collect(),
            language: domain::SourceLanguage {
                id: value.language.id,
                short_name: value.language.short_name,
            },
        }
    }
}
