//! Access to the `exercises` table through the PostgREST interface of a Supabase project.

use reqwest::{
    Method, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use exsync_domain as domain;

use crate::rest::{
    ConfigError, SendRequest, endpoint, fetch, fetch_no_content, json_headers, request,
    request_with_body,
};

const TABLE: &str = "exercises";
const APIKEY: &str = "apikey";
const PREFER: &str = "prefer";

pub struct PostgREST<S: SendRequest> {
    sender: S,
    url: Url,
    headers: HeaderMap,
}

impl<S: SendRequest> PostgREST<S> {
    pub fn new(sender: S, project_url: &Url, api_key: &str) -> Result<Self, ConfigError> {
        let mut headers = json_headers();
        let mut key = HeaderValue::from_str(api_key).map_err(|_| ConfigError::InvalidApiKey)?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| ConfigError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(APIKEY, key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(PREFER, HeaderValue::from_static("return=minimal"));

        Ok(Self {
            sender,
            url: endpoint(project_url, &["rest", "v1", TABLE])?,
            headers,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn url_with_query(&self, query: &[(&str, &str)]) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(query);
        url
    }
}

impl<S: SendRequest> domain::ExerciseRepository for PostgREST<S> {
    async fn find_exercise(
        &self,
        name: &domain::Name,
    ) -> Result<Option<domain::ExerciseID>, domain::ReadError> {
        let filter = format!("eq.{name}");
        let url = self.url_with_query(&[("select", "id"), ("name", &filter), ("limit", "1")]);
        let rows: Vec<Row> = fetch(&self.sender, request(Method::GET, url, &self.headers)).await?;
        Ok(rows.first().map(|row| row.id.into()))
    }

    async fn create_exercise(
        &self,
        exercise: &domain::Exercise,
    ) -> Result<(), domain::CreateError> {
        let request = request_with_body(
            Method::POST,
            self.url.clone(),
            &self.headers,
            &[Exercise::from(exercise)],
        )?;
        Ok(fetch_no_content(&self.sender, request).await?)
    }

    async fn update_exercise(
        &self,
        id: domain::ExerciseID,
        exercise: &domain::Exercise,
    ) -> Result<(), domain::UpdateError> {
        let filter = format!("eq.{id}");
        let request = request_with_body(
            Method::PATCH,
            self.url_with_query(&[("id", &filter)]),
            &self.headers,
            &Exercise::from(exercise),
        )?;
        Ok(fetch_no_content(&self.sender, request).await?)
    }
}

#[derive(Deserialize, Debug)]
struct Row {
    id: Uuid,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Exercise<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub muscle_group: &'a str,
    pub equipment: &'a str,
}

impl<'a> From<&'a domain::Exercise> for Exercise<'a> {
    fn from(value: &'a domain::Exercise) -> Self {
        Exercise {
            name: value.name.as_ref(),
            description: &value.description,
            category: value.category.as_ref(),
            muscle_group: value.muscle_group.as_ref(),
            equipment: value.equipment.as_ref(),
        }
    }
}
