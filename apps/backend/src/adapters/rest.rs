//! Client for the managed backend's REST interface (PostgREST dialect).
//!
//! Tables: `players` and `games`. Filters use PostgREST operators
//! (`id=eq.<id>`, `name=ilike.*<q>*`) and writes ask for the stored row
//! back with `Prefer: return=representation`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::entities::games::{Game, GameStatus, NewGame};
use crate::entities::players::{NewPlayer, Player};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::{GameDirectory, PlayerDirectory};

const PLAYERS: &str = "players";
const GAMES: &str = "games";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RestDirectory {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestDirectory {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                DomainError::infra(
                    InfraErrorKind::Other("client".into()),
                    format!("failed to build directory client: {e}"),
                )
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url.trim_end_matches('/'))
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn insert<B, T>(&self, table: &str, body: &B, conflict: ConflictKind) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        let mut rows: Vec<T> = read_rows(resp, conflict).await?;
        rows.pop().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("insert into {table} returned no row"),
            )
        })
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DomainError> {
        let resp = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        read_rows(resp, ConflictKind::Other(table.to_string())).await
    }

    /// Single row by primary key. PostgREST answers 400 when the id does not
    /// parse as the column type; that id cannot exist, so it reads as absent.
    async fn find_one<T: DeserializeOwned>(&self, table: &str, id: &str) -> Result<Option<T>, DomainError> {
        let resp = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .query(&[("id", eq_filter(id)), ("limit", "1".into())])
            .send()
            .await
            .map_err(transport_error)?;
        if row_cannot_exist(resp.status()) {
            debug!(table, id, status = %resp.status(), "lookup treated as missing");
            return Ok(None);
        }
        let mut rows: Vec<T> = read_rows(resp, ConflictKind::Other(table.to_string())).await?;
        Ok(rows.pop())
    }
}

fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

/// `ilike` pattern for a substring search. LIKE wildcards in the fragment
/// are escaped so they match literally; characters PostgREST reserves for
/// its own filter syntax are dropped.
fn ilike_filter(fragment: &str) -> String {
    let mut cleaned = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        match c {
            '*' | ',' | '(' | ')' | '"' => {}
            '%' | '_' | '\\' => {
                cleaned.push('\\');
                cleaned.push(c);
            }
            _ => cleaned.push(c),
        }
    }
    format!("ilike.*{cleaned}*")
}

fn transport_error(e: reqwest::Error) -> DomainError {
    warn!(error = %e, "directory request failed");
    if e.is_timeout() {
        DomainError::infra(InfraErrorKind::Timeout, "directory request timed out")
    } else {
        DomainError::infra(
            InfraErrorKind::DirectoryUnavailable,
            "directory is unreachable",
        )
    }
}

fn row_cannot_exist(status: StatusCode) -> bool {
    matches!(status, StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND)
}

/// Map a non-success status to a domain error. 409 is the conflict the
/// caller names; 400 is a rejected filter; 5xx means the directory is down.
fn check_status(status: StatusCode, conflict: ConflictKind) -> Result<(), DomainError> {
    if status.is_success() {
        return Ok(());
    }
    let detail = format!("directory responded with {status}");
    Err(match status {
        StatusCode::CONFLICT => DomainError::conflict(conflict, detail),
        StatusCode::GATEWAY_TIMEOUT | StatusCode::REQUEST_TIMEOUT => {
            DomainError::infra(InfraErrorKind::Timeout, detail)
        }
        StatusCode::BAD_REQUEST => {
            DomainError::validation(ValidationKind::Other("directory".into()), detail)
        }
        StatusCode::NOT_FOUND => DomainError::not_found(NotFoundKind::Other("directory".into()), detail),
        s if s.is_server_error() => DomainError::infra(InfraErrorKind::DirectoryUnavailable, detail),
        _ => DomainError::infra(InfraErrorKind::Other(status.as_str().to_string()), detail),
    })
}

async fn read_rows<T: DeserializeOwned>(
    resp: Response,
    conflict: ConflictKind,
) -> Result<Vec<T>, DomainError> {
    check_status(resp.status(), conflict)?;
    resp.json::<Vec<T>>().await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("unexpected directory payload: {e}"),
        )
    })
}

#[async_trait]
impl PlayerDirectory for RestDirectory {
    async fn create(&self, player: NewPlayer) -> Result<Player, DomainError> {
        self.insert(PLAYERS, &player, ConflictKind::UniqueEmail).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, DomainError> {
        self.find_one(PLAYERS, id).await
    }

    async fn search_by_name(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<Player>, DomainError> {
        let mut query = vec![("order", "name.asc".to_string()), ("limit", limit.to_string())];
        if !fragment.is_empty() {
            query.push(("name", ilike_filter(fragment)));
        }
        self.select(PLAYERS, &query).await
    }
}

#[derive(Serialize)]
struct StatusPatch {
    status: GameStatus,
}

#[async_trait]
impl GameDirectory for RestDirectory {
    async fn create(&self, game: NewGame) -> Result<Game, DomainError> {
        self.insert(GAMES, &game, ConflictKind::Other(GAMES.into())).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, DomainError> {
        self.find_one(GAMES, id).await
    }

    async fn find_active(&self) -> Result<Option<Game>, DomainError> {
        let mut rows: Vec<Game> = self
            .select(
                GAMES,
                &[
                    ("status", eq_filter("active")),
                    ("order", "created_at.desc".into()),
                    ("limit", "1".into()),
                ],
            )
            .await?;
        Ok(rows.pop())
    }

    async fn set_status(&self, id: &str, status: GameStatus) -> Result<Game, DomainError> {
        let resp = self
            .request(Method::PATCH, GAMES)
            .query(&[("id", eq_filter(id))])
            .header("Prefer", "return=representation")
            .json(&StatusPatch { status })
            .send()
            .await
            .map_err(transport_error)?;
        let mut rows: Vec<Game> = read_rows(resp, ConflictKind::Other(GAMES.into())).await?;
        rows.pop()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")))
    }
}
