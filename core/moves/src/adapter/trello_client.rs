//! Trello REST API を使う BoardProvider 実装（reqwest::blocking）
//!
//! 認証は key / token のクエリパラメータ。リトライはしない。

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use common::error::Error;

use crate::domain::{BoardId, BoardList, BoardSummary, Card, Credentials, Label, Movement};
use crate::ports::outbound::BoardProvider;

/// エラーメッセージに含めるレスポンス本文の最大文字数
const ERROR_BODY_MAX: usize = 200;

/// 1 回で取得する移動履歴の上限（API の最大値）
const ACTIONS_LIMIT: &str = "1000";

#[derive(Debug, Deserialize)]
struct BoardDto {
    id: String,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListDto {
    id: String,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LabelDto {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardDto {
    id: String,
    id_short: Option<u64>,
    name: Option<String>,
    labels: Option<Vec<LabelDto>>,
    date_last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ListRefDto {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionDataDto {
    list_before: Option<ListRefDto>,
    list_after: Option<ListRefDto>,
}

#[derive(Debug, Deserialize)]
struct ActionDto {
    date: Option<DateTime<Utc>>,
    data: Option<ActionDataDto>,
}

impl From<BoardDto> for BoardSummary {
    fn from(dto: BoardDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<ListDto> for BoardList {
    fn from(dto: ListDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<CardDto> for Card {
    fn from(dto: CardDto) -> Self {
        Self {
            short_id: dto.id_short,
            name: dto.name,
            labels: dto
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|l| Label { name: l.name })
                .collect(),
            last_activity: dto.date_last_activity,
            ..Card::new(dto.id)
        }
    }
}

impl From<ActionDto> for Movement {
    fn from(dto: ActionDto) -> Self {
        let data = dto.data.unwrap_or_default();
        Self {
            instant: dto.date,
            source_list_name: data.list_before.and_then(|l| l.name),
            destination_list_name: data.list_after.and_then(|l| l.name),
        }
    }
}

/// 本文を短くしてエラーメッセージ用にする
fn body_excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= ERROR_BODY_MAX {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(ERROR_BODY_MAX).collect();
    format!("{}...", head)
}

/// Trello API クライアント
pub struct TrelloClient {
    http: Client,
    base: Url,
    credentials: Credentials,
}

impl TrelloClient {
    /// `api_base` は `https://api.trello.com/1` のようなベース URL
    pub fn new(api_base: &str, credentials: Credentials) -> Result<Self, Error> {
        let base = Url::parse(api_base)
            .map_err(|e| Error::env(format!("Invalid API base URL '{}': {}", api_base, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::env(format!("Invalid API base URL '{}'", api_base)));
        }
        let http = Client::builder()
            .user_agent(concat!("moves/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base,
            credentials,
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::env(format!("Invalid API base URL '{}'", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET してステータスと本文を返す（通信失敗は Provider エラー）
    fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<(StatusCode, String), Error> {
        let url = self.url(segments)?;
        let response = self
            .http
            .get(url)
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("token", self.credentials.token.as_str()),
            ])
            .query(query)
            .send()
            .map_err(|e| Error::provider(format!("HTTP request failed: {}", e.without_url())))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::provider(format!("Failed to read response: {}", e.without_url())))?;
        Ok((status, body))
    }

    fn parse<T: DeserializeOwned>(what: &str, body: &str) -> Result<T, Error> {
        serde_json::from_str(body)
            .map_err(|e| Error::provider(format!("Failed to parse {} response: {}", what, e)))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        what: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let (status, body) = self.get(segments, query)?;
        if !status.is_success() {
            return Err(Error::provider(format!(
                "Trello API error while fetching {}: HTTP {}: {}",
                what,
                status,
                body_excerpt(&body)
            )));
        }
        Self::parse(what, &body)
    }
}

impl BoardProvider for TrelloClient {
    fn list_boards(&self) -> Result<Vec<BoardSummary>, Error> {
        let boards: Vec<BoardDto> = self.get_json(
            "boards",
            &["members", "me", "boards"],
            &[("filter", "all"), ("fields", "id,name")],
        )?;
        Ok(boards.into_iter().map(BoardSummary::from).collect())
    }

    fn get_board(&self, board_id: &BoardId) -> Result<BoardSummary, Error> {
        let (status, body) = self.get(&["boards", board_id.as_ref()], &[("fields", "id,name")])?;
        // 不正な ID は 400、存在しない ID は 404
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            return Err(Error::board_not_found(board_id.to_string()));
        }
        if !status.is_success() {
            return Err(Error::provider(format!(
                "Trello API error while fetching board: HTTP {}: {}",
                status,
                body_excerpt(&body)
            )));
        }
        let board: BoardDto = Self::parse("board", &body)?;
        Ok(board.into())
    }

    fn list_lists(&self, board: &BoardSummary) -> Result<Vec<BoardList>, Error> {
        let lists: Vec<ListDto> = self.get_json(
            "lists",
            &["boards", board.id.as_str(), "lists"],
            &[("filter", "all"), ("cards", "none"), ("fields", "id,name")],
        )?;
        Ok(lists.into_iter().map(BoardList::from).collect())
    }

    fn list_cards(&self, list: &BoardList) -> Result<Vec<Card>, Error> {
        let cards: Vec<CardDto> = self.get_json(
            "cards",
            &["lists", list.id.as_str(), "cards"],
            &[("filter", "open")],
        )?;
        Ok(cards.into_iter().map(Card::from).collect())
    }

    fn list_movements(&self, card: &Card) -> Result<Vec<Movement>, Error> {
        let actions: Vec<ActionDto> = self.get_json(
            "movements",
            &["cards", card.id.as_str(), "actions"],
            &[("filter", "updateCard:idList"), ("limit", ACTIONS_LIMIT)],
        )?;
        Ok(actions.into_iter().map(Movement::from).collect())
    }
}
