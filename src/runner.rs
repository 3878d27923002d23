use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::anyhow;

use crate::config::{Config, Mode};
use crate::document::update_document;
use crate::error::{AppError, render_error_message};
use crate::gist::{PasteSink, SnippetFile};
use crate::ranking::{GameRecord, LEADERBOARD_SIZE, select_all_time, select_recent};
use crate::render::render_lines;
use crate::splice::RenderedBlock;
use crate::steam::{GameLibrary, OwnedGamesQuery};
use crate::table::to_table;

#[derive(Debug, Default)]
pub struct RunSummary {
    pub title: String,
    pub lines: Vec<String>,
    pub gist_updated: bool,
    pub documents_updated: Vec<PathBuf>,
    pub document_errors: Vec<(PathBuf, String)>,
}

pub struct SteamBox<L, P> {
    library: L,
    sink: Option<P>,
}

impl<L: GameLibrary, P: PasteSink> SteamBox<L, P> {
    pub fn new(library: L, sink: Option<P>) -> Self {
        Self { library, sink }
    }

    /// Fetches, ranks and renders the leaderboard, then publishes it to the
    /// configured targets. Provider failures abort the run; document
    /// failures are collected and the remaining documents still update.
    pub fn run(&self, cfg: &Config) -> Result<RunSummary, AppError> {
        let title = cfg.mode.title();
        let records = self.leaderboard(cfg)?;
        let lines = render_lines(&records, cfg.layout);
        tracing::info!(mode = ?cfg.mode, entries = records.len(), "leaderboard rendered");

        let mut summary = RunSummary {
            title: title.to_string(),
            lines,
            ..Default::default()
        };

        if cfg.target.includes_paste() {
            summary.gist_updated = self.publish_gist(cfg, title, summary.lines.join("\n"))?;
        }

        if cfg.target.includes_documents() {
            self.publish_documents(cfg, &mut summary);
        }

        Ok(summary)
    }

    fn leaderboard(&self, cfg: &Config) -> Result<Vec<GameRecord>, AppError> {
        match cfg.mode {
            Mode::AllTime => {
                let query = OwnedGamesQuery {
                    player_id: cfg.player_id,
                    include_app_info: true,
                    include_played_free_games: true,
                    app_ids: cfg.app_ids.clone(),
                };
                let games = self
                    .library
                    .fetch_owned_games(&query)
                    .map_err(|err| AppError::provider("fetch owned games", err))?;
                Ok(select_all_time(games))
            }
            Mode::Recent => {
                let games = self
                    .library
                    .fetch_recent_games(cfg.player_id, LEADERBOARD_SIZE)
                    .map_err(|err| AppError::provider("fetch recently played games", err))?;
                Ok(select_recent(games))
            }
        }
    }

    fn publish_gist(&self, cfg: &Config, title: &str, content: String) -> Result<bool, AppError> {
        let sink = self
            .sink
            .as_ref()
            .ok_or_else(|| AppError::provider("update gist", anyhow!("no gist client configured")))?;

        let snippet = sink
            .fetch_snippet(&cfg.gist_id)
            .map_err(|err| AppError::provider("fetch gist", err))?;
        if snippet.file_content(title) == Some(content.as_str()) {
            tracing::info!(gist = %cfg.gist_id, "gist already up to date");
            return Ok(false);
        }

        let mut files = BTreeMap::new();
        files.insert(
            title.to_string(),
            SnippetFile {
                content: Some(content),
            },
        );
        sink.update_snippet(&cfg.gist_id, &files)
            .map_err(|err| AppError::provider("update gist", err))?;
        tracing::info!(gist = %cfg.gist_id, "gist updated");
        Ok(true)
    }

    fn publish_documents(&self, cfg: &Config, summary: &mut RunSummary) {
        let block = RenderedBlock::new(document_title(cfg), to_table(&summary.lines));
        for path in &cfg.documents {
            match update_document(path, &block) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "document updated");
                    summary.documents_updated.push(path.clone());
                }
                Err(err) => {
                    let message = render_error_message(&err);
                    tracing::error!(path = %err.path().display(), error = %message, "document update failed");
                    summary.document_errors.push((path.clone(), message));
                }
            }
        }
    }
}

/// Links the heading to the gist when the gist is published alongside.
fn document_title(cfg: &Config) -> String {
    let title = cfg.mode.title();
    if cfg.target.includes_paste() {
        format!(
            r#"#### <a href="https://gist.github.com/{}" target="_blank">{}</a>"#,
            cfg.gist_id, title
        )
    } else {
        title.to_string()
    }
}
