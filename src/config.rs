use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    AllTime,
    Recent,
}

impl Mode {
    pub fn title(self) -> &'static str {
        match self {
            Mode::AllTime => "🎮 Steam playtime leaderboard",
            Mode::Recent => "🎮 Recently played Steam games",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleLine,
    MultiLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    PasteOnly,
    DocumentOnly,
    Both,
}

impl OutputTarget {
    pub fn includes_paste(self) -> bool {
        matches!(self, OutputTarget::PasteOnly | OutputTarget::Both)
    }

    pub fn includes_documents(self) -> bool {
        matches!(self, OutputTarget::DocumentOnly | OutputTarget::Both)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown STEAM_OPTION `{0}`, expected ALLTIME or RECENT")]
    UnknownMode(String),
    #[error("{0} is required for gist output")]
    MissingGistSetting(&'static str),
}

/// Command line surface. Every flag also reads from the environment so the
/// binary can run unchanged from a scheduled workflow.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "steambox",
    version,
    about = "Publish a Steam playtime leaderboard to a gist or Markdown files",
    after_help = "Every Markdown file is attempted even if an earlier one fails; the process then exits with a non-zero status when any of them failed to update."
)]
pub struct Cli {
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub steam_api_key: String,
    #[arg(long, env = "STEAM_ID")]
    pub steam_id: u64,
    #[arg(long, env = "APP_ID", default_value = "")]
    pub app_ids: String,
    #[arg(long, env = "GH_USER", default_value = "")]
    pub gh_user: String,
    #[arg(long, env = "GH_TOKEN", hide_env_values = true, default_value = "")]
    pub gh_token: String,
    #[arg(long, env = "GIST_ID", default_value = "")]
    pub gist_id: String,
    #[arg(long, env = "STEAM_OPTION", default_value = "ALLTIME")]
    pub steam_option: String,
    #[arg(long, env = "MULTILINE", default_value = "")]
    pub multiline: String,
    #[arg(long, env = "UPDATE_OPTION", default_value = "")]
    pub update_option: String,
    #[arg(long, env = "MARKDOWN_FILE", default_value = "")]
    pub markdown_file: String,
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
    #[arg(long, env = "STEAMBOX_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub player_id: u64,
    pub app_ids: Vec<u32>,
    pub mode: Mode,
    pub layout: Layout,
    pub target: OutputTarget,
    pub gist_id: String,
    pub documents: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub steam_api_key: String,
    pub gh_user: String,
    pub gh_token: String,
    pub http_timeout: Duration,
}

impl Cli {
    pub fn into_parts(self) -> Result<(Config, Credentials), ConfigError> {
        let target = parse_target(&self.update_option);
        let gist_id = self.gist_id.trim().to_string();
        if target.includes_paste() {
            if gist_id.is_empty() {
                return Err(ConfigError::MissingGistSetting("GIST_ID"));
            }
            if self.gh_token.trim().is_empty() {
                return Err(ConfigError::MissingGistSetting("GH_TOKEN"));
            }
        }

        let config = Config {
            player_id: self.steam_id,
            app_ids: parse_app_ids(&self.app_ids),
            mode: parse_mode(&self.steam_option)?,
            layout: parse_layout(&self.multiline),
            target,
            gist_id,
            documents: parse_documents(&self.markdown_file),
        };
        let credentials = Credentials {
            steam_api_key: self.steam_api_key,
            gh_user: self.gh_user,
            gh_token: self.gh_token,
            http_timeout: Duration::from_secs(self.http_timeout_secs),
        };
        Ok((config, credentials))
    }
}

pub fn parse_mode(raw: &str) -> Result<Mode, ConfigError> {
    match raw.trim() {
        "" | "ALLTIME" => Ok(Mode::AllTime),
        "RECENT" => Ok(Mode::Recent),
        other => Err(ConfigError::UnknownMode(other.to_string())),
    }
}

pub fn parse_layout(raw: &str) -> Layout {
    if raw.trim() == "YES" {
        Layout::MultiLine
    } else {
        Layout::SingleLine
    }
}

/// Anything other than the two Markdown options publishes to the gist only.
pub fn parse_target(raw: &str) -> OutputTarget {
    match raw.trim() {
        "MARKDOWN" => OutputTarget::DocumentOnly,
        "GIST_AND_MARKDOWN" => OutputTarget::Both,
        _ => OutputTarget::PasteOnly,
    }
}

pub fn parse_app_ids(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .collect()
}

pub fn parse_documents(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Cli {
        Cli {
            steam_api_key: "key".into(),
            steam_id: 76561198000000000,
            app_ids: String::new(),
            gh_user: String::new(),
            gh_token: String::new(),
            gist_id: String::new(),
            steam_option: "ALLTIME".into(),
            multiline: String::new(),
            update_option: String::new(),
            markdown_file: String::new(),
            http_timeout_secs: 30,
            log_dir: None,
        }
    }

    #[test]
    fn app_ids_skip_unparsable_entries() {
        assert_eq!(parse_app_ids("730, 570,abc,,-1,4294967296"), vec![730, 570]);
        assert!(parse_app_ids("").is_empty());
    }

    #[test]
    fn documents_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_documents(" README.md , ,docs/a.md,"),
            vec![PathBuf::from("README.md"), PathBuf::from("docs/a.md")]
        );
    }

    #[test]
    fn option_strings_map_to_enums() {
        assert_eq!(parse_mode("ALLTIME"), Ok(Mode::AllTime));
        assert_eq!(parse_mode(""), Ok(Mode::AllTime));
        assert_eq!(parse_mode("RECENT"), Ok(Mode::Recent));
        assert_eq!(
            parse_mode("weekly"),
            Err(ConfigError::UnknownMode("weekly".to_string()))
        );

        assert_eq!(parse_layout("YES"), Layout::MultiLine);
        assert_eq!(parse_layout("NO"), Layout::SingleLine);
        assert_eq!(parse_layout(""), Layout::SingleLine);

        assert_eq!(parse_target("MARKDOWN"), OutputTarget::DocumentOnly);
        assert_eq!(parse_target("GIST_AND_MARKDOWN"), OutputTarget::Both);
        assert_eq!(parse_target("GIST"), OutputTarget::PasteOnly);
        assert_eq!(parse_target("whatever"), OutputTarget::PasteOnly);
    }

    #[test]
    fn gist_output_requires_gist_settings() {
        let err = cli().into_parts().unwrap_err();
        assert_eq!(err, ConfigError::MissingGistSetting("GIST_ID"));

        let err = Cli {
            gist_id: "abc".into(),
            ..cli()
        }
        .into_parts()
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingGistSetting("GH_TOKEN"));

        let (config, _) = Cli {
            gist_id: " abc ".into(),
            gh_token: "token".into(),
            ..cli()
        }
        .into_parts()
        .unwrap();
        assert_eq!(config.target, OutputTarget::PasteOnly);
        assert_eq!(config.gist_id, "abc");
    }

    #[test]
    fn markdown_only_needs_no_gist() {
        let (config, credentials) = Cli {
            update_option: "MARKDOWN".into(),
            markdown_file: "README.md".into(),
            multiline: "YES".into(),
            steam_option: "RECENT".into(),
            ..cli()
        }
        .into_parts()
        .unwrap();
        assert_eq!(config.target, OutputTarget::DocumentOnly);
        assert_eq!(config.layout, Layout::MultiLine);
        assert_eq!(config.mode, Mode::Recent);
        assert_eq!(config.documents, vec![PathBuf::from("README.md")]);
        assert_eq!(config.player_id, 76561198000000000);
        assert_eq!(credentials.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn help_mentions_document_failure_exit_status() {
        use clap::CommandFactory;

        let help = Cli::command()
            .get_after_help()
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(help.contains("non-zero status when any of them failed to update"));
    }

    #[test]
    fn flags_parse_into_cli_fields() {
        let parsed = Cli::try_parse_from([
            "steambox",
            "--steam-api-key",
            "key",
            "--steam-id",
            "42",
            "--app-ids",
            "730,570",
            "--http-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(parsed.steam_api_key, "key");
        assert_eq!(parsed.steam_id, 42);
        assert_eq!(parsed.app_ids, "730,570");
        assert_eq!(parsed.http_timeout_secs, 5);
    }
}
