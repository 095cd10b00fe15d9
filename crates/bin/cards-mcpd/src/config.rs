use clap::{Parser, builder::BoolishValueParser};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_CALL_ARGUMENTS: &str = "{}";

#[derive(Parser, Debug)]
#[command(name = "cards-mcpd", version, about = "Open Credit Cards MCP daemon.")]
#[allow(clippy::struct_excessive_bools)]
struct CliArgs {
    /// Serve MCP over stdio. Takes precedence over `--mcp-serve`.
    #[arg(
        long = "stdio",
        env = "CARDS_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "CARDS_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "CARDS_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "CARDS_STATEFUL_MODE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    stateful_mode: bool,

    #[arg(
        long,
        env = "CARDS_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(long, env = "CARDS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[arg(long, env = "CARDS_LOG")]
    log_filter: Option<String>,

    /// Run a single tool and print its result instead of serving.
    #[arg(long)]
    call: Option<String>,

    /// JSON arguments for `--call`.
    #[arg(long, default_value = DEFAULT_CALL_ARGUMENTS)]
    arguments: String,
}

/// A one-shot tool invocation requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub tool: String,
    pub arguments: Value,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CardsConfig {
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub data_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub call: Option<ToolInvocation>,
}

#[derive(Debug)]
pub enum ConfigError {
    NothingToServe,
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToServe => write!(
                f,
                "nothing to do: enable --stdio, --mcp-serve, or pass --call"
            ),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl CardsConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for CardsConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let data_dir = args
            .data_dir
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty());
        let log_filter = args.log_filter.filter(|value| !value.trim().is_empty());

        if let Some(filter) = log_filter.as_deref()
            && EnvFilter::try_new(filter).is_err()
        {
            return Err(ConfigError::InvalidSetting {
                name: "CARDS_LOG",
                value: filter.to_string(),
            });
        }

        let call = args
            .call
            .filter(|tool| !tool.trim().is_empty())
            .map(|tool| {
                serde_json::from_str(&args.arguments)
                    .map(|arguments| ToolInvocation { tool, arguments })
                    .map_err(|_| ConfigError::InvalidSetting {
                        name: "--arguments",
                        value: args.arguments.clone(),
                    })
            })
            .transpose()?;

        if call.is_none() && !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::NothingToServe);
        }

        let sse_keep_alive = if args.sse_keep_alive_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_keep_alive_secs))
        };

        // stdout belongs to the stdio transport, so HTTP is not started alongside it.
        let mcp_serve = args.mcp_serve && !args.enable_stdio;

        Ok(Self {
            enable_stdio: args.enable_stdio,
            mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            stateful_mode: args.stateful_mode,
            sse_keep_alive,
            data_dir,
            log_filter,
            call,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: false,
            mcp_serve: true,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            stateful_mode: false,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
            data_dir: None,
            log_filter: None,
            call: None,
            arguments: DEFAULT_CALL_ARGUMENTS.to_string(),
        }
    }

    #[test]
    fn defaults_serve_http_from_embedded_data() {
        let config = CardsConfig::try_from(base_args()).expect("config should parse");
        assert!(config.mcp_serve);
        assert!(!config.enable_stdio);
        assert!(config.data_dir.is_none());
        assert!(config.call.is_none());
        assert_eq!(config.sse_keep_alive, Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_data_dir_is_ignored() {
        let mut args = base_args();
        args.data_dir = Some(PathBuf::from("  "));
        let config = CardsConfig::try_from(args).expect("config should parse");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn stdio_takes_precedence_over_http() {
        let mut args = base_args();
        args.enable_stdio = true;
        let config = CardsConfig::try_from(args).expect("config should parse");
        assert!(config.enable_stdio);
        assert!(!config.mcp_serve);
    }

    #[test]
    fn zero_keep_alive_disables_it() {
        let mut args = base_args();
        args.sse_keep_alive_secs = 0;
        let config = CardsConfig::try_from(args).expect("config should parse");
        assert!(config.sse_keep_alive.is_none());
    }

    #[test]
    fn rejects_config_with_nothing_to_serve() {
        let mut args = base_args();
        args.mcp_serve = false;
        let err = CardsConfig::try_from(args).expect_err("config should fail");
        assert!(matches!(err, ConfigError::NothingToServe));
    }

    #[test]
    fn call_parses_json_arguments() {
        let mut args = base_args();
        args.mcp_serve = false;
        args.call = Some("search_credit_cards".to_string());
        args.arguments = r#"{"network": "Visa"}"#.to_string();
        let config = CardsConfig::try_from(args).expect("config should parse");
        assert_eq!(
            config.call,
            Some(ToolInvocation {
                tool: "search_credit_cards".to_string(),
                arguments: json!({ "network": "Visa" }),
            })
        );
    }

    #[test]
    fn call_rejects_invalid_json() {
        let mut args = base_args();
        args.call = Some("get_credit_card".to_string());
        args.arguments = "{card_id".to_string();
        let err = CardsConfig::try_from(args).expect_err("config should fail");
        assert!(matches!(err, ConfigError::InvalidSetting { name: "--arguments", .. }));
    }

    #[test]
    fn rejects_invalid_log_filter() {
        let mut args = base_args();
        args.log_filter = Some("cards=loudest".to_string());
        let err = CardsConfig::try_from(args).expect_err("config should fail");
        assert!(matches!(err, ConfigError::InvalidSetting { name: "CARDS_LOG", .. }));
    }
}
