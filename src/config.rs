//! Environment-driven application configuration

use crate::constants::carousel as layout;
use thiserror::Error;

/// Errors raised while parsing configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {source}")]
    InvalidCount {
        name: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Cards advanced per arrow press
    pub cards_per_page: usize,
    /// Animate paging instead of jumping
    pub smooth_scroll: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cards_per_page: layout::CARDS_PER_PAGE,
            smooth_scroll: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment. Invalid values log a
    /// warning and fall back to the defaults.
    pub fn from_environment() -> Self {
        let defaults = Self::default();

        let cards_per_page = match std::env::var("CARD_CAROUSEL_CARDS_PER_PAGE") {
            Ok(raw) => match parse_cards_per_page(&raw) {
                Ok(count) => count,
                Err(error) => {
                    log::warn!("{error}, using {}", defaults.cards_per_page);
                    defaults.cards_per_page
                }
            },
            Err(_) => defaults.cards_per_page,
        };

        let smooth_scroll = std::env::var("CARD_CAROUSEL_SMOOTH")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(defaults.smooth_scroll);

        Self {
            cards_per_page,
            smooth_scroll,
        }
    }
}

fn parse_cards_per_page(raw: &str) -> Result<usize, ConfigError> {
    let count: usize = raw.trim().parse().map_err(|source| ConfigError::InvalidCount {
        name: "CARD_CAROUSEL_CARDS_PER_PAGE",
        value: raw.to_string(),
        source,
    })?;

    Ok(count.clamp(layout::MIN_CARDS_PER_PAGE, layout::MAX_CARDS_PER_PAGE))
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
