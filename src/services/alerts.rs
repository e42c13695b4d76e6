//! Telegram alert sink for confirmed signals.
//!
//! Delivery is best-effort: failures are logged as warnings and never
//! affect the scan cycle.

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::models::{SignalLabel, SignalResult};
use crate::services::market_data::MarketDataError;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

pub struct TelegramAlerter {
    client: Client,
    base_url: Url,
    bot_token: String,
    chat_id: String,
}

impl TelegramAlerter {
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, MarketDataError> {
        Self::with_base_url(DEFAULT_BASE_URL, bot_token, chat_id)
    }

    pub fn with_base_url(
        base_url: &str,
        bot_token: &str,
        chat_id: &str,
    ) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MarketDataError::Malformed(format!("alert base url: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    /// Push a plain-text notification. Never fails the caller.
    pub async fn send(&self, text: &str) {
        let path = format!("/bot{}/sendMessage", self.bot_token);
        let url = match self.base_url.join(&path) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "alert delivery skipped: bad url");
                return;
            }
        };

        let form = [("chat_id", self.chat_id.as_str()), ("text", text)];
        match self.client.post(url).form(&form).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("alert delivered");
            }
            Ok(response) => {
                warn!(status = %response.status(), "alert delivery rejected");
            }
            Err(e) => {
                warn!(error = %e, "alert delivery failed");
            }
        }
    }
}

/// Notification text for a confirmed signal.
pub fn alert_text(result: &SignalResult) -> String {
    let side = match result.label {
        SignalLabel::ConfirmedLong => "LONG",
        SignalLabel::ConfirmedShort => "SHORT",
        _ => "SIGNAL",
    };
    let levels = match (result.entry, result.stop_loss, result.take_profit) {
        (Some(entry), Some(sl), Some(tp)) => {
            format!(" entry {entry:.3}, SL {sl:.3}, TP {tp:.3}")
        }
        _ => String::new(),
    };
    format!(
        "{side} {symbol} @ {price:.3} (score {score}){levels}",
        symbol = result.symbol,
        price = result.price,
        score = result.score,
    )
}
