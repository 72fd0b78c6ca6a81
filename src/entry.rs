//! Headless model of the calculator's text field and result labels.
//!
//! [`NumEntry`] filters keystrokes the way the input box does; [`FactsView`]
//! holds the five strings the labels display after an update.

use crate::models::Network;
use crate::report::{Fact, Report, Selection};

/// Text shown in every result label when the input cannot be evaluated.
pub const INVALID_PLACEHOLDER: &str = "Wrong IP";

/// Punctuation allowed between digits.
pub const SUPPORTED_CHARS: [char; 3] = ['.', '/', ' '];

/// Separators that may appear only once in the text.
const SINGLE_USE_CHARS: [char; 2] = ['/', ' '];

/// Text field that only accepts digits and address punctuation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumEntry {
    text: String,
}

impl NumEntry {
    pub fn new() -> NumEntry {
        NumEntry::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append `substring` if allowed; returns whether the text changed.
    pub fn insert_text(&mut self, substring: &str) -> bool {
        if substring.is_empty() {
            return false;
        }
        if substring.chars().all(|c| c.is_ascii_digit()) {
            self.text.push_str(substring);
            return true;
        }
        let mut chars = substring.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            log::debug!("insert_text rejected {substring:?}");
            return false;
        };
        if !SUPPORTED_CHARS.contains(&c) {
            log::debug!("insert_text rejected {c:?}");
            return false;
        }
        if SINGLE_USE_CHARS.contains(&c) && self.text.contains(c) {
            log::debug!("insert_text rejected repeated {c:?}");
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Display strings for the five facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsView {
    pub network_address: String,
    pub broadcast_address: String,
    pub first_host: String,
    pub last_host: String,
    pub max_hosts: String,
}

impl Default for FactsView {
    fn default() -> Self {
        FactsView::filled("")
    }
}

impl FactsView {
    fn filled(value: &str) -> FactsView {
        FactsView {
            network_address: value.to_string(),
            broadcast_address: value.to_string(),
            first_host: value.to_string(),
            last_host: value.to_string(),
            max_hosts: value.to_string(),
        }
    }

    /// Recompute every label from the field text (`addr/prefix` or `addr mask`).
    pub fn update(&mut self, text: &str) {
        let tokens: Vec<&str> = text.split(' ').collect();
        let report = Network::from_args(&tokens)
            .and_then(|net| Report::build(&net, &Selection::all()));
        match report {
            Ok(report) => {
                let value = |fact| report.value(fact).unwrap_or_default();
                self.network_address = value(Fact::Network);
                self.broadcast_address = value(Fact::Broadcast);
                self.first_host = value(Fact::FirstHost);
                self.last_host = value(Fact::LastHost);
                self.max_hosts = value(Fact::HostCount);
            }
            Err(e) => {
                log::warn!("Wrong IP {text:?}: {e}");
                *self = FactsView::filled(INVALID_PLACEHOLDER);
            }
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.network_address == INVALID_PLACEHOLDER
    }
}
