//! Interactive session handling
//!
//! One line of input is one trigger. Plain text asks about the weather;
//! lines starting with `/` are commands.

use std::path::PathBuf;

use application::{CycleReport, SessionContext, WeatherAssistant};
use domain::{SummaryText, Voice};
use tracing::{debug, warn};

use crate::render::{render_notice, render_report, summary_slot};

pub const HELP: &str = "\
Ask about the weather in plain words, e.g. \"Do I need an umbrella in Paris?\"

Commands:
  /locate          detect your city and use it for every following question
  /listen [FILE]   read the last answer aloud (saves MP3 to FILE)
  /voice [NAME]    show or pick a voice: Rachel, Bella, Antoni, Daniel
  /help            show this help
  /quit            exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Ask(String),
    Locate,
    Listen(Option<PathBuf>),
    Voice(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Self::Ask(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (command, None),
        };

        match name.to_lowercase().as_str() {
            "locate" | "location" => Self::Locate,
            "listen" => Self::Listen(arg.map(PathBuf::from)),
            "voice" => Self::Voice(arg.map(str::to_string)),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the output (may be empty) and read the next line
    Continue(String),
    Quit,
}

/// State of one interactive session
pub struct Repl<'a> {
    assistant: &'a WeatherAssistant,
    ctx: SessionContext,
    voice: Voice,
    last_summary: Option<SummaryText>,
}

impl<'a> Repl<'a> {
    pub fn new(assistant: &'a WeatherAssistant, voice: Voice) -> Self {
        Self {
            assistant,
            ctx: SessionContext::new(),
            voice,
            last_summary: None,
        }
    }

    pub const fn voice(&self) -> Voice {
        self.voice
    }

    pub fn location(&self) -> Option<&str> {
        self.ctx.location()
    }

    pub async fn handle(&mut self, line: &str) -> Step {
        let input = Input::parse(line);
        debug!(?input, "Handling input");

        let output = match input {
            Input::Ask(text) => {
                let report = self.assistant.submit(&self.ctx, &text).await;
                self.remember(&report);
                render_report(&report)
            },
            Input::Locate => {
                let report = self.assistant.detect_location(&mut self.ctx).await;
                self.remember(&report);
                match self.ctx.location() {
                    Some(city) if !report.is_idle() => {
                        format!("📍 Using location: {city}\n\n{}", render_report(&report))
                    },
                    _ => render_report(&report),
                }
            },
            Input::Listen(path) => self.listen(path).await,
            Input::Voice(None) => {
                let names: Vec<&str> = Voice::ALL.iter().map(|v| v.name()).collect();
                format!("🎙️  Voice: {} (available: {})", self.voice, names.join(", "))
            },
            Input::Voice(Some(name)) => match name.parse::<Voice>() {
                Ok(voice) => {
                    self.voice = voice;
                    format!("🎙️  Voice set to {voice}")
                },
                Err(e) => format!("❌ {e}"),
            },
            Input::Help => HELP.to_string(),
            Input::Quit => return Step::Quit,
            Input::Unknown(name) => format!("❌ Unknown command: /{name} (try /help)"),
        };

        Step::Continue(output)
    }

    /// Keep the summary slot of a new cycle; an idle cycle changes nothing
    fn remember(&mut self, report: &CycleReport) {
        if !report.is_idle() {
            self.last_summary = summary_slot(report);
        }
    }

    async fn listen(&self, path: Option<PathBuf>) -> String {
        let Some(summary) = &self.last_summary else {
            return "Nothing to read yet. Ask about the weather first.".to_string();
        };

        if !self.assistant.speech_enabled() {
            return "🔇 Speech is disabled (no ElevenLabs API key configured).".to_string();
        }

        let outcome = self.assistant.listen(summary, self.voice).await;

        if let Some(notice) = &outcome.notice {
            return render_notice(notice);
        }
        let Some(audio) = outcome.audio else {
            return "🔇 Nothing to read aloud.".to_string();
        };

        match path {
            Some(path) => match tokio::fs::write(&path, audio.bytes()).await {
                Ok(()) => format!(
                    "🔊 Saved {} bytes of {} to {}",
                    audio.len(),
                    audio.mime_type(),
                    path.display()
                ),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to write audio");
                    format!("❌ Couldn't write audio to {}: {e}", path.display())
                },
            },
            None => format!(
                "🔊 Audio ready ({} bytes, {}). Use /listen <file.mp3> to save it.",
                audio.len(),
                audio.mime_type()
            ),
        }
    }
}
