use std::path::{Path, PathBuf};
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::image;
use iced::{Element, Subscription, Task, Theme};

use signbridge_core::audio::domain::endpointer::EndpointerConfig;
use signbridge_core::audio::infrastructure::cloud_recognizer::RecognizerConfig;
use signbridge_core::dispatch::domain::dispatcher::{Dispatcher, PlaybackRoute};
use signbridge_core::shared::constants::LETTER_HOLD;
use signbridge_core::visuals::domain::animation::Animation;
use signbridge_core::visuals::domain::phrase_library::PhraseLibrary;
use signbridge_core::visuals::domain::spelling::SpellingSequence;
use signbridge_core::visuals::infrastructure::gif_loader::load_animation;
use signbridge_core::visuals::infrastructure::letter_image_loader::load_letter;

use crate::theme;
use crate::views;
use crate::workers::listen_worker::{self, ListenEvent, ListenParams};

/// Fixed resource layout. Changing these paths is a breaking change.
const ANIMATIONS_DIR: &str = "assets/phrases";
const LETTERS_DIR: &str = "assets/letters";

/// How often the UI drains the listen worker's channel.
const LISTEN_POLL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    StartListening,
    PollListener,
    AnimationTick,
    SpellingTick,
    ClosePlayback,
    Quit,
}

// ---------------------------------------------------------------------------
// Playback state
// ---------------------------------------------------------------------------

/// A phrase animation on screen: decoded frames from core plus the
/// pre-built iced handles, advanced by a timed subscription.
pub struct AnimationPlayback {
    phrase: String,
    animation: Animation,
    handles: Vec<image::Handle>,
}

impl AnimationPlayback {
    fn new(phrase: String, animation: Animation) -> Self {
        let handles = animation
            .frames()
            .iter()
            .map(|f| image::Handle::from_rgba(f.width(), f.height(), f.rgba().to_vec()))
            .collect();
        Self {
            phrase,
            animation,
            handles,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn current_handle(&self) -> image::Handle {
        self.handles[self.animation.current_index()].clone()
    }

    pub fn current_index(&self) -> usize {
        self.animation.current_index()
    }

    pub fn frame_count(&self) -> usize {
        self.animation.frame_count()
    }

    fn delay(&self) -> Duration {
        self.animation.current_delay()
    }

    fn advance(&mut self) {
        self.animation.advance();
    }
}

/// The letter-sequence surface: the spelling plan plus the image for the
/// letter currently held on screen.
pub struct SpellingPlayback {
    sequence: SpellingSequence,
    current: Option<(char, image::Handle)>,
}

impl SpellingPlayback {
    pub fn current_letter(&self) -> Option<char> {
        self.current.as_ref().map(|(letter, _)| *letter)
    }

    pub fn current_handle(&self) -> Option<image::Handle> {
        self.current.as_ref().map(|(_, handle)| handle.clone())
    }

    pub fn position(&self) -> usize {
        self.sequence.position()
    }

    pub fn total(&self) -> usize {
        self.sequence.len()
    }
}

pub enum Playback {
    Idle,
    Animation(AnimationPlayback),
    Spelling(SpellingPlayback),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenState {
    Idle,
    Calibrating,
    Listening,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The whole application context: recognizer config, dispatch table, and
/// the per-cycle listening and playback state. Built once at startup.
pub struct App {
    dispatcher: Dispatcher,
    letters_dir: PathBuf,
    recognizer: RecognizerConfig,
    log: Vec<String>,
    listen_state: ListenState,
    listen_rx: Option<Receiver<ListenEvent>>,
    playback: Playback,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_resources(Path::new(ANIMATIONS_DIR), Path::new(LETTERS_DIR));
        (app, Task::none())
    }

    fn with_resources(animations_dir: &Path, letters_dir: &Path) -> Self {
        let recognizer = RecognizerConfig {
            api_key: std::env::var("SIGNBRIDGE_API_KEY").ok(),
            ..RecognizerConfig::default()
        };
        Self {
            dispatcher: Dispatcher::new(PhraseLibrary::scan(animations_dir)),
            letters_dir: letters_dir.to_path_buf(),
            recognizer,
            log: Vec::new(),
            listen_state: ListenState::Idle,
            listen_rx: None,
            playback: Playback::Idle,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartListening => {
                if self.listen_rx.is_none() {
                    self.listen_state = ListenState::Calibrating;
                    self.listen_rx = Some(listen_worker::spawn(ListenParams {
                        device_name: None,
                        recognizer: self.recognizer.clone(),
                        endpointer: EndpointerConfig::default(),
                    }));
                }
            }
            Message::PollListener => {
                let events: Vec<ListenEvent> = match &self.listen_rx {
                    Some(rx) => rx.try_iter().collect(),
                    None => Vec::new(),
                };
                for event in events {
                    self.apply_listen_event(event);
                }
            }
            Message::AnimationTick => {
                if let Playback::Animation(playback) = &mut self.playback {
                    playback.advance();
                }
            }
            Message::SpellingTick => {
                self.spelling_tick();
            }
            Message::ClosePlayback => {
                self.playback = Playback::Idle;
            }
            Message::Quit => {
                return iced::exit();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::main_view::view(
            self.listen_state,
            &self.log,
            &self.playback,
            self.listen_rx.is_some(),
        )
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();

        if self.listen_rx.is_some() {
            subs.push(iced::time::every(LISTEN_POLL).map(|_| Message::PollListener));
        }

        // Playback loops are deferred reschedules, not sleeps: each tick
        // arrives as a message, so the interface stays responsive and
        // closing the surface removes the subscription for good.
        match &self.playback {
            Playback::Animation(playback) => {
                subs.push(iced::time::every(playback.delay()).map(|_| Message::AnimationTick));
            }
            Playback::Spelling(_) => {
                subs.push(iced::time::every(LETTER_HOLD).map(|_| Message::SpellingTick));
            }
            Playback::Idle => {}
        }

        Subscription::batch(subs)
    }

    fn apply_listen_event(&mut self, event: ListenEvent) {
        match event {
            ListenEvent::Calibrating => {
                self.listen_state = ListenState::Calibrating;
            }
            ListenEvent::Listening => {
                self.listen_state = ListenState::Listening;
                self.push_log("Say something...");
            }
            ListenEvent::Transcribed(raw) => {
                self.finish_listening();
                self.handle_transcript(&raw);
            }
            ListenEvent::Failed(message) => {
                self.finish_listening();
                self.push_log(message);
            }
        }
    }

    /// The listening indicator reverts on every exit path.
    fn finish_listening(&mut self) {
        self.listen_state = ListenState::Idle;
        self.listen_rx = None;
    }

    fn handle_transcript(&mut self, raw: &str) {
        let (normalized, route) = self.dispatcher.route(raw);
        self.push_log(format!("You said: {normalized}"));

        match route {
            PlaybackRoute::Farewell => {
                self.push_log("Goodbye!");
            }
            PlaybackRoute::Animation(path) => match load_animation(&path) {
                Ok(animation) => {
                    self.playback =
                        Playback::Animation(AnimationPlayback::new(normalized, animation));
                }
                Err(e) => {
                    log::warn!("animation playback failed: {e}");
                    self.push_log(format!("Cannot play animation: {e}"));
                }
            },
            PlaybackRoute::Spelling(text) => {
                self.start_spelling(&text);
            }
        }
    }

    fn start_spelling(&mut self, text: &str) {
        let sequence = SpellingSequence::plan(text);
        if sequence.is_empty() {
            // Zero steps, no visible output, returns immediately.
            self.playback = Playback::Idle;
            return;
        }

        let mut playback = SpellingPlayback {
            sequence,
            current: None,
        };
        if self.load_current_letter(&mut playback) {
            self.playback = Playback::Spelling(playback);
        } else {
            self.playback = Playback::Idle;
        }
    }

    fn spelling_tick(&mut self) {
        match std::mem::replace(&mut self.playback, Playback::Idle) {
            Playback::Spelling(mut playback) => {
                playback.sequence.advance();
                if self.load_current_letter(&mut playback) {
                    self.playback = Playback::Spelling(playback);
                }
                // Otherwise the sequence is done and the surface closes.
            }
            other => self.playback = other,
        }
    }

    /// Load the image for the current letter, skipping letters whose image
    /// is missing or unreadable (each skip gets its own log line, prior
    /// letters are unaffected). Returns false once the sequence is spent.
    fn load_current_letter(&mut self, playback: &mut SpellingPlayback) -> bool {
        while let Some(letter) = playback.sequence.current() {
            match load_letter(&self.letters_dir, letter) {
                Ok(frame) => {
                    let handle =
                        image::Handle::from_rgba(frame.width(), frame.height(), frame.into_rgba());
                    playback.current = Some((letter, handle));
                    return true;
                }
                Err(e) => {
                    log::warn!("letter playback: {e}");
                    self.push_log(format!("No sign image for '{letter}', skipping."));
                    playback.sequence.advance();
                }
            }
        }
        false
    }

    fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}
