use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use jobsearch_core::{update, AppState, AppViewModel, Effect, Msg, Translations};
use search_logging::{search_debug, search_info};

use super::clipboard::SystemClipboard;
use super::effects::EffectRunner;
use super::ui;
use super::ui::commands::{self, UiCommand};
use crate::config::AppConfig;

#[derive(Debug)]
pub enum AppEvent {
    /// A line typed by the user.
    Input(String),
    /// Standard input reached end of file.
    InputClosed,
    /// A message produced by an effect.
    Core(Msg),
}

pub fn run_app(config: AppConfig, initial_query: Option<String>) -> anyhow::Result<()> {
    let translations = Translations::new(config.locale);
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(
        config.gateway_settings(),
        Arc::new(SystemClipboard::default()),
        event_tx.clone(),
    )?;
    search_info!("Starting against {}", config.endpoint);

    let mut app = App::new(Box::new(effects), translations);
    app.present(&mut io::stdout())?;
    if let Some(query) = initial_query {
        app.dispatch(Msg::InputChanged(query));
        app.dispatch(Msg::SearchSubmitted);
        app.present(&mut io::stdout())?;
    }

    spawn_input_reader(event_tx);

    for event in event_rx {
        let keep_running = match event {
            AppEvent::Input(line) => app.handle_line(&line),
            AppEvent::InputClosed => false,
            AppEvent::Core(msg) => {
                app.dispatch(msg);
                true
            }
        };
        app.present(&mut io::stdout())?;
        if !keep_running {
            break;
        }
    }

    search_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Where the app loop hands the effects returned by `update`.
pub trait EffectSink {
    fn enqueue(&self, effects: Vec<Effect>);
}

impl EffectSink for EffectRunner {
    fn enqueue(&self, effects: Vec<Effect>) {
        EffectRunner::enqueue(self, effects);
    }
}

struct App {
    state: AppState,
    view: AppViewModel,
    effects: Box<dyn EffectSink>,
    translations: Translations,
    notice: Option<String>,
}

impl App {
    fn new(effects: Box<dyn EffectSink>, translations: Translations) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            effects,
            translations,
            notice: Some(commands::HELP.to_string()),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        search_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match commands::parse(line) {
            Ok(UiCommand::Quit) => false,
            Ok(UiCommand::Help) => {
                self.notice = Some(commands::HELP.to_string());
                true
            }
            Ok(command) => {
                match commands::to_msgs(command, &self.view) {
                    Ok(msgs) => msgs.into_iter().for_each(|msg| self.dispatch(msg)),
                    Err(hint) => self.notice = Some(hint),
                }
                true
            }
            Err(hint) => {
                self.notice = Some(hint);
                true
            }
        }
    }

    /// Redraws when state changed or a notice is pending.
    fn present(&mut self, out: &mut impl Write) -> io::Result<()> {
        let dirty = self.state.consume_dirty();
        if !dirty && self.notice.is_none() {
            return Ok(());
        }
        if dirty {
            self.view = self.state.view();
        }
        let mut screen = ui::render::render(&self.view, &self.translations);
        if let Some(notice) = self.notice.take() {
            screen.push('\n');
            screen.push_str(&notice);
            screen.push('\n');
        }
        write!(out, "{screen}")?;
        write!(out, "> ")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::{App, EffectSink};
    use crate::platform::ui::commands::HELP;
    use jobsearch_core::{Effect, Locale, Translations};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingSink {
        effects: Rc<RefCell<Vec<Effect>>>,
    }

    impl EffectSink for RecordingSink {
        fn enqueue(&self, effects: Vec<Effect>) {
            self.effects.borrow_mut().extend(effects);
        }
    }

    fn app() -> (App, RecordingSink) {
        let sink = RecordingSink::default();
        let app = App::new(Box::new(sink.clone()), Translations::new(Locale::En));
        (app, sink)
    }

    fn present(app: &mut App) -> String {
        let mut out = Vec::new();
        app.present(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_screen_shows_help_once() {
        let (mut app, _) = app();
        let screen = present(&mut app);
        assert!(screen.contains(HELP));
        assert!(screen.ends_with("> "));

        assert_eq!(present(&mut app), "");
    }

    #[test]
    fn search_line_emits_effect_and_redraws() {
        let (mut app, sink) = app();
        present(&mut app);

        assert!(app.handle_line("rust"));
        assert_eq!(
            *sink.effects.borrow(),
            vec![Effect::Search {
                request_id: 1,
                query: "rust".to_string()
            }]
        );
        let screen = present(&mut app);
        assert!(screen.contains("> rust"));
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains(HELP));
    }

    #[test]
    fn rejected_command_shows_hint_without_effects() {
        let (mut app, sink) = app();
        present(&mut app);

        assert!(app.handle_line(":next"));
        assert!(sink.effects.borrow().is_empty());
        assert!(present(&mut app).contains("There are no results to page through"));
        assert_eq!(present(&mut app), "");
    }

    #[test]
    fn help_redraws_and_quit_stops() {
        let (mut app, _) = app();
        present(&mut app);

        assert!(app.handle_line(":help"));
        assert!(present(&mut app).contains(HELP));
        assert!(!app.handle_line(":q"));
    }
}
