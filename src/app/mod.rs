// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and settings.
//!
//! The `App` struct owns the CV document, the form's UI state and the
//! cross-cutting services (localization, preferences, notifications), and
//! turns messages into side effects such as file dialogs or persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::cv::CvDocument;
use crate::i18n::fluent::I18n;
use crate::ui::form;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::state::drag_reorder::AutoscrollSettings;
use crate::ui::theming::ThemeMode;
use chrono::NaiveDate;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    settings: settings::State,
    document: CvDocument,
    /// Where the document was last loaded from or saved to.
    document_path: Option<PathBuf>,
    /// Unsaved changes since the last load/save.
    dirty: bool,
    form: form::State,
    today: NaiveDate,
    autoscroll: AutoscrollSettings,
    window_height: f32,
    theme_mode: ThemeMode,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
    /// Explicit config/data directories; `None` uses the usual resolution.
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("document_path", &self.document_path)
            .field("dirty", &self.dirty)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called again, starting without flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let document = CvDocument::default();
        let today = today();
        Self {
            i18n: I18n::default(),
            screen: Screen::Editor,
            settings: settings::State::default(),
            form: form::State::new(&document, today),
            document,
            document_path: None,
            dirty: false,
            today,
            autoscroll: AutoscrollSettings::default(),
            window_height: WINDOW_DEFAULT_HEIGHT,
            theme_mode: ThemeMode::System,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            config_dir: None,
            data_dir: None,
        }
    }
}

impl App {
    /// Loads preferences and persisted state, then opens the document given on
    /// the command line or, failing that, the one open in the last session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::with_dirs(flags, None, None), Task::none())
    }

    fn with_dirs(flags: Flags, config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let (app_state, state_warning) = persisted_state::AppState::load_from(data_dir.clone());

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            settings: settings::State::new(config.general.theme_mode),
            theme_mode: config.general.theme_mode,
            autoscroll: AutoscrollSettings::from_config(&config.editor),
            app_state,
            config_dir,
            data_dir,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let startup_document = match flags.file_path {
            Some(path) => Some(PathBuf::from(path)),
            None => app
                .app_state
                .last_document
                .clone()
                .filter(|path| path.exists()),
        };
        if let Some(path) = startup_document {
            update::load_document(&mut app.update_context(), path);
        }

        app
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            settings: &mut self.settings,
            document: &mut self.document,
            document_path: &mut self.document_path,
            dirty: &mut self.dirty,
            form: &mut self.form,
            today: self.today,
            autoscroll: self.autoscroll,
            window_height: &mut self.window_height,
            theme_mode: &mut self.theme_mode,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            config_dir: self.config_dir.clone(),
            data_dir: self.data_dir.clone(),
        }
    }

    fn document_name(&self) -> Option<&str> {
        self.document_path
            .as_deref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let name = self
            .document_name()
            .map_or_else(|| self.i18n.tr("document-untitled"), str::to_string);
        let marker = if self.dirty { "*" } else { "" };
        format!("{marker}{name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let popup_open = self.screen == Screen::Editor && self.form.any_popup_open();
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_pointer_subscription(popup_open, self.form.is_dragging()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.today = today();

        match message {
            Message::Notification(msg) => {
                self.notifications.update(msg);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                Task::none()
            }
            message => {
                let mut ctx = self.update_context();
                match message {
                    Message::Form(msg) => update::handle_form_message(&mut ctx, msg),
                    Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
                    Message::Settings(msg) => update::handle_settings_message(&mut ctx, msg),
                    Message::OpenDialogResult(path) => {
                        update::handle_open_dialog_result(&mut ctx, path)
                    }
                    Message::SaveAsDialogResult(path) => {
                        update::handle_save_as_dialog_result(&mut ctx, path)
                    }
                    Message::PointerPressed => update::handle_pointer_pressed(&mut ctx),
                    Message::PointerReleased => update::handle_pointer_released(&mut ctx),
                    Message::CursorMoved(position) => {
                        update::handle_cursor_moved(&mut ctx, position)
                    }
                    Message::Notification(_) | Message::Tick(_) | Message::WindowResized(_) => {
                        Task::none()
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            settings: &self.settings,
            form: &self.form,
            document: &self.document,
            document_name: self.document_name(),
            dirty: self.dirty,
            today: self.today,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::{storage, Project};
    use crate::ui::navbar;
    use crate::ui::sections::{list, personal};
    use crate::ui::state::drag_reorder;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        app: App,
        config: TempDir,
        data: TempDir,
    }

    fn fixture(flags: Flags) -> Fixture {
        let config = tempdir().expect("config dir");
        let data = tempdir().expect("data dir");
        let flags = Flags {
            lang: flags.lang.or_else(|| Some("en-US".into())),
            ..flags
        };
        let app = App::with_dirs(
            flags,
            Some(config.path().to_path_buf()),
            Some(data.path().to_path_buf()),
        );
        Fixture { app, config, data }
    }

    fn write_document(dir: &TempDir, name: &str, names: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let doc = CvDocument {
            projects: names
                .iter()
                .map(|n| Project {
                    name: (*n).to_string(),
                    ..Project::default()
                })
                .collect(),
            ..CvDocument::default()
        };
        storage::save_to_path(&doc, &path).expect("write document");
        path
    }

    #[test]
    fn starts_on_editor_with_untitled_document() {
        let fx = fixture(Flags::default());
        assert_eq!(fx.app.screen, Screen::Editor);
        assert_eq!(fx.app.title(), "Untitled - IcedCV");
        assert!(!fx.app.notifications.has_notifications());
    }

    #[test]
    fn editing_marks_title_dirty() {
        let mut fx = fixture(Flags::default());
        let _ = fx.app.update(Message::Form(form::Message::Personal(
            personal::Message::Changed(personal::Field::FullName, "Ana".into()),
        )));
        assert!(fx.app.dirty);
        assert!(fx.app.title().starts_with('*'));
    }

    #[test]
    fn opens_file_from_command_line_and_remembers_it() {
        let docs = tempdir().unwrap();
        let path = write_document(&docs, "ana.cv.toml", &["A", "B"]);
        let fx = fixture(Flags {
            file_path: Some(path.display().to_string()),
            ..Flags::default()
        });

        assert_eq!(fx.app.document.projects.len(), 2);
        assert_eq!(fx.app.title(), "ana.cv.toml - IcedCV");
        assert_eq!(fx.app.app_state.last_document.as_deref(), Some(path.as_path()));

        let (state, _) = persisted_state::AppState::load_from(Some(fx.data.path().to_path_buf()));
        assert_eq!(state.last_document, Some(path));
    }

    #[test]
    fn reopens_last_document_on_startup() {
        let docs = tempdir().unwrap();
        let path = write_document(&docs, "last.cv.toml", &["A"]);
        let data = tempdir().unwrap();
        let mut state = persisted_state::AppState::default();
        state.remember_document(&path);
        assert!(state.save_to(Some(data.path().to_path_buf())).is_none());

        let config = tempdir().unwrap();
        let app = App::with_dirs(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            Some(config.path().to_path_buf()),
            Some(data.path().to_path_buf()),
        );
        assert_eq!(app.document_path, Some(path));
        assert_eq!(app.document.projects.len(), 1);
    }

    #[test]
    fn malformed_file_shows_error_and_keeps_empty_document() {
        let docs = tempdir().unwrap();
        let path = docs.path().join("broken.cv.toml");
        fs::write(&path, "projects = 3").unwrap();
        let fx = fixture(Flags {
            file_path: Some(path.display().to_string()),
            ..Flags::default()
        });
        assert!(fx.app.document_path.is_none());
        let keys: Vec<&str> = fx.app.notifications.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["notification-open-error"]);
    }

    #[test]
    fn invalid_config_warns_but_starts() {
        let config = tempdir().unwrap();
        fs::write(config.path().join("settings.toml"), "general = 5").unwrap();
        let data = tempdir().unwrap();
        let app = App::with_dirs(
            Flags::default(),
            Some(config.path().to_path_buf()),
            Some(data.path().to_path_buf()),
        );
        let keys: Vec<&str> = app.notifications.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["notification-config-load-error"]);
    }

    #[test]
    fn save_as_result_writes_file_and_clears_dirty() {
        let mut fx = fixture(Flags::default());
        let _ = fx.app.update(Message::Form(form::Message::Personal(
            personal::Message::Changed(personal::Field::FullName, "Ana".into()),
        )));
        let target = fx.data.path().join("out").join("ana");
        let _ = fx.app.update(Message::SaveAsDialogResult(Some(target.clone())));

        let saved = target.with_extension("cv.toml");
        assert!(saved.exists());
        assert!(!fx.app.dirty);
        assert_eq!(fx.app.document_path, Some(saved.clone()));
        let loaded = storage::load_from_path(&saved).unwrap();
        assert_eq!(loaded.personal.full_name, "Ana");
    }

    #[test]
    fn save_with_known_path_needs_no_dialog() {
        let docs = tempdir().unwrap();
        let path = write_document(&docs, "cv.cv.toml", &["A", "B"]);
        let mut fx = fixture(Flags {
            file_path: Some(path.display().to_string()),
            ..Flags::default()
        });

        let drag = |m| Message::Form(form::Message::Projects(list::Message::Drag(m)));
        let _ = fx.app.update(drag(drag_reorder::Message::Start(0)));
        let _ = fx.app.update(drag(drag_reorder::Message::Enter(1)));
        let _ = fx.app.update(drag(drag_reorder::Message::Drop(1)));
        assert!(fx.app.dirty);

        let _ = fx.app.update(Message::Navbar(navbar::Message::Save));
        assert!(!fx.app.dirty);
        let loaded = storage::load_from_path(&path).unwrap();
        let order: Vec<&str> = loaded.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn new_document_resets_everything() {
        let docs = tempdir().unwrap();
        let path = write_document(&docs, "cv.cv.toml", &["A"]);
        let mut fx = fixture(Flags {
            file_path: Some(path.display().to_string()),
            ..Flags::default()
        });
        let _ = fx.app.update(Message::Navbar(navbar::Message::New));
        assert!(fx.app.document.projects.is_empty());
        assert!(fx.app.document_path.is_none());
        assert!(fx.app.app_state.last_document.is_none());
    }

    #[test]
    fn settings_toggle_and_theme_persist() {
        let mut fx = fixture(Flags::default());
        let _ = fx.app.update(Message::Navbar(navbar::Message::ToggleSettings));
        assert_eq!(fx.app.screen, Screen::Settings);

        let _ = fx
            .app
            .update(Message::Settings(settings::Message::ThemeModeSelected(ThemeMode::Dark)));
        assert_eq!(fx.app.theme_mode, ThemeMode::Dark);
        let content = fs::read_to_string(fx.config.path().join("settings.toml")).unwrap();
        assert!(content.contains("dark"));

        let _ = fx.app.update(Message::Navbar(navbar::Message::ToggleSettings));
        assert_eq!(fx.app.screen, Screen::Editor);
    }

    #[test]
    fn window_release_ends_drag() {
        let docs = tempdir().unwrap();
        let path = write_document(&docs, "cv.cv.toml", &["A", "B", "C"]);
        let mut fx = fixture(Flags {
            file_path: Some(path.display().to_string()),
            ..Flags::default()
        });
        let drag = |m| Message::Form(form::Message::Projects(list::Message::Drag(m)));
        let _ = fx.app.update(drag(drag_reorder::Message::Start(0)));
        assert!(fx.app.form.is_dragging());

        let _ = fx.app.update(Message::PointerReleased);
        assert!(!fx.app.form.is_dragging());
        assert!(!fx.app.dirty);
    }

    #[test]
    fn resize_updates_autoscroll_viewport() {
        let mut fx = fixture(Flags::default());
        let _ = fx.app.update(Message::WindowResized(iced::Size::new(800.0, 500.0)));
        assert_eq!(fx.app.window_height, 500.0);
    }

    #[test]
    fn view_renders_both_screens() {
        let mut fx = fixture(Flags::default());
        let _ = fx.app.view();
        let _ = fx.app.update(Message::Navbar(navbar::Message::ToggleSettings));
        let _ = fx.app.view();
    }
}
