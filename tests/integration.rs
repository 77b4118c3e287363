// SPDX-License-Identifier: MPL-2.0
use iced_cv::app::persisted_state::AppState;
use iced_cv::config::{self, Config};
use iced_cv::cv::{storage, CvDocument, Experience, Language, Proficiency, Project};
use iced_cv::error::{DocumentError, Error};
use iced_cv::i18n::fluent::I18n;
use iced_cv::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_with_override(&initial_config, Some(dir.path().to_path_buf()))
        .expect("Failed to write initial config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut portuguese_config = loaded;
    portuguese_config.general.language = Some("pt-BR".to_string());
    portuguese_config.general.theme_mode = ThemeMode::Light;
    config::save_with_override(&portuguese_config, Some(dir.path().to_path_buf()))
        .expect("Failed to write portuguese config file");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, portuguese_config);
    let i18n_pt = I18n::new(None, &loaded);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n_pt.tr("navbar-save"), "Salvar");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("pt-BR".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_document_survives_save_and_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("ana.cv.toml");

    let mut document = CvDocument::default();
    document.personal.full_name = "Ana Souza".into();
    document.summary = "Backend engineer\nwith ten years of experience".into();
    document.experience.push(Experience {
        company: "Acme".into(),
        start_date: "2020-01-01".into(),
        current: true,
        ..Experience::default()
    });
    document.languages.push(Language {
        name: "English".into(),
        proficiency: Proficiency::Fluent,
    });
    for name in ["A", "B", "C"] {
        document.projects.push(Project {
            name: name.into(),
            ..Project::default()
        });
    }

    storage::save_to_path(&document, &path).expect("Failed to save document");
    let loaded = storage::load_from_path(&path).expect("Failed to load document");
    assert_eq!(loaded, document);
}

#[test]
fn test_partial_document_loads_with_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("partial.cv.toml");
    fs::write(
        &path,
        "summary = \"Hi\"\n\n[personal]\nfull_name = \"Ana\"\n",
    )
    .expect("Failed to write document");

    let loaded = storage::load_from_path(&path).expect("Failed to load document");
    assert_eq!(loaded.personal.full_name, "Ana");
    assert_eq!(loaded.summary, "Hi");
    assert!(loaded.projects.is_empty());
    assert!(loaded.education.is_empty());
}

#[test]
fn test_malformed_document_is_reported() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("broken.cv.toml");
    fs::write(&path, "education = \"not a list\"").expect("Failed to write document");

    match storage::load_from_path(&path) {
        Err(Error::Document(DocumentError::Malformed(_))) => {}
        other => panic!("expected malformed document error, got {other:?}"),
    }
}

#[test]
fn test_session_state_roundtrip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let doc_path = dir.path().join("docs").join("cv.cv.toml");

    let mut state = AppState::default();
    state.remember_document(&doc_path);
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, state);
    assert_eq!(loaded.last_document.as_deref(), Some(doc_path.as_path()));
}
