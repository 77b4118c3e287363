// SPDX-License-Identifier: MPL-2.0
//! The CV editor screen: every section stacked in one scrollable column.
//!
//! The form owns the UI state of all sections and applies their messages to
//! the document it is handed. It also fans window-level pointer events out to
//! the sections, which is how date pickers close on outside clicks and how a
//! drag ends when the button is released between cards.

use crate::cv::CvDocument;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::sections::{
    certifications, education, experience, languages, list, personal, projects, skills, summary,
    volunteer, Event,
};
use crate::ui::state::drag_reorder;
use chrono::NaiveDate;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Id},
    Element, Length,
};

/// Id of the form's scrollable, target of auto-scroll while dragging.
pub const SCROLLABLE_ID: &str = "cv-form";

#[derive(Debug)]
pub struct State {
    summary: summary::State,
    education: education::State,
    certifications: certifications::State,
    languages: languages::State,
    experience: experience::State,
    skills: skills::State,
    projects: projects::State,
    volunteer: volunteer::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Personal(personal::Message),
    Summary(summary::Message),
    Education(education::Message),
    Certifications(certifications::Message),
    Languages(languages::Message),
    Experience(experience::Message),
    Skills(skills::Message),
    Projects(projects::Message),
    Volunteer(volunteer::Message),
}

impl State {
    #[must_use]
    pub fn new(document: &CvDocument, today: NaiveDate) -> Self {
        Self {
            summary: summary::State::new(&document.summary),
            education: education::State::new(&document.education, today),
            certifications: certifications::State::new(&document.certifications, today),
            languages: languages::State::new(&document.languages, today),
            experience: experience::State::new(&document.experience, today),
            skills: skills::State::new(&document.skills, today),
            projects: projects::State::new(&document.projects, today),
            volunteer: volunteer::State::new(&document.volunteer, today),
        }
    }

    /// Rebuilds all section state for a newly loaded document. Any drag or
    /// open popup is discarded.
    pub fn reset(&mut self, document: &CvDocument, today: NaiveDate) {
        *self = Self::new(document, today);
    }

    pub fn update(&mut self, message: Message, document: &mut CvDocument, today: NaiveDate) -> Event {
        match message {
            Message::Personal(msg) => personal::update(msg, &mut document.personal),
            Message::Summary(msg) => self.summary.update(msg, &mut document.summary),
            Message::Education(msg) => self.education.update(msg, &mut document.education, today),
            Message::Certifications(msg) => {
                self.certifications
                    .update(msg, &mut document.certifications, today)
            }
            Message::Languages(msg) => self.languages.update(msg, &mut document.languages, today),
            Message::Experience(msg) => {
                self.experience.update(msg, &mut document.experience, today)
            }
            Message::Skills(msg) => self.skills.update(msg, &mut document.skills, today),
            Message::Projects(msg) => self.projects.update(msg, &mut document.projects, today),
            Message::Volunteer(msg) => self.volunteer.update(msg, &mut document.volunteer, today),
        }
    }

    /// Whether a window-level click listener is needed.
    #[must_use]
    pub fn any_popup_open(&self) -> bool {
        self.education.any_popup_open()
            || self.certifications.any_popup_open()
            || self.experience.any_popup_open()
            || self.projects.any_popup_open()
            || self.volunteer.any_popup_open()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.projects.is_dragging() || self.volunteer.is_dragging()
    }

    /// A left press somewhere in the window.
    pub fn pointer_pressed(&mut self) {
        self.education.pointer_pressed();
        self.certifications.pointer_pressed();
        self.experience.pointer_pressed();
        self.projects.pointer_pressed();
        self.volunteer.pointer_pressed();
    }

    /// A button release somewhere in the window ends any drag.
    pub fn pointer_released(&mut self, document: &mut CvDocument, today: NaiveDate) -> Event {
        let mut event = Event::None;
        if self.projects.is_dragging()
            && self.projects.update(
                list::Message::Drag(drag_reorder::Message::Released),
                &mut document.projects,
                today,
            ) == Event::Changed
        {
            event = Event::Changed;
        }
        if self.volunteer.is_dragging()
            && self.volunteer.update(
                list::Message::Drag(drag_reorder::Message::Released),
                &mut document.volunteer,
                today,
            ) == Event::Changed
        {
            event = Event::Changed;
        }
        event
    }

    pub fn close_popups(&mut self) {
        self.education.close_popups();
        self.certifications.close_popups();
        self.experience.close_popups();
        self.projects.close_popups();
        self.volunteer.close_popups();
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a CvDocument,
    pub today: NaiveDate,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let doc = ctx.document;
    let today = ctx.today;

    let column = Column::new()
        .spacing(spacing::LG)
        .push(
            personal::view(personal::ViewContext {
                i18n,
                info: &doc.personal,
            })
            .map(Message::Personal),
        )
        .push(summary::view(&state.summary, i18n).map(Message::Summary))
        .push(
            list::view(
                &state.experience,
                list::ViewContext {
                    i18n,
                    entries: &doc.experience,
                    today,
                },
            )
            .map(Message::Experience),
        )
        .push(
            list::view(
                &state.education,
                list::ViewContext {
                    i18n,
                    entries: &doc.education,
                    today,
                },
            )
            .map(Message::Education),
        )
        .push(
            list::view(
                &state.certifications,
                list::ViewContext {
                    i18n,
                    entries: &doc.certifications,
                    today,
                },
            )
            .map(Message::Certifications),
        )
        .push(
            list::view(
                &state.skills,
                list::ViewContext {
                    i18n,
                    entries: &doc.skills,
                    today,
                },
            )
            .map(Message::Skills),
        )
        .push(
            list::view(
                &state.languages,
                list::ViewContext {
                    i18n,
                    entries: &doc.languages,
                    today,
                },
            )
            .map(Message::Languages),
        )
        .push(
            list::view(
                &state.projects,
                list::ViewContext {
                    i18n,
                    entries: &doc.projects,
                    today,
                },
            )
            .map(Message::Projects),
        )
        .push(
            list::view(
                &state.volunteer,
                list::ViewContext {
                    i18n,
                    entries: &doc.volunteer,
                    today,
                },
            )
            .map(Message::Volunteer),
        );

    let centered = Container::new(column.max_width(sizing::FORM_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG);

    scrollable(centered)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
