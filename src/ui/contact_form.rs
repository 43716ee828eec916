use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    input::{Input, MultilineInput},
    menu::Choice,
    prelude::*,
    widget::Widget,
};

use super::theme::{Role, ThemedWidgets};
use crate::app::domain::contact::{ContactSubmission, Field};
use crate::app::domain::messages::Message;
use crate::app::view::ContactFormView;

const FIELD_HEIGHT: i32 = 36;
const MESSAGE_HEIGHT: i32 = 120;
const ROW_GAP: i32 = 34;
const SUBMIT_WIDTH: i32 = 180;
const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";
const PROJECT_TYPE_PLACEHOLDER: &str = "Select project type";

#[derive(Clone)]
pub struct ContactFormWidgets {
    pub name: Input,
    pub email: Input,
    pub project_type: Choice,
    pub message: MultilineInput,
    pub submit: Button,
}

impl ContactFormWidgets {
    /// Lowest y coordinate used by the form.
    pub fn bottom(&self) -> i32 {
        self.submit.y() + self.submit.h()
    }

    /// Widgets that take typed text, for telling shortcuts apart from typing.
    pub fn text_inputs(&self) -> Vec<Widget> {
        vec![
            self.name.as_base_widget(),
            self.email.as_base_widget(),
            self.message.as_base_widget(),
        ]
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::ProjectType => "Project Type",
        Field::Message => "Your Message",
    }
}

pub fn build_contact_form(
    x: i32,
    top: i32,
    width: i32,
    project_types: &[String],
    sender: &Sender<Message>,
    themed: &ThemedWidgets,
) -> ContactFormWidgets {
    let half = (width - 20) / 2;
    let mut y = top + ROW_GAP - 14;

    let mut name = Input::new(x, y, half, FIELD_HEIGHT, field_label(Field::Name));
    let mut email = Input::new(x + half + 20, y, half, FIELD_HEIGHT, field_label(Field::Email));
    y += FIELD_HEIGHT + ROW_GAP;

    let mut project_type = Choice::new(x, y, width, FIELD_HEIGHT, field_label(Field::ProjectType));
    project_type.add_choice(PROJECT_TYPE_PLACEHOLDER);
    for kind in project_types {
        // Menu paths treat '/' as a submenu separator
        project_type.add_choice(&kind.replace('/', "\\/"));
    }
    project_type.set_value(0);
    y += FIELD_HEIGHT + ROW_GAP;

    let mut message = MultilineInput::new(x, y, width, MESSAGE_HEIGHT, field_label(Field::Message));
    message.set_wrap(true);
    y += MESSAGE_HEIGHT + 20;

    let mut submit = Button::new(x, y, SUBMIT_WIDTH, 44, SUBMIT_LABEL);
    submit.set_frame(FrameType::RFlatBox);
    submit.set_callback({
        let s = *sender;
        move |_| s.send(Message::SubmitContact)
    });
    themed.add(Role::Accent, &submit);

    for input in [&mut name, &mut email] {
        input.set_align(Align::TopLeft);
        themed.add(Role::Body, &*input);
    }
    project_type.set_align(Align::TopLeft);
    project_type.set_down_frame(FrameType::FlatBox);
    themed.add(Role::Body, &project_type);
    message.set_align(Align::TopLeft);
    themed.add(Role::Body, &message);

    ContactFormWidgets {
        name,
        email,
        project_type,
        message,
        submit,
    }
}

/// Contact form backed by the FLTK widgets.
pub struct FltkContactForm {
    widgets: ContactFormWidgets,
}

impl FltkContactForm {
    pub fn new(widgets: ContactFormWidgets) -> Self {
        Self { widgets }
    }
}

impl ContactFormView for FltkContactForm {
    fn read(&self) -> ContactSubmission {
        let w = &self.widgets;
        // Index 0 is the placeholder, which counts as no selection
        let project_type = if w.project_type.value() > 0 {
            w.project_type.choice().unwrap_or_default()
        } else {
            String::new()
        };
        ContactSubmission {
            name: w.name.value(),
            email: w.email.value(),
            project_type,
            message: w.message.value(),
        }
    }

    fn clear(&mut self) {
        let w = &mut self.widgets;
        w.name.set_value("");
        w.email.set_value("");
        w.project_type.set_value(0);
        w.message.set_value("");
    }

    fn set_busy(&mut self, busy: bool) {
        let submit = &mut self.widgets.submit;
        if busy {
            submit.set_label(BUSY_LABEL);
            submit.deactivate();
        } else {
            submit.set_label(SUBMIT_LABEL);
            submit.activate();
        }
        submit.redraw();
    }
}
