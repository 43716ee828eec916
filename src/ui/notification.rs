use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::navbar::NAVBAR_HEIGHT;
use super::theme::parse_color;
use crate::app::domain::messages::Message;
use crate::app::domain::notification::{Notification, NotificationStyle};
use crate::app::view::NotificationView;

const PANEL_WIDTH: i32 = 340;
const PANEL_HEIGHT: i32 = 64;
const EDGE_MARGIN: i32 = 20;
const SLIDE_FRAMES: u32 = 12;
const SLIDE_FRAME_SECS: f64 = 0.025;

/// Floating panel in the top-right corner. Created directly in the window,
/// after the page, so it draws above everything else.
#[derive(Clone)]
pub struct NotificationWidgets {
    pub panel: Group,
    pub icon: Frame,
    pub text: Frame,
    pub close: Button,
}

pub fn build_notification(window_width: i32, sender: &Sender<Message>) -> NotificationWidgets {
    let x = window_width;
    let y = NAVBAR_HEIGHT + EDGE_MARGIN;

    let mut panel = Group::new(x, y, PANEL_WIDTH, PANEL_HEIGHT, None);
    panel.set_frame(FrameType::RShadowBox);

    let mut icon = Frame::new(x + 12, y + 16, 32, 32, None);
    icon.set_label_color(Color::White);

    let mut text = Frame::new(x + 52, y + 8, PANEL_WIDTH - 96, PANEL_HEIGHT - 16, None);
    text.set_align(Align::Left | Align::Inside | Align::Wrap);
    text.set_label_color(Color::White);
    text.set_label_size(14);

    let mut close = Button::new(x + PANEL_WIDTH - 36, y + 18, 28, 28, "@-2+");
    close.set_frame(FrameType::FlatBox);
    close.set_label_color(Color::White);
    close.set_tooltip("Close");
    close.set_callback({
        let s = *sender;
        move |_| s.send(Message::CloseNotification)
    });

    panel.end();
    panel.hide();

    NotificationWidgets {
        panel,
        icon,
        text,
        close,
    }
}

/// FLTK reads `@` in a label as a symbol prefix; doubling it prints it as is.
pub fn label_text(message: &str) -> String {
    message.replace('@', "@@")
}

pub struct FltkNotificationView {
    widgets: NotificationWidgets,
    // Bumped on every slide so an older animation stops at its next frame
    generation: Rc<Cell<u64>>,
}

impl FltkNotificationView {
    pub fn new(widgets: NotificationWidgets) -> Self {
        Self {
            widgets,
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn window_width(&self) -> i32 {
        self.widgets
            .panel
            .window()
            .map_or(self.widgets.panel.x(), |w| w.w())
    }

    fn shown_x(&self) -> i32 {
        self.window_width() - PANEL_WIDTH - EDGE_MARGIN
    }

    fn hidden_x(&self) -> i32 {
        self.window_width() + EDGE_MARGIN
    }

    fn cancel_animation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn slide_to(&mut self, to: i32) {
        let generation = self.cancel_animation();
        let current = self.generation.clone();
        let mut panel = self.widgets.panel.clone();
        let from = panel.x();
        let mut frame = 0;

        app::add_timeout3(SLIDE_FRAME_SECS, move |handle| {
            if current.get() != generation {
                return;
            }
            frame += 1;
            let t = f64::from(frame) / f64::from(SLIDE_FRAMES);
            let eased = 1.0 - (1.0 - t).powi(3);
            let x = from + (f64::from(to - from) * eased).round() as i32;
            let y = panel.y();
            panel.set_pos(x, y);
            if let Some(mut window) = panel.window() {
                window.redraw();
            }
            if frame < SLIDE_FRAMES {
                app::repeat_timeout3(SLIDE_FRAME_SECS, handle);
            }
        });
    }
}

impl NotificationView for FltkNotificationView {
    fn mount(&mut self, notification: &Notification, style: &NotificationStyle) {
        self.cancel_animation();
        let x = self.hidden_x();
        let w = &mut self.widgets;

        let background = parse_color(style.background).unwrap_or(Color::Blue);
        let foreground = parse_color(style.foreground).unwrap_or(Color::White);
        w.panel.set_color(background);
        w.close.set_color(background);
        w.icon.set_label(style.icon);
        w.icon.set_label_color(foreground);
        w.text.set_label(&label_text(&notification.message));
        w.text.set_label_color(foreground);

        let y = w.panel.y();
        w.panel.set_pos(x, y);
        w.panel.show();
    }

    fn slide_in(&mut self) {
        let x = self.shown_x();
        self.slide_to(x);
    }

    fn slide_out(&mut self) {
        let x = self.hidden_x();
        self.slide_to(x);
    }

    fn detach(&mut self) {
        self.cancel_animation();
        self.widgets.panel.hide();
        if let Some(mut window) = self.widgets.panel.window() {
            window.redraw();
        }
    }
}
