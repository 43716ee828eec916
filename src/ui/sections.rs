use std::time::Duration;

use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
    widget::Widget,
};

use super::contact_form::{ContactFormWidgets, build_contact_form};
use super::theme::{Role, ThemedWidgets};
use crate::app::domain::config::{PortfolioConfig, Project, Section, SkillCategory};
use crate::app::domain::messages::Message;
use crate::app::view::{
    ElementGeometry, PageView, ParallaxFrame, SectionGeometry, SubtitleView, Viewport,
};

const MARGIN: i32 = 60;
const SCROLLBAR_WIDTH: i32 = 16;
const HERO_HEIGHT: i32 = 560;
const SECTION_PADDING: i32 = 50;
const TITLE_HEIGHT: i32 = 50;
const BODY_HEIGHT: i32 = 60;
const CARD_GAP: i32 = 20;
const SKILL_CARD_HEIGHT: i32 = 170;
const PROJECT_CARD_HEIGHT: i32 = 190;
const TAG_HEIGHT: i32 = 28;
const TAG_GAP: i32 = 8;
const TAG_LIFT: i32 = 3;
const ICON_SIZE: i32 = 48;
/// Entrance-animated elements start this far below their resting place.
const ENTRANCE_SHIFT: i32 = 30;
const ENTRANCE_FRAMES: u32 = 15;
const ENTRANCE_FRAME_SECS: f64 = 0.02;

/// A widget moved by scroll or hover effects, remembered by its resting
/// offset from the top of the page content.
#[derive(Clone)]
struct Anchored<W: WidgetExt> {
    widget: W,
    rest_y: i32,
}

impl<W: WidgetExt> Anchored<W> {
    fn new(widget: W, content_top: i32) -> Self {
        let rest_y = widget.y() - content_top;
        Self { widget, rest_y }
    }

    fn place(&mut self, content_top: i32, offset: i32) {
        let x = self.widget.x();
        self.widget.set_pos(x, content_top + self.rest_y + offset);
    }
}

/// FLTK symbol label rotated by `degrees`.
pub fn icon_label(name: &str, degrees: f64) -> String {
    let degrees = (degrees.rem_euclid(360.0).round() as i32) % 360;
    format!("@-20{:03}{}", degrees, name)
}

/// Tag width estimated from its text.
fn tag_width(tag: &str) -> i32 {
    tag.chars().count() as i32 * 8 + 24
}

pub struct PageWidgets {
    pub scroll: Scroll,
    pub subtitle: Option<Frame>,
    pub icons: Vec<Frame>,
    pub form: Option<ContactFormWidgets>,
    sections: Vec<(String, Group)>,
    hero: Option<Group>,
    icon_names: Vec<String>,
    skill_tags: Vec<Vec<Frame>>,
    animated: Vec<Widget>,
    content_height: i32,
}

/// Build the scrollable page. Must be called inside the window's column flex.
pub fn build_page(
    config: &PortfolioConfig,
    sender: &Sender<Message>,
    width: i32,
    themed: &ThemedWidgets,
) -> PageWidgets {
    let mut scroll = Scroll::default();
    scroll.set_type(ScrollType::VerticalAlways);
    scroll.set_scrollbar_size(SCROLLBAR_WIDTH);
    scroll.set_frame(FrameType::FlatBox);
    themed.add(Role::Page, &scroll);

    let content_width = width - SCROLLBAR_WIDTH;
    let mut page = PageWidgets {
        scroll: scroll.clone(),
        subtitle: None,
        icons: Vec::new(),
        form: None,
        sections: Vec::new(),
        hero: None,
        icon_names: config.floating_icons.clone(),
        skill_tags: Vec::new(),
        animated: Vec::new(),
        content_height: 0,
    };

    let mut y = 0;
    for (index, section) in config.sections.iter().enumerate() {
        let group = if section.id == "home" {
            build_hero(config, sender, &mut page, y, content_width, themed)
        } else {
            build_section(config, section, sender, &mut page, y, content_width, themed)
        };
        themed.add(if index % 2 == 0 { Role::Page } else { Role::AltSection }, &group);
        y += group.h();
        page.sections.push((section.id.clone(), group));
    }
    page.content_height = y;

    scroll.end();
    page
}

fn build_hero(
    config: &PortfolioConfig,
    sender: &Sender<Message>,
    page: &mut PageWidgets,
    top: i32,
    width: i32,
    themed: &ThemedWidgets,
) -> Group {
    let mut group = Group::new(0, top, width, HERO_HEIGHT, None);
    group.set_frame(FrameType::FlatBox);

    let mut content = Group::new(MARGIN, top + 140, width / 2, 240, None);

    let mut title = Frame::new(MARGIN, top + 140, width / 2, 60, None).with_label(&config.title);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(42);
    title.set_align(Align::Left | Align::Inside);
    themed.add(Role::Heading, &title);

    let mut subtitle = Frame::new(MARGIN, top + 205, width / 2, 40, None);
    subtitle.set_label_size(24);
    subtitle.set_align(Align::Left | Align::Inside);
    themed.add(Role::Body, &subtitle);

    let mut work = Button::new(MARGIN, top + 280, 150, 44, "View My Work");
    work.set_frame(FrameType::RFlatBox);
    work.set_callback({
        let s = *sender;
        move |_| s.send(Message::NavLinkClicked("projects".to_string()))
    });
    themed.add(Role::Accent, &work);

    let mut contact = Button::new(MARGIN + 170, top + 280, 150, 44, "Get In Touch");
    contact.set_frame(FrameType::RoundedFrame);
    contact.set_callback({
        let s = *sender;
        move |_| s.send(Message::NavLinkClicked("contact".to_string()))
    });
    themed.add(Role::Heading, &contact);

    content.end();

    let icon_x = width / 2 + MARGIN * 2;
    for (i, name) in config.floating_icons.iter().enumerate() {
        let i = i as i32;
        let x = icon_x + (i % 2) * 160 + (i / 2) * 40;
        let y = top + 120 + (i / 2) * 170 + (i % 2) * 60;
        let mut icon = Frame::new(x, y, ICON_SIZE, ICON_SIZE, None).with_label(&icon_label(name, 0.0));
        icon.set_label_size(ICON_SIZE);
        page.icons.push(icon);
    }

    group.end();
    page.subtitle = Some(subtitle);
    page.hero = Some(content);
    group
}

fn build_section(
    config: &PortfolioConfig,
    section: &Section,
    sender: &Sender<Message>,
    page: &mut PageWidgets,
    top: i32,
    width: i32,
    themed: &ThemedWidgets,
) -> Group {
    let mut group = Group::new(0, top, width, 0, None);
    group.set_frame(FrameType::FlatBox);

    let inner = width - 2 * MARGIN;
    let mut y = top + SECTION_PADDING;

    let mut title = Frame::new(MARGIN, y, inner, TITLE_HEIGHT, None).with_label(&section.title);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(30);
    themed.add(Role::Heading, &title);
    y += TITLE_HEIGHT;

    if !section.body.is_empty() {
        let mut body = Frame::new(MARGIN, y, inner, BODY_HEIGHT, None).with_label(&section.body);
        body.set_label_size(16);
        body.set_align(Align::Center | Align::Inside | Align::Wrap);
        themed.add(Role::Body, &body);
        page.animated.push(body.as_base_widget());
        y += BODY_HEIGHT;
    }
    y += CARD_GAP;

    y = match section.id.as_str() {
        "skills" => build_skill_cards(&config.skills, sender, page, y, inner, themed),
        "projects" => build_project_cards(&config.projects, sender, page, y, inner, themed),
        "contact" => {
            let form = build_contact_form(MARGIN, y, inner, &config.project_types, sender, themed);
            let bottom = form.bottom();
            page.form = Some(form);
            bottom
        }
        _ => y,
    };

    group.end();
    // Grow to fit without dragging the children along
    group.make_resizable(false);
    group.set_size(width, y + SECTION_PADDING - top);
    // Hidden content fades in once scrolled into view
    group.deactivate();
    group
}

fn build_skill_cards(
    skills: &[SkillCategory],
    sender: &Sender<Message>,
    page: &mut PageWidgets,
    top: i32,
    inner: i32,
    themed: &ThemedWidgets,
) -> i32 {
    let count = skills.len().max(1) as i32;
    let card_width = (inner - (count - 1) * CARD_GAP) / count;

    for (category, skill) in skills.iter().enumerate() {
        let x = MARGIN + category as i32 * (card_width + CARD_GAP);
        let mut card = Group::new(x, top, card_width, SKILL_CARD_HEIGHT, None).with_label(&skill.name);
        card.set_frame(FrameType::RFlatBox);
        card.set_align(Align::Top | Align::Inside);
        card.set_label_font(Font::HelveticaBold);
        card.set_label_size(18);
        themed.add(Role::Card, &card);

        let mut tags = Vec::new();
        let (mut tx, mut ty) = (x + 16, top + 50);
        for tag in &skill.tags {
            let w = tag_width(tag);
            if tx + w > x + card_width - 16 {
                tx = x + 16;
                ty += TAG_HEIGHT + TAG_GAP;
            }
            let mut frame = Frame::new(tx, ty, w, TAG_HEIGHT, None).with_label(tag);
            frame.set_frame(FrameType::RFlatBox);
            frame.set_label_size(13);
            themed.add(Role::Tag, &frame);
            tags.push(frame);
            tx += w + TAG_GAP;
        }
        card.end();

        card.handle({
            let s = *sender;
            move |_, event| match event {
                Event::Enter => {
                    s.send(Message::SkillHover {
                        category,
                        entered: true,
                    });
                    true
                }
                Event::Leave => {
                    s.send(Message::SkillHover {
                        category,
                        entered: false,
                    });
                    true
                }
                _ => false,
            }
        });
        page.skill_tags.push(tags);
        page.animated.push(card.as_base_widget());
    }
    top + SKILL_CARD_HEIGHT
}

fn build_project_cards(
    projects: &[Project],
    sender: &Sender<Message>,
    page: &mut PageWidgets,
    top: i32,
    inner: i32,
    themed: &ThemedWidgets,
) -> i32 {
    let count = projects.len().max(1) as i32;
    let card_width = (inner - (count - 1) * CARD_GAP) / count;

    for (index, project) in projects.iter().enumerate() {
        let x = MARGIN + index as i32 * (card_width + CARD_GAP);
        let mut card = Group::new(x, top, card_width, PROJECT_CARD_HEIGHT, None);
        card.set_frame(FrameType::RFlatBox);
        themed.add(Role::Card, &card);

        let mut name = Frame::new(x + 16, top + 16, card_width - 32, 30, None).with_label(&project.name);
        name.set_label_font(Font::HelveticaBold);
        name.set_label_size(18);
        name.set_align(Align::Left | Align::Inside);
        themed.add(Role::Heading, &name);

        let mut description = Frame::new(x + 16, top + 50, card_width - 32, 70, None)
            .with_label(&project.description);
        description.set_label_size(14);
        description.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);
        themed.add(Role::Body, &description);

        let mut link = Button::new(x + 16, top + PROJECT_CARD_HEIGHT - 56, 140, 36, "View Project");
        link.set_frame(FrameType::RFlatBox);
        link.set_callback({
            let s = *sender;
            move |_| s.send(Message::ProjectLinkClicked(index))
        });
        themed.add(Role::Accent, &link);

        card.end();
        page.animated.push(card.as_base_widget());
    }
    top + PROJECT_CARD_HEIGHT
}

pub struct FltkPage {
    scroll: Scroll,
    sections: Vec<(String, Group)>,
    hero: Option<Anchored<Group>>,
    icons: Vec<(Anchored<Frame>, String)>,
    skill_tags: Vec<Vec<Anchored<Frame>>>,
    animated: Vec<Anchored<Widget>>,
    content_height: i32,
}

impl FltkPage {
    /// Must be created after the window is laid out, while the page is at the top.
    pub fn new(widgets: &PageWidgets) -> Self {
        let content_top = widgets.scroll.y() - widgets.scroll.yposition();
        let mut page = Self {
            scroll: widgets.scroll.clone(),
            sections: widgets.sections.clone(),
            hero: widgets
                .hero
                .clone()
                .map(|hero| Anchored::new(hero, content_top)),
            icons: widgets
                .icons
                .iter()
                .cloned()
                .zip(widgets.icon_names.iter().cloned())
                .map(|(icon, name)| (Anchored::new(icon, content_top), name))
                .collect(),
            skill_tags: widgets
                .skill_tags
                .iter()
                .map(|tags| {
                    tags.iter()
                        .cloned()
                        .map(|tag| Anchored::new(tag, content_top))
                        .collect()
                })
                .collect(),
            animated: widgets
                .animated
                .iter()
                .cloned()
                .map(|widget| Anchored::new(widget, content_top))
                .collect(),
            content_height: widgets.content_height,
        };

        // Elements wait below their resting place until scrolled into view
        for element in page.animated.iter_mut() {
            element.place(content_top, ENTRANCE_SHIFT);
            element.widget.deactivate();
        }
        page
    }

    fn content_top(&self) -> i32 {
        self.scroll.y() - self.scroll.yposition()
    }
}

impl PageView for FltkPage {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.scroll.yposition(),
            height: self.scroll.h(),
        }
    }

    fn sections(&self) -> Vec<SectionGeometry> {
        let content_top = self.content_top();
        self.sections
            .iter()
            .map(|(id, group)| SectionGeometry {
                id: id.clone(),
                top: group.y() - content_top,
                height: group.h(),
            })
            .collect()
    }

    fn reveal_section(&mut self, id: &str) {
        if let Some((_, group)) = self.sections.iter_mut().find(|(s, _)| s == id) {
            group.activate();
            group.redraw();
        }
    }

    fn animated_elements(&self) -> Vec<ElementGeometry> {
        self.animated
            .iter()
            .map(|element| ElementGeometry {
                top: element.rest_y,
                height: element.widget.h(),
            })
            .collect()
    }

    fn animate_element(&mut self, index: usize, delay: Duration) {
        let Some(mut element) = self.animated.get(index).cloned() else {
            return;
        };
        let mut scroll = self.scroll.clone();
        let mut frame = 0;

        app::add_timeout3(delay.as_secs_f64(), move |handle| {
            if frame == 0 {
                element.widget.activate();
            }
            frame += 1;
            let t = f64::from(frame) / f64::from(ENTRANCE_FRAMES);
            let eased = 1.0 - (1.0 - t).powi(3);
            let offset = (f64::from(ENTRANCE_SHIFT) * (1.0 - eased)).round() as i32;
            element.place(scroll.y() - scroll.yposition(), offset);
            scroll.redraw();
            if frame < ENTRANCE_FRAMES {
                app::repeat_timeout3(ENTRANCE_FRAME_SECS, handle);
            }
        });
    }

    fn apply_parallax(&mut self, frame: &ParallaxFrame) {
        let content_top = self.content_top();
        if let Some(hero) = self.hero.as_mut() {
            hero.place(content_top, frame.hero_offset.round() as i32);
        }
        for ((icon, name), (offset, rotation)) in self.icons.iter_mut().zip(&frame.icons) {
            icon.place(content_top, offset.round() as i32);
            icon.widget.set_label(&icon_label(name, *rotation));
        }
        self.scroll.redraw();
    }

    fn floating_icon_count(&self) -> usize {
        self.icons.len()
    }

    fn scroll_to(&mut self, y: i32) {
        let max = (self.content_height - self.scroll.h()).max(0);
        self.scroll.scroll_to(0, y.clamp(0, max));
        self.scroll.redraw();
    }

    fn set_skill_tag_lifted(&mut self, category: usize, tag: usize, lifted: bool) {
        let content_top = self.content_top();
        if let Some(anchored) = self.skill_tags.get_mut(category).and_then(|tags| tags.get_mut(tag)) {
            anchored.place(content_top, if lifted { -TAG_LIFT } else { 0 });
            anchored
                .widget
                .set_frame(if lifted { FrameType::RShadowBox } else { FrameType::RFlatBox });
            if let Some(mut parent) = anchored.widget.parent() {
                parent.redraw();
            }
        }
    }

    fn skill_tag_count(&self, category: usize) -> usize {
        self.skill_tags.get(category).map_or(0, Vec::len)
    }
}

/// Typing target. Pages without a hero have nothing to type into.
pub struct FltkSubtitle {
    frame: Option<Frame>,
}

impl FltkSubtitle {
    pub fn new(frame: Option<Frame>) -> Self {
        Self { frame }
    }
}

impl SubtitleView for FltkSubtitle {
    fn set_text(&mut self, text: &str) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        frame.set_label(text);
        if let Some(mut parent) = frame.parent() {
            parent.redraw();
        }
    }
}
