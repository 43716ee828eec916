#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::sync::Arc;

use fltk::{app, prelude::*};
use tracing_subscriber::EnvFilter;

use folio::app::infrastructure::scheduler::FltkScheduler;
use folio::app::infrastructure::storage::open_user_store;
use folio::app::infrastructure::submission::{SimulatedSubmitter, ThreadedSubmission};
use folio::app::{AppState, Message, PortfolioConfig, detect_system_dark_mode, watch_system_scheme};
use folio::ui::main_window::{build_main_window, watch_scroll};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let config = PortfolioConfig::load();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&config, &sender);
    widgets.install_event_handlers(&sender);

    let submissions = ThreadedSubmission::new(Arc::new(SimulatedSubmitter::new()), sender);

    let mut state = AppState::new(
        config,
        open_user_store(),
        widgets.views(),
        Box::new(submissions),
        Box::new(FltkScheduler::new(sender)),
    );

    let system_dark = detect_system_dark_mode();
    state.start(system_dark);
    watch_system_scheme(sender, system_dark);

    widgets.wind.show();
    // Theme observers ran before the window had a native handle
    #[cfg(target_os = "windows")]
    folio::ui::theme::set_windows_titlebar_theme(&widgets.wind, state.theme.current().is_dark());
    watch_scroll(&widgets.page.scroll, &sender);

    while app.wait() {
        if let Some(msg) = receiver.recv()
            && !state.handle(msg)
        {
            app.quit();
        }
    }
}
