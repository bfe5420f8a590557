use gpui::{actions, App, Application, Menu, MenuItem};

use final_fragment::config::AppConfig;
use final_fragment::{logging, session};

actions!(final_fragment, [ShowFragment, Quit]);

fn main() {
    // Keep the guard alive so file logs flush when the process exits
    let _guard = logging::init();

    let config = AppConfig::default();
    tracing::info!(
        event_type = "app_start",
        window_title = %config.window.title,
        "Final Fragment starting"
    );

    let app = Application::new();

    // Dock icon clicked with no visible windows. In this gpui version the
    // reopen hook is registered on the `Application` rather than from inside
    // the run callback's `&mut App`.
    app.on_reopen(|cx: &mut App| {
        session::reactivate(cx);
    });

    app.run(move |cx: &mut App| {
        session::init(cx, config);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|_: &ShowFragment, cx: &mut App| {
            session::explicit_show(cx);
        });

        cx.set_menus(vec![Menu {
            name: "Final Fragment".into(),
            items: vec![
                MenuItem::action("Show Final Fragment", ShowFragment),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        }]);

        session::launch(cx);
    });
}
