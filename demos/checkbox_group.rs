use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu, TitlebarOptions,
    Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px, size,
};

use gpui_tesserae_forms::{
    FormsAssets, assets,
    components::{Checkbox, CheckboxGroup, CheckboxGroupStatus, LabelMode},
    theme::ThemeExt,
};

const FRUITS: [&str; 3] = ["Apples", "Pears", "Plums"];

struct Root {
    focus_handle: FocusHandle,

    selected: [bool; FRUITS.len()],
    newsletter: bool,
}

impl Root {
    fn status(&self) -> CheckboxGroupStatus {
        if self.selected.iter().any(|selected| *selected) {
            CheckboxGroupStatus::Default
        } else {
            CheckboxGroupStatus::Error
        }
    }
}

actions!(window, [TabNext, TabPrev]);

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_tesserae_forms::init_for_window(window, cx);

        let theme = cx.get_theme();
        let status = self.status();

        let fruits = FRUITS.iter().enumerate().map(|(index, fruit)| {
            Checkbox::new(("fruit", index))
                .label(*fruit)
                .checked(self.selected[index])
                .on_click(cx.listener(move |view, checked, _window, cx| {
                    view.selected[index] = *checked;
                    cx.notify();
                }))
        });

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .text_size(theme.layout.text.default_font.sizes.body)
            .bg(theme.variants.active(cx).colors.background.primary)
            .flex()
            .flex_col()
            .justify_center()
            .items_center()
            .gap(px(40.))
            .p(px(100.))
            .child(
                CheckboxGroup::new("Pick your fruit")
                    .id("fruit-group")
                    .hint_text("Choose at least one")
                    .status(status)
                    .status_text(if status.is_error() { "Required" } else { "" })
                    .items(fruits)
                    .w(px(320.)),
            )
            .child(
                CheckboxGroup::new("Newsletter")
                    .label_mode(LabelMode::Hidden)
                    .optional_text("optional")
                    .item(
                        Checkbox::new("newsletter")
                            .label("Send me the weekly newsletter")
                            .checked(self.newsletter)
                            .on_click(cx.listener(|view, checked, _window, cx| {
                                view.newsletter = *checked;
                                cx.notify();
                            })),
                    )
                    .w(px(320.)),
            )
    }
}

fn main() {
    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![FormsAssets])
        .run(|cx: &mut App| {
            gpui_tesserae_forms::init(cx);

            cx.set_menus(vec![Menu {
                name: "Checkbox Groups".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(620.), px(800.)), cx);

            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|cx| Root {
                        focus_handle: cx.focus_handle(),
                        selected: [false; FRUITS.len()],
                        newsletter: false,
                    })
                },
            );

            if let Err(err) = opened {
                eprintln!("failed to open window: {err:?}");
                cx.quit();
                return;
            }

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
