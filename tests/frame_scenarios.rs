//! Whole-frame scenarios driven through the public API.

use microui_lite::*;

fn list_window(ctx: &mut Context) {
    ctx.window("list", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |ctx| {
        for i in 0..40 {
            ctx.label(&format!("row {i}"));
        }
    });
}

#[test]
fn wheel_scroll_is_clamped_to_content() {
    let mut ctx = Context::default();
    ctx.input_mut().mousemove(50, 50);
    ctx.frame(list_window);
    ctx.frame(list_window);

    ctx.input_mut().scroll(0, 10_000);
    ctx.frame(list_window);
    let padding = ctx.style().padding;
    let c = *ctx.get_container("list");
    assert!(c.content_size.y + padding * 2 > c.body.height);
    assert_eq!(c.scroll.y, c.content_size.y + padding * 2 - c.body.height);
    assert_eq!(c.scroll.x, 0);

    ctx.input_mut().scroll(0, -50_000);
    ctx.frame(list_window);
    assert_eq!(ctx.get_container("list").scroll.y, 0);
}

#[test]
fn scrollbar_shrinks_the_body() {
    let mut ctx = Context::default();
    ctx.frame(list_window);
    ctx.frame(list_window);
    let c = *ctx.get_container("list");
    assert_eq!(c.body.width, 200 - ctx.style().scrollbar_size);
    assert_eq!(c.body.height, 200);
}

#[test]
fn click_raises_window_under_pointer() {
    let mut ctx = Context::default();
    let windows = |ctx: &mut Context| {
        ctx.window("a", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| ctx.label("a"));
        ctx.window("b", rect(50, 50, 100, 100), ContainerOption::NO_TITLE, |ctx| ctx.label("b"));
    };
    let order = |ctx: &Context| -> Vec<String> {
        ctx.commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    };

    ctx.input_mut().mousemove(20, 20);
    ctx.frame(windows);
    assert_eq!(order(&ctx), vec!["a", "b"]);

    ctx.input_mut().mousedown(20, 20, MouseButton::LEFT);
    ctx.frame(windows);
    ctx.input_mut().mouseup(20, 20, MouseButton::LEFT);
    ctx.frame(windows);
    assert_eq!(order(&ctx), vec!["b", "a"]);
}

#[test]
fn pointer_only_hovers_the_topmost_window() {
    let mut ctx = Context::default();
    let mut hovered = (false, false);
    ctx.input_mut().mousemove(70, 70);
    for _ in 0..2 {
        ctx.frame(|ctx| {
            ctx.window("a", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                ctx.set_next(rect(60, 60, 30, 30), false);
                hovered.0 = ctx.control(Some(Id::new(1)), WidgetOption::NONE, |_, _, s| if s.hovered { ResourceState::ACTIVE } else { ResourceState::NONE }).is_active();
            });
            ctx.window("b", rect(50, 50, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                ctx.set_next(rect(60, 60, 30, 30), false);
                hovered.1 = ctx.control(Some(Id::new(2)), WidgetOption::NONE, |_, _, s| if s.hovered { ResourceState::ACTIVE } else { ResourceState::NONE }).is_active();
            });
        });
    }
    assert_eq!(hovered, (false, true));
}

#[test]
#[should_panic(expected = "container stack is unbalanced")]
fn missing_end_window_panics_at_end() {
    let mut ctx = Context::default();
    ctx.begin();
    let _ = ctx.begin_window("w", rect(0, 0, 100, 100), ContainerOption::NONE);
    ctx.end();
}

#[test]
fn render_replays_z_ordered_commands() {
    #[derive(Default)]
    struct Log {
        texts: Vec<String>,
        clips: usize,
    }
    impl Renderer for Log {
        fn set_clip_rect(&mut self, _rect: Recti) { self.clips += 1; }
        fn draw_rect(&mut self, _rect: Recti, _color: Color) {}
        fn draw_text(&mut self, text: &str, _pos: Vec2i, _color: Color) { self.texts.push(text.to_string()); }
        fn draw_icon(&mut self, _icon: Icon, _rect: Recti, _color: Color) {}
    }

    let mut ctx = Context::default();
    ctx.frame(|ctx| {
        ctx.window("first", rect(0, 0, 120, 120), ContainerOption::NONE, |ctx| ctx.label("one"));
        ctx.window("second", rect(10, 10, 120, 120), ContainerOption::NONE, |ctx| ctx.label("two"));
    });
    let mut log = Log::default();
    ctx.render(&mut log);
    assert_eq!(log.texts, vec!["first", "one", "second", "two"]);
}
