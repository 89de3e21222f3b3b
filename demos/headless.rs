// Drives a few frames without a window system and prints the commands a backend would see.
use microui_lite::*;

#[derive(Default)]
struct State {
    checked: bool,
    volume: Real,
    name: String,
    clicks: usize,
    button: Option<Recti>,
}

#[derive(Default)]
struct LogRenderer {
    frame: usize,
}

impl Renderer for LogRenderer {
    fn set_clip_rect(&mut self, r: Recti) { println!("[{}] clip {} {} {} {}", self.frame, r.x, r.y, r.width, r.height); }

    fn draw_rect(&mut self, r: Recti, c: Color) { println!("[{}] rect {} {} {} {} #{:02x}{:02x}{:02x}", self.frame, r.x, r.y, r.width, r.height, c.r, c.g, c.b); }

    fn draw_text(&mut self, text: &str, pos: Vec2i, _color: Color) { println!("[{}] text {:?} at {} {}", self.frame, text, pos.x, pos.y); }

    fn draw_icon(&mut self, icon: Icon, r: Recti, _color: Color) { println!("[{}] icon {:?} in {} {} {} {}", self.frame, icon, r.x, r.y, r.width, r.height); }
}

fn ui(ctx: &mut Context, state: &mut State) {
    ctx.window("Demo", rect(40, 40, 300, 260), ContainerOption::NONE, |ctx| {
        ctx.with_row(&[SizePolicy::Fixed(80), SizePolicy::Remainder(0)], SizePolicy::Auto, |ctx| {
            ctx.label("Name:");
            ctx.textbox(&mut state.name);
            ctx.label("Volume:");
            ctx.slider(&mut state.volume, 0.0, 100.0);
        });
        ctx.checkbox("Mute", &mut state.checked);
        if ctx.button("Press me").is_submitted() {
            state.clicks += 1;
        }
        state.button = Some(ctx.last_rect());
        ctx.treenode("Details", |ctx| {
            ctx.text("Commands are recorded per frame and replayed in z-order by the renderer.");
        });
    });
}

fn main() {
    let mut ctx = Context::default();
    let mut state = State { volume: 25.0, name: String::from("microui"), ..State::default() };
    let mut renderer = LogRenderer::default();

    // lay out once, hover for two frames (the hover root lags one), then click
    for frame in 0..5 {
        let target = state.button.map_or(vec2(0, 0), |r| vec2(r.x + r.width / 2, r.y + r.height / 2));
        let input = ctx.input_mut();
        match frame {
            1 => input.mousemove(target.x, target.y),
            3 => input.mousedown(target.x, target.y, MouseButton::LEFT),
            4 => input.mouseup(target.x, target.y, MouseButton::LEFT),
            _ => {}
        }
        ctx.frame(|ctx| ui(ctx, &mut state));
        renderer.frame = frame;
        ctx.render(&mut renderer);
    }
    println!("button clicks: {}", state.clicks);
}
