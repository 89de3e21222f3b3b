//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::*;

impl Context {
    /// Entry point for custom widgets: allocates the next cell, resolves interaction for `id`,
    /// and hands both to `f`.
    pub fn control<F: FnOnce(&mut Self, Recti, ControlState) -> ResourceState>(&mut self, id: Option<Id>, opt: WidgetOption, f: F) -> ResourceState {
        let r = self.layout.next();
        let state = self.update_control(id, r, opt);
        f(self, r, state)
    }

    /// Single line of text in the next cell.
    pub fn label(&mut self, text: &str) {
        let r = self.layout.next();
        self.draw_control_text(text, r, ControlColor::Text, WidgetOption::NONE);
    }

    /// Word-wrapped text. Newlines start new paragraphs.
    pub fn text(&mut self, text: &str) {
        let color = self.style.color(ControlColor::Text);
        let metrics = self.metrics.clone();
        let line_height = metrics.line_height();
        let space = metrics.text_width(" ");
        self.column(|ctx| {
            ctx.row(&[SizePolicy::Remainder(0)], SizePolicy::Fixed(line_height));
            for paragraph in text.split('\n') {
                let mut r = ctx.next_cell();
                let mut line = String::new();
                for word in paragraph.split(' ') {
                    if !line.is_empty() {
                        if metrics.text_width(&line) + space + metrics.text_width(word) > r.width {
                            ctx.draw_text(&line, vec2(r.x, r.y), color);
                            r = ctx.next_cell();
                            line.clear();
                        } else {
                            line.push(' ');
                        }
                    }
                    line.push_str(word);
                }
                ctx.draw_text(&line, vec2(r.x, r.y), color);
            }
        });
    }

    /// Centered text button. Returns [`ResourceState::SUBMIT`] on the frame it is clicked.
    pub fn button(&mut self, label: &str) -> ResourceState { self.button_ex(label, None, WidgetOption::ALIGN_CENTER) }

    /// Button with an optional icon. Icon-only buttons derive their ID from the icon.
    pub fn button_ex(&mut self, label: &str, icon: Option<Icon>, opt: WidgetOption) -> ResourceState {
        let id = match (label.is_empty(), icon) {
            (true, Some(icon)) => self.get_id_from_bytes(&(icon as u32).to_le_bytes()),
            _ => self.get_id(label),
        };
        let r = self.layout.next();
        let state = self.update_control(Some(id), r, opt);
        let res = if state.clicked { ResourceState::SUBMIT } else { ResourceState::NONE };

        self.draw_control_frame(id, r, ControlColor::Button, opt);
        if !label.is_empty() {
            self.draw_control_text(label, r, ControlColor::Text, opt);
        }
        if let Some(icon) = icon {
            let color = self.style.color(ControlColor::Text);
            self.draw_icon(icon, r, color);
        }
        res
    }

    /// Checkbox bound to `state`; the ID comes from the address of `state`.
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> ResourceState {
        let id = self.get_id_from_ptr(&*state);
        let r = self.layout.next();
        let box_rect = rect(r.x, r.y, r.height, r.height);
        let control = self.update_control(Some(id), r, WidgetOption::NONE);

        let mut res = ResourceState::NONE;
        if control.clicked {
            *state = !*state;
            res |= ResourceState::CHANGE;
        }

        self.draw_control_frame(id, box_rect, ControlColor::Base, WidgetOption::NONE);
        if *state {
            let color = self.style.color(ControlColor::Text);
            self.draw_icon(Icon::Check, box_rect, color);
        }
        let text_rect = rect(r.x + box_rect.width, r.y, r.width - box_rect.width, r.height);
        self.draw_control_text(label, text_rect, ControlColor::Text, WidgetOption::NONE);
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::widgets::test_support::{in_window, texts};
    use crate::*;

    fn ok_button(ctx: &mut Context, out: &mut ResourceState) {
        in_window(ctx, |ctx| {
            ctx.set_next(rect(10, 10, 50, 20), false);
            *out = ctx.button("OK");
        });
    }

    #[test]
    fn click_on_hovered_button_submits() {
        let mut ctx = Context::default();
        let mut res = ResourceState::NONE;
        ctx.input_mut().mousemove(30, 20);
        ok_button(&mut ctx, &mut res);
        ok_button(&mut ctx, &mut res);
        assert!(res.is_none());

        ctx.input_mut().mousedown(30, 20, MouseButton::LEFT);
        ok_button(&mut ctx, &mut res);
        assert!(res.is_submitted());
        ctx.push_id("test");
        let id = ctx.get_id("OK");
        ctx.pop_id();
        assert_eq!(ctx.focus(), Some(id));

        ok_button(&mut ctx, &mut res);
        assert!(res.is_none());
    }

    #[test]
    fn press_elsewhere_then_release_over_button_does_nothing() {
        let mut ctx = Context::default();
        let mut res = ResourceState::NONE;
        ctx.input_mut().mousedown(150, 150, MouseButton::LEFT);
        ok_button(&mut ctx, &mut res);
        ctx.input_mut().mousemove(30, 20);
        ok_button(&mut ctx, &mut res);
        ctx.input_mut().mouseup(30, 20, MouseButton::LEFT);
        ok_button(&mut ctx, &mut res);
        assert!(res.is_none());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn checkbox_toggles_bound_value() {
        let mut ctx = Context::default();
        let mut checked = false;
        let mut res = ResourceState::NONE;
        ctx.input_mut().mousemove(12, 12);
        for _ in 0..2 {
            in_window(&mut ctx, |ctx| res = ctx.checkbox("flag", &mut checked));
        }
        ctx.input_mut().mousedown(12, 12, MouseButton::LEFT);
        in_window(&mut ctx, |ctx| res = ctx.checkbox("flag", &mut checked));
        assert!(checked);
        assert!(res.is_changed());
        assert!(ctx.commands().any(|cmd| matches!(cmd, Command::Icon { id: Icon::Check, .. })));
    }

    #[test]
    fn text_wraps_on_word_boundaries() {
        let mut ctx = Context::default();
        ctx.frame(|ctx| {
            ctx.window("t", rect(0, 0, 100, 200), ContainerOption::NO_TITLE, |ctx| {
                ctx.text("aaaa bbbb cccc\ndd");
            });
        });
        assert_eq!(texts(&ctx), vec!["aaaa bbbb", "cccc", "dd"]);
        let ys: Vec<i32> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { pos, .. } => Some(pos.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys[1] - ys[0], 16);
    }

    #[test]
    fn custom_control_receives_its_cell() {
        let mut ctx = Context::default();
        in_window(&mut ctx, |ctx| {
            ctx.set_next(rect(20, 20, 40, 10), false);
            let res = ctx.control(None, WidgetOption::NONE, |ctx, r, state| {
                assert_eq!((r.x, r.y, r.width, r.height), (20, 20, 40, 10));
                assert!(!state.hovered);
                ctx.draw_custom(r, |_| {});
                ResourceState::ACTIVE
            });
            assert!(res.is_active());
        });
        assert!(ctx.commands().any(|cmd| matches!(cmd, Command::Custom { .. })));
    }
}
