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
use std::cmp::max;

use tracing::debug;

use crate::*;

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 96;
/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 64;

impl Context {
    /// Opens a root window. Returns `false` (and opens nothing) when the window is closed.
    ///
    /// `r` only seeds the rectangle the first time the window is seen; afterwards the
    /// container keeps whatever the user dragged or resized it to.
    #[must_use]
    pub fn begin_window(&mut self, title: &str, r: Recti, opt: ContainerOption) -> bool {
        let id = self.get_id(title);
        let idx = match self.container_index(id, opt) {
            Some(idx) => idx,
            None => return false,
        };
        if !self.containers[idx].open {
            return false;
        }
        self.ids.push_id(id);

        if self.containers[idx].rect.width == 0 {
            self.containers[idx].rect = r;
        }
        self.begin_root_container(idx);
        let rect = self.containers[idx].rect;
        let mut body = rect;
        let wopt = opt.widget_opt();

        if !opt.has_no_frame() {
            self.draw_frame(rect, ControlColor::WindowBG);
        }

        if !opt.has_no_title() {
            let mut tr = rect;
            tr.height = self.style.title_height;
            self.draw_frame(tr, ControlColor::TitleBG);

            let title_id = self.get_id("!title");
            let title_state = self.update_control(Some(title_id), tr, wopt);
            self.draw_control_text(title, tr, ControlColor::TitleText, WidgetOption::NONE);
            if title_state.focused && self.input.mouse_down.is_left() {
                let delta = self.input.mouse_delta;
                self.containers[idx].rect.x += delta.x;
                self.containers[idx].rect.y += delta.y;
            }
            body.y += tr.height;
            body.height -= tr.height;

            if !opt.has_no_close() {
                let close_id = self.get_id("!close");
                let r = crate::rect(tr.x + tr.width - tr.height, tr.y, tr.height, tr.height);
                let color = self.style.color(ControlColor::TitleText);
                self.draw_icon(Icon::Close, r, color);
                let close_state = self.update_control(Some(close_id), r, wopt);
                if close_state.clicked {
                    self.containers[idx].open = false;
                    debug!(title, "window closed");
                }
            }
        }

        self.push_container_body(idx, body, opt);

        if !opt.is_fixed() {
            let sz = self.style.title_height;
            let resize_id = self.get_id("!resize");
            let r = crate::rect(rect.x + rect.width - sz, rect.y + rect.height - sz, sz, sz);
            let resize_state = self.update_control(Some(resize_id), r, wopt);
            if resize_state.focused && self.input.mouse_down.is_left() {
                let delta = self.input.mouse_delta;
                let cnt = &mut self.containers[idx];
                cnt.rect.width = max(MIN_WINDOW_WIDTH, cnt.rect.width + delta.x);
                cnt.rect.height = max(MIN_WINDOW_HEIGHT, cnt.rect.height + delta.y);
            }
        }

        if opt.is_auto_sizing() {
            let r = self.layout.current_body();
            let cnt = &mut self.containers[idx];
            cnt.rect.width = cnt.content_size.x + (cnt.rect.width - r.width);
            cnt.rect.height = cnt.content_size.y + (cnt.rect.height - r.height);
        }

        if opt.is_popup() && !self.input.mouse_pressed.is_none() && self.hover_root != Some(idx) {
            self.containers[idx].open = false;
            debug!(title, "popup dismissed");
        }

        let body = self.containers[idx].body;
        self.push_clip_rect(body);
        true
    }

    /// Closes the window opened by a successful [`Context::begin_window`].
    pub fn end_window(&mut self) {
        self.pop_clip_rect();
        self.end_root_container();
    }

    /// Runs `f` inside the window `title` if it is open.
    pub fn window<F: FnOnce(&mut Self)>(&mut self, title: &str, r: Recti, opt: ContainerOption, f: F) {
        if self.begin_window(title, r, opt) {
            f(self);
            self.end_window();
        }
    }

    /// Shows the popup `name` under the pointer on the next [`Context::popup`] call.
    pub fn open_popup(&mut self, name: &str) {
        let id = self.get_id(name);
        let idx = self.ensure_container(id);
        self.hover_root = Some(idx);
        self.next_hover_root = Some(idx);
        let mouse = self.input.mouse_pos;
        let cnt = &mut self.containers[idx];
        cnt.rect = crate::rect(mouse.x, mouse.y, 1, 1);
        cnt.open = true;
        self.bring_index_to_front(idx);
    }

    /// Runs `f` inside the popup `name` while it is open.
    ///
    /// Popups size themselves to their content and close on any click outside of them.
    pub fn popup<F: FnOnce(&mut Self)>(&mut self, name: &str, f: F) {
        let opt = ContainerOption::POPUP
            | ContainerOption::AUTO_SIZE
            | ContainerOption::NO_RESIZE
            | ContainerOption::NO_SCROLL
            | ContainerOption::NO_TITLE
            | ContainerOption::CLOSED;
        self.window(name, crate::rect(0, 0, 0, 0), opt, f);
    }

    /// Opens an embedded, scrollable panel in the next cell of the current layout.
    pub fn begin_panel(&mut self, name: &str, opt: ContainerOption) {
        let id = self.push_id(name);
        let idx = self.ensure_container(id);
        let r = self.layout.next();
        self.containers[idx].rect = r;
        if !opt.has_no_frame() {
            self.draw_frame(r, ControlColor::PanelBG);
        }
        self.container_stack.push(idx);
        self.push_container_body(idx, r, opt);
        let body = self.containers[idx].body;
        self.push_clip_rect(body);
    }

    /// Closes the panel opened by [`Context::begin_panel`].
    pub fn end_panel(&mut self) {
        self.pop_clip_rect();
        self.pop_container();
    }

    /// Runs `f` inside the panel `name`.
    pub fn panel<F: FnOnce(&mut Self)>(&mut self, name: &str, opt: ContainerOption, f: F) {
        self.begin_panel(name, opt);
        f(self);
        self.end_panel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_bg_rects(ctx: &Context) -> Vec<(i32, i32)> {
        let bg = ctx.style().color(ControlColor::WindowBG);
        ctx.commands()
            .filter_map(|cmd| match cmd {
                Command::Rect { rect, color } if *color == bg => Some((rect.x, rect.y)),
                _ => None,
            })
            .collect()
    }

    fn three_windows(ctx: &mut Context) {
        for (name, x) in [("a", 0), ("b", 100), ("c", 200)] {
            ctx.window(name, rect(x, 0, 90, 90), ContainerOption::NONE, |_| {});
        }
    }

    #[test]
    fn traversal_follows_z_order_not_declaration_order() {
        let mut ctx = Context::default();
        ctx.frame(three_windows);
        assert_eq!(window_bg_rects(&ctx), vec![(0, 0), (100, 0), (200, 0)]);

        ctx.frame(|ctx| ctx.bring_to_front("a"));
        ctx.frame(three_windows);
        assert_eq!(window_bg_rects(&ctx), vec![(100, 0), (200, 0), (0, 0)]);
    }

    #[test]
    fn windows_left_of_origin_keep_their_frame() {
        let mut ctx = Context::default();
        ctx.frame(|ctx| ctx.window("w", rect(-50, 10, 200, 100), ContainerOption::NONE, |_| {}));
        let bg = ctx.style().color(ControlColor::WindowBG);
        let border = ctx.style().color(ControlColor::Border);
        let frame = ctx.commands().find_map(|cmd| match cmd {
            Command::Rect { rect, color } if *color == bg => Some((rect.x, rect.width)),
            _ => None,
        });
        assert_eq!(frame, Some((-50, 200)));
        assert!(ctx.commands().any(|cmd| matches!(cmd, Command::Rect { rect, color } if *color == border && rect.x == -51)));
    }

    #[test]
    fn every_command_is_visited_once() {
        let mut ctx = Context::default();
        ctx.frame(|ctx| {
            ctx.window("outer", rect(0, 0, 200, 200), ContainerOption::NONE, |ctx| {
                ctx.label("outer");
                ctx.window("inner", rect(50, 50, 100, 100), ContainerOption::NONE, |ctx| {
                    ctx.label("inner");
                });
                ctx.label("after");
            });
        });
        let drawn = ctx.command_list().as_slice().iter().filter(|cmd| !matches!(cmd, Command::Jump { .. })).count();
        assert_eq!(ctx.commands().count(), drawn);
    }

    #[test]
    fn closing_a_window_hides_it() {
        let mut ctx = Context::default();
        let close = rect(200 - 24, 0, 24, 24);
        let (cx, cy) = (close.x + 5, close.y + 5);
        ctx.input_mut().mousemove(cx, cy);
        let mut shown = 0;
        for _ in 0..2 {
            ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| shown += 1));
        }
        ctx.input_mut().mousedown(cx, cy, MouseButton::LEFT);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| shown += 1));
        ctx.input_mut().mouseup(cx, cy, MouseButton::LEFT);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| shown += 1));
        assert_eq!(shown, 3);
    }

    #[test]
    fn title_drag_moves_the_window() {
        let mut ctx = Context::default();
        ctx.input_mut().mousemove(50, 10);
        for _ in 0..2 {
            ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        }
        ctx.input_mut().mousedown(50, 10, MouseButton::LEFT);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        ctx.input_mut().mousemove(70, 25);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        let r = ctx.get_container("w").rect;
        assert_eq!((r.x, r.y, r.width, r.height), (20, 15, 200, 100));
    }

    #[test]
    fn resize_respects_minimum() {
        let mut ctx = Context::default();
        let (gx, gy) = (190, 90);
        ctx.input_mut().mousemove(gx, gy);
        for _ in 0..2 {
            ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        }
        ctx.input_mut().mousedown(gx, gy, MouseButton::LEFT);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        ctx.input_mut().mousemove(gx - 500, gy - 500);
        ctx.frame(|ctx| ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {}));
        let r = ctx.get_container("w").rect;
        assert_eq!((r.width, r.height), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    fn host_with_popup(ctx: &mut Context, open: bool, shown: &mut i32) {
        ctx.window("host", rect(0, 0, 300, 300), ContainerOption::NONE, |ctx| {
            if open {
                ctx.open_popup("menu");
            }
            ctx.popup("menu", |ctx| {
                *shown += 1;
                ctx.label("item");
            });
        });
    }

    #[test]
    fn popup_opens_at_pointer_and_closes_on_outside_click() {
        let mut ctx = Context::default();
        let mut shown = 0;
        ctx.input_mut().mousemove(40, 40);
        ctx.frame(|ctx| host_with_popup(ctx, false, &mut shown));
        assert_eq!(shown, 0);

        ctx.frame(|ctx| host_with_popup(ctx, true, &mut shown));
        assert_eq!(shown, 1);
        ctx.push_id("host");
        let popup = ctx.get_container("menu").rect;
        ctx.pop_id();
        assert_eq!((popup.x, popup.y), (40, 40));

        // the hover root trails the pointer by one frame
        ctx.input_mut().mousemove(250, 250);
        ctx.frame(|ctx| host_with_popup(ctx, false, &mut shown));
        assert_eq!(shown, 2);

        ctx.input_mut().mousedown(250, 250, MouseButton::LEFT);
        ctx.frame(|ctx| host_with_popup(ctx, false, &mut shown));
        ctx.input_mut().mouseup(250, 250, MouseButton::LEFT);
        ctx.frame(|ctx| host_with_popup(ctx, false, &mut shown));
        assert_eq!(shown, 3);
    }

    #[test]
    fn panel_clip_is_restored_on_exit() {
        let mut ctx = Context::default();
        ctx.frame(|ctx| {
            ctx.window("w", rect(0, 0, 200, 200), ContainerOption::NONE, |ctx| {
                let outer = ctx.clip_rect();
                ctx.row(&[SizePolicy::Remainder(0)], SizePolicy::Fixed(60));
                ctx.panel("p", ContainerOption::NONE, |ctx| {
                    let clip = ctx.clip_rect();
                    let body = ctx.current_container().map(|c| c.body).unwrap_or_default();
                    assert_eq!((clip.x, clip.y, clip.width, clip.height), (body.x, body.y, body.width, body.height));
                    ctx.label("inside");
                });
                let after = ctx.clip_rect();
                assert_eq!((after.x, after.y, after.width, after.height), (outer.x, outer.y, outer.width, outer.height));
            });
        });
    }
}
