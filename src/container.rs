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
use tracing::debug;

use crate::scrollbar::{clamp_scroll, scrollbar_base, scrollbar_drag_delta, scrollbar_thumb, ScrollAxis};
use crate::*;

#[derive(Copy, Clone, Debug, Default)]
/// Persistent state of a window, popup, or panel. Survives across frames in the container pool.
pub struct Container {
    /// Outer rectangle, including title bar and frame.
    pub rect: Recti,
    /// Content area left after the title bar and scrollbars.
    pub body: Recti,
    /// Extent of the content laid out during the last frame.
    pub content_size: Vec2i,
    /// Scroll offset of the body.
    pub scroll: Vec2i,
    /// Stacking order; higher draws on top.
    pub zindex: i32,
    /// Whether the container is shown.
    pub open: bool,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
}

impl Context {
    pub(crate) fn container_index(&mut self, id: Id, opt: ContainerOption) -> Option<usize> {
        if let Some(idx) = self.container_pool.get(id) {
            if self.containers[idx].open || !opt.is_closed() {
                self.container_pool.update(idx, self.frame);
            }
            return Some(idx);
        }
        if opt.is_closed() {
            return None;
        }
        Some(self.create_container(id))
    }

    pub(crate) fn ensure_container(&mut self, id: Id) -> usize {
        match self.container_pool.get(id) {
            Some(idx) => {
                self.container_pool.update(idx, self.frame);
                idx
            }
            None => self.create_container(id),
        }
    }

    fn create_container(&mut self, id: Id) -> usize {
        let idx = self.container_pool.init(id, self.frame);
        self.containers[idx] = Container { open: true, ..Container::default() };
        self.bring_index_to_front(idx);
        debug!(slot = idx, id = id.raw(), "container created");
        idx
    }

    /// Looks up (or creates) the container named `name` in the current ID scope.
    pub fn get_container(&mut self, name: &str) -> &mut Container {
        let id = self.get_id(name);
        let idx = self.ensure_container(id);
        &mut self.containers[idx]
    }

    /// Innermost open container of the current frame.
    pub fn current_container(&self) -> Option<&Container> { self.container_stack.last().map(|&idx| &self.containers[idx]) }

    /// Sets the scroll offset of the innermost container.
    pub fn set_scroll(&mut self, scroll: Vec2i) {
        if let Some(&idx) = self.container_stack.last() {
            self.containers[idx].scroll = scroll;
        }
    }

    /// Raises the container named `name` above every other root container.
    pub fn bring_to_front(&mut self, name: &str) {
        let id = self.get_id(name);
        let idx = self.ensure_container(id);
        self.bring_index_to_front(idx);
    }

    pub(crate) fn bring_index_to_front(&mut self, idx: usize) {
        self.last_zindex += 1;
        self.containers[idx].zindex = self.last_zindex;
    }

    pub(crate) fn begin_root_container(&mut self, idx: usize) {
        self.container_stack.push(idx);
        self.root_list.push(idx);
        let head = self.commands.push_jump();
        self.containers[idx].head = Some(head);

        let cnt = &self.containers[idx];
        let above_candidate = match self.next_hover_root {
            Some(other) => cnt.zindex > self.containers[other].zindex,
            None => true,
        };
        if rect_contains(cnt.rect, self.input.mouse_pos) && above_candidate {
            self.next_hover_root = Some(idx);
        }
        // root containers ignore the clip of whatever declared them
        self.clip.push_unclipped();
    }

    pub(crate) fn end_root_container(&mut self) {
        if let Some(&idx) = self.container_stack.last() {
            let tail = self.commands.push_jump();
            self.containers[idx].tail = Some(tail);
            if let Some(head) = self.containers[idx].head {
                self.commands.set_jump(head, self.commands.len());
            }
        }
        self.pop_clip_rect();
        self.pop_container();
    }

    pub(crate) fn push_container_body(&mut self, idx: usize, body: Recti, opt: ContainerOption) {
        let body = if opt.has_no_scroll() { body } else { self.scrollbars(idx, body) };
        let padding = self.style.padding;
        let scroll = self.containers[idx].scroll;
        self.layout.push_layout(expand_rect(body, -padding), scroll);
        self.containers[idx].body = body;
    }

    pub(crate) fn pop_container(&mut self) {
        let idx = match self.container_stack.last() {
            Some(&idx) => idx,
            None => panic!("{}", FrameError::Underflow(StackKind::Container)),
        };
        let body = self.layout.current_body();
        self.containers[idx].content_size = match self.layout.current_max() {
            Some(max) => vec2(max.x - body.x, max.y - body.y),
            None => Vec2i::default(),
        };
        self.container_stack.pop();
        self.layout.pop_scope();
        self.pop_id();
    }

    fn scrollbars(&mut self, idx: usize, body: Recti) -> Recti {
        let sz = self.style.scrollbar_size;
        let padding = self.style.padding;
        let mut cs = self.containers[idx].content_size;
        cs.x += padding * 2;
        cs.y += padding * 2;

        self.push_clip_rect(body);
        // overflow is judged against last frame's body to avoid flicker
        let prev = self.containers[idx].body;
        let mut body = body;
        if cs.y > prev.height {
            body.width -= sz;
        }
        if cs.x > prev.width {
            body.height -= sz;
        }
        self.scrollbar(idx, ScrollAxis::Vertical, body, cs);
        self.scrollbar(idx, ScrollAxis::Horizontal, body, cs);
        self.pop_clip_rect();
        body
    }

    fn scrollbar(&mut self, idx: usize, axis: ScrollAxis, body: Recti, cs: Vec2i) {
        let content_len = axis.pick(cs);
        let view_len = axis.extent(body);
        let max_scroll = content_len - view_len;

        if max_scroll > 0 && view_len > 0 {
            let id = self.get_id(axis.id_label());
            let base = scrollbar_base(axis, body, self.style.scrollbar_size);
            let control = self.update_control(Some(id), base, WidgetOption::NONE);

            let mut scroll = axis.pick(self.containers[idx].scroll);
            if control.focused && self.input.mouse_down.is_left() {
                scroll += scrollbar_drag_delta(axis, self.input.mouse_delta, content_len, base);
            }
            scroll = clamp_scroll(scroll, content_len, view_len);
            *axis.pick_mut(&mut self.containers[idx].scroll) = scroll;

            self.draw_frame(base, ControlColor::ScrollBase);
            let thumb = scrollbar_thumb(axis, base, view_len, content_len, scroll, self.style.thumb_size);
            self.draw_frame(thumb, ControlColor::ScrollThumb);

            if self.mouse_over(body) {
                self.scroll_target = Some(idx);
            }
        } else {
            *axis.pick_mut(&mut self.containers[idx].scroll) = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_lookup_does_not_create() {
        let mut ctx = Context::default();
        ctx.begin();
        let id = ctx.get_id("popup");
        assert_eq!(ctx.container_index(id, ContainerOption::CLOSED), None);
        assert!(ctx.container_pool.is_empty());
        let idx = ctx.ensure_container(id);
        assert!(ctx.containers[idx].open);
        assert_eq!(ctx.container_index(id, ContainerOption::CLOSED), Some(idx));
        ctx.end();
    }

    #[test]
    fn new_containers_come_to_front() {
        let mut ctx = Context::default();
        ctx.begin();
        let a = ctx.get_container("a").zindex;
        let b = ctx.get_container("b").zindex;
        assert!(b > a);
        ctx.bring_to_front("a");
        assert!(ctx.get_container("a").zindex > b);
        ctx.end();
    }

    fn tall_list(ctx: &mut Context) {
        ctx.window("list", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |ctx| {
            for i in 0..40 {
                ctx.label(&format!("row {i}"));
            }
        });
    }

    #[test]
    fn thumb_drag_is_clamped_to_content() {
        let mut ctx = Context::default();
        let x = 200 - ctx.style().scrollbar_size / 2;
        ctx.input_mut().mousemove(x, 5);
        for _ in 0..3 {
            ctx.frame(tall_list);
        }
        ctx.input_mut().mousedown(x, 5, MouseButton::LEFT);
        ctx.frame(tall_list);
        assert_eq!(ctx.get_container("list").scroll.y, 0);

        ctx.input_mut().mousemove(x, 5 + 5_000);
        ctx.frame(tall_list);
        let padding = ctx.style().padding;
        let c = *ctx.get_container("list");
        let max_scroll = c.content_size.y + padding * 2 - c.body.height;
        assert!(max_scroll > 0);
        assert_eq!(c.scroll.y, max_scroll);

        ctx.input_mut().mousemove(x, 5 - 20_000);
        ctx.frame(tall_list);
        assert_eq!(ctx.get_container("list").scroll.y, 0);
        ctx.input_mut().mouseup(x, 5 - 20_000, MouseButton::LEFT);
    }

    #[test]
    fn set_scroll_targets_innermost_container() {
        let mut ctx = Context::default();
        ctx.frame(|ctx| {
            ctx.window("w", rect(0, 0, 100, 100), ContainerOption::NONE, |ctx| {
                ctx.set_scroll(vec2(0, 7));
                assert_eq!(ctx.current_container().map(|c| c.scroll.y), Some(7));
            });
            assert!(ctx.current_container().is_none());
        });
    }
}
