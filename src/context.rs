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
use std::rc::Rc;

use tracing::trace;

use crate::draw_context::DrawCtx;
use crate::layout::{CellMetrics, LayoutManager};
use crate::scrollbar::clamp_scroll;
use crate::*;

/// Immediate-mode UI state shared by every widget call of a frame and carried across frames.
pub struct Context {
    pub(crate) style: Style,
    pub(crate) metrics: MetricsHandle,
    pub(crate) input: Input,

    pub(crate) hover: Option<Id>,
    pub(crate) focus: Option<Id>,
    pub(crate) updated_focus: bool,

    pub(crate) frame: usize,
    pub(crate) in_frame: bool,
    pub(crate) last_zindex: i32,
    pub(crate) hover_root: Option<usize>,
    pub(crate) next_hover_root: Option<usize>,
    pub(crate) scroll_target: Option<usize>,

    pub(crate) number_edit: Option<Id>,
    pub(crate) number_edit_buf: String,

    pub(crate) commands: CommandList,
    pub(crate) root_list: Vec<usize>,
    pub(crate) container_stack: Vec<usize>,
    pub(crate) clip: ClipStack,
    pub(crate) ids: IdManager,
    pub(crate) layout: LayoutManager,

    pub(crate) container_pool: Pool<CONTAINER_POOL_SIZE>,
    pub(crate) containers: Vec<Container>,
    pub(crate) treenode_pool: Pool<TREENODE_POOL_SIZE>,
}

impl Default for Context {
    fn default() -> Self { Self::new(Style::default()) }
}

impl Context {
    /// Creates a context measuring text with the default [`FixedFont`].
    pub fn new(style: Style) -> Self { Self::with_metrics(style, Rc::new(FixedFont::default())) }

    /// Creates a context using the given text metrics.
    pub fn with_metrics(style: Style, metrics: MetricsHandle) -> Self {
        let mut layout = LayoutManager::default();
        layout.metrics = CellMetrics::new(&style, metrics.line_height());
        Self {
            style,
            metrics,
            input: Input::default(),
            hover: None,
            focus: None,
            updated_focus: false,
            frame: 0,
            in_frame: false,
            last_zindex: 0,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit: None,
            number_edit_buf: String::new(),
            commands: CommandList::default(),
            root_list: Vec::new(),
            container_stack: Vec::new(),
            clip: ClipStack::default(),
            ids: IdManager::new(),
            layout,
            container_pool: Pool::new(),
            containers: vec![Container::default(); CONTAINER_POOL_SIZE],
            treenode_pool: Pool::new(),
        }
    }

    /// Current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style. Takes effect for every cell laid out afterwards.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.layout.metrics = CellMetrics::new(&self.style, self.metrics.line_height());
    }

    /// Text metrics in use.
    pub fn metrics(&self) -> &dyn TextMetrics { self.metrics.as_ref() }

    /// Input snapshot of the current frame.
    pub fn input(&self) -> &Input { &self.input }

    /// Input accumulator; feed events here between frames.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Frame counter, incremented by every [`Context::begin`].
    pub fn frame_count(&self) -> usize { self.frame }

    /// Starts a frame: clears the command list and seeds the entry jump.
    pub fn begin(&mut self) {
        if self.in_frame {
            panic!("{}", FrameError::AlreadyInFrame);
        }
        self.in_frame = true;
        self.commands.clear();
        self.commands.push_jump();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.input.prelude();
        self.frame += 1;
        trace!(frame = self.frame, "frame begin");
    }

    /// Reports the first frame-scoped stack left unbalanced.
    pub fn check_stacks(&self) -> Result<(), FrameError> {
        if !self.in_frame {
            return Err(FrameError::NotInFrame);
        }
        let depths = [
            (StackKind::Container, self.container_stack.len()),
            (StackKind::Clip, self.clip.len()),
            (StackKind::Id, self.ids.len()),
            (StackKind::Layout, self.layout.len()),
        ];
        match depths.iter().find(|(_, depth)| *depth != 0) {
            Some((stack, depth)) => Err(FrameError::Unbalanced { stack: *stack, depth: *depth }),
            None => Ok(()),
        }
    }

    /// Finishes the frame and links root containers in z-order.
    ///
    /// # Panics
    ///
    /// Panics when a stack is unbalanced or no frame is open; see [`Context::check_stacks`].
    pub fn end(&mut self) {
        if let Err(err) = self.check_stacks() {
            panic!("{err}");
        }
        self.in_frame = false;

        if let Some(idx) = self.scroll_target {
            let delta = self.input.scroll_delta;
            let padding = self.style.padding;
            let cnt = &mut self.containers[idx];
            cnt.scroll.x = clamp_scroll(cnt.scroll.x + delta.x, cnt.content_size.x + padding * 2, cnt.body.width);
            cnt.scroll.y = clamp_scroll(cnt.scroll.y + delta.y, cnt.content_size.y + padding * 2, cnt.body.height);
        }

        if !self.updated_focus {
            self.focus = None;
        }
        self.updated_focus = false;

        if !self.input.mouse_pressed.is_none() {
            if let Some(idx) = self.next_hover_root {
                let z = self.containers[idx].zindex;
                if z < self.last_zindex && z >= 0 {
                    self.bring_index_to_front(idx);
                }
            }
        }

        self.input.epilogue();

        let containers = &self.containers;
        self.root_list.sort_by_key(|&idx| containers[idx].zindex);

        let len = self.commands.len();
        let mut prev_tail = None;
        for &idx in &self.root_list {
            let cnt = &self.containers[idx];
            if let (Some(head), Some(tail)) = (cnt.head, cnt.tail) {
                self.commands.set_jump(prev_tail.unwrap_or(0), head + 1);
                prev_tail = Some(tail);
            }
        }
        self.commands.set_jump(prev_tail.unwrap_or(0), len);

        trace!(frame = self.frame, commands = len, roots = self.root_list.len(), "frame end");
    }

    /// Runs `f` between [`Context::begin`] and [`Context::end`].
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.begin();
        f(self);
        self.end();
    }

    /// Visits the finished command list in z-order.
    pub fn commands(&self) -> Commands<'_> { self.commands.iter() }

    /// Raw command buffer in emission order.
    pub fn command_list(&self) -> &CommandList { &self.commands }

    /// Replays the finished command list into `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) { self.commands.render(renderer); }

    /// Widget under the pointer, as of the last update.
    pub fn hover(&self) -> Option<Id> { self.hover }

    /// Widget owning focus.
    pub fn focus(&self) -> Option<Id> { self.focus }

    /// Moves focus; the new owner keeps it through the current frame.
    pub fn set_focus(&mut self, id: Option<Id>) {
        self.focus = id;
        self.updated_focus = true;
    }

    /// Most recently computed ID.
    pub fn last_id(&self) -> Option<Id> { self.ids.last_id() }

    /// Hashes a label under the current ID scope.
    pub fn get_id(&mut self, label: &str) -> Id { self.ids.get_id_from_str(label) }

    /// Hashes raw bytes under the current ID scope.
    pub fn get_id_from_bytes(&mut self, bytes: &[u8]) -> Id { self.ids.get_id_from_bytes(bytes) }

    /// Hashes the address of `value` under the current ID scope.
    pub fn get_id_from_ptr<T: ?Sized>(&mut self, value: &T) -> Id { self.ids.get_id_from_ptr(value) }

    /// Opens an ID scope named `label`.
    pub fn push_id(&mut self, label: &str) -> Id { self.ids.push_id_from_str(label) }

    /// Closes the innermost ID scope.
    pub fn pop_id(&mut self) { self.ids.pop_id(); }

    /// Pushes `rect` intersected with the current clip rectangle.
    pub fn push_clip_rect(&mut self, rect: Recti) { self.clip.push(rect); }

    /// Pops the innermost clip rectangle.
    pub fn pop_clip_rect(&mut self) { self.clip.pop(); }

    /// Current clip rectangle.
    pub fn clip_rect(&self) -> Recti { self.clip.current() }

    /// Classifies `r` against the current clip rectangle.
    pub fn check_clip(&self, r: Recti) -> Clip { self.clip.check(r) }

    /// Declares a new row of cells.
    pub fn row(&mut self, widths: &[SizePolicy], height: SizePolicy) { self.layout.row(widths, height); }

    /// Runs `f` with a temporary row configuration, then restores the previous one on a fresh row.
    pub fn with_row<F: FnOnce(&mut Self)>(&mut self, widths: &[SizePolicy], height: SizePolicy, f: F) {
        let snapshot = self.layout.snapshot_row();
        self.layout.row(widths, height);
        f(self);
        self.layout.restore_row(snapshot);
    }

    /// Runs `f` inside a nested layout filling the next cell.
    pub fn column<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.begin_column();
        f(self);
        self.end_column();
    }

    /// Opens a nested layout filling the next cell.
    pub fn begin_column(&mut self) { self.layout.begin_column(); }

    /// Closes the nested layout and merges its extent into the parent.
    pub fn end_column(&mut self) { self.layout.end_column(); }

    /// Width of cells in rows declared without column widths.
    pub fn set_width(&mut self, width: SizePolicy) { self.layout.set_width(width); }

    /// Height of the cells of the current row.
    pub fn set_height(&mut self, height: SizePolicy) { self.layout.set_height(height); }

    /// Forces the rectangle of the next cell, absolute or relative to the layout body.
    pub fn set_next(&mut self, r: Recti, relative: bool) { self.layout.set_next(r, relative); }

    /// Allocates the next cell of the current layout.
    pub fn next_cell(&mut self) -> Recti { self.layout.next() }

    /// Rectangle returned by the last cell allocation.
    pub fn last_rect(&self) -> Recti { self.layout.last_rect }

    pub(crate) fn draw_ctx(&mut self) -> DrawCtx<'_> { DrawCtx::new(&mut self.commands, &mut self.clip, &self.style, self.metrics.as_ref()) }

    /// Emits a filled rectangle clipped to the current clip rectangle.
    pub fn draw_rect(&mut self, rect: Recti, color: Color) { self.draw_ctx().draw_rect(rect, color); }

    /// Emits a one pixel outline.
    pub fn draw_box(&mut self, r: Recti, color: Color) { self.draw_ctx().draw_box(r, color); }

    /// Emits a line of text.
    pub fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color) { self.draw_ctx().draw_text(text, pos, color); }

    /// Emits an icon.
    pub fn draw_icon(&mut self, id: Icon, rect: Recti, color: Color) { self.draw_ctx().draw_icon(id, rect, color); }

    /// Emits a caller drawn region. The callback runs when the command list is rendered.
    pub fn draw_custom<F: Fn(&CustomDrawArgs) + 'static>(&mut self, rect: Recti, f: F) { self.draw_ctx().draw_custom(rect, Rc::new(f)); }

    /// Emits a styled frame with its border.
    pub fn draw_frame(&mut self, rect: Recti, colorid: ControlColor) { self.draw_ctx().draw_frame(rect, colorid); }

    /// Emits a widget frame tinted by its hover and focus state.
    pub fn draw_control_frame(&mut self, id: Id, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        let focused = self.focus == Some(id);
        let hovered = self.hover == Some(id);
        self.draw_ctx().draw_widget_frame(focused, hovered, rect, colorid, opt);
    }

    /// Emits aligned, vertically centered text clipped to `rect`.
    pub fn draw_control_text(&mut self, text: &str, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        self.draw_ctx().draw_control_text(text, rect, colorid, opt);
    }

    pub(crate) fn in_hover_root(&self) -> bool {
        for &idx in self.container_stack.iter().rev() {
            if self.hover_root == Some(idx) {
                return true;
            }
            // only root containers carry a head jump
            if self.containers[idx].head.is_some() {
                break;
            }
        }
        false
    }

    /// Returns `true` if the pointer is over `rect`, inside the clip, and inside the hover root.
    pub fn mouse_over(&self, rect: Recti) -> bool {
        let pos = self.input.mouse_pos;
        rect_contains(rect, pos) && rect_contains(self.clip.current(), pos) && self.in_hover_root()
    }

    /// Runs the hover/focus state machine for one widget.
    pub fn update_control(&mut self, id: Option<Id>, rect: Recti, opt: WidgetOption) -> ControlState {
        let id = match id {
            Some(id) => id,
            None => return ControlState::default(),
        };
        let mouseover = self.mouse_over(rect);

        if self.focus == Some(id) {
            self.updated_focus = true;
        }
        if opt.is_not_interactive() {
            return ControlState::default();
        }
        if mouseover && self.input.mouse_down.is_none() {
            self.hover = Some(id);
        }

        if self.focus == Some(id) {
            if !self.input.mouse_pressed.is_none() && !mouseover {
                self.set_focus(None);
            }
            if self.input.mouse_down.is_none() && !opt.is_holding_focus() {
                self.set_focus(None);
            }
        }

        if self.hover == Some(id) {
            if !self.input.mouse_pressed.is_none() {
                self.set_focus(Some(id));
            } else if !mouseover {
                self.hover = None;
            }
        }

        let focused = self.focus == Some(id);
        ControlState {
            hovered: self.hover == Some(id),
            focused,
            clicked: focused && self.input.mouse_pressed.is_left(),
            active: focused && self.input.mouse_down.is_left(),
        }
    }
}
