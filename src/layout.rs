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

use super::*;

/// Describes how a layout dimension should be resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Falls back to the style default (cell width, or line height plus padding).
    #[default]
    Auto,
    /// Always exactly this many pixels.
    Fixed(i32),
    /// Fills the space left in the current scope minus the given margin.
    Remainder(i32),
}

impl SizePolicy {
    pub(crate) fn resolve(self, default_size: i32, available_space: i32) -> i32 {
        let resolved = match self {
            SizePolicy::Auto => default_size,
            SizePolicy::Fixed(value) => value,
            SizePolicy::Remainder(margin) => available_space.saturating_sub(margin),
        };
        resolved.max(0)
    }
}

#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct CellMetrics {
    pub default_width: i32,
    pub default_height: i32,
    pub spacing: i32,
}

impl CellMetrics {
    pub(crate) fn new(style: &Style, line_height: i32) -> Self {
        Self {
            default_width: style.default_cell_width + style.padding * 2,
            default_height: max(style.default_cell_height, line_height) + style.padding * 2,
            spacing: style.spacing,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct NextCell {
    rect: Recti,
    relative: bool,
}

#[derive(Clone, Default, Debug)]
struct Layout {
    body: Recti,
    position: Vec2i,
    max: Option<Vec2i>,
    next_row: i32,
    indent: i32,
    widths: Vec<SizePolicy>,
    width: SizePolicy,
    height: SizePolicy,
    item_index: usize,
    next: Option<NextCell>,
}

/// Saved row configuration, restored by [`LayoutManager::restore_row`].
pub(crate) struct RowSnapshot {
    widths: Vec<SizePolicy>,
    height: SizePolicy,
}

#[derive(Clone, Default, Debug)]
pub(crate) struct LayoutManager {
    pub metrics: CellMetrics,
    pub last_rect: Recti,
    stack: Vec<Layout>,
}

impl LayoutManager {
    pub fn len(&self) -> usize { self.stack.len() }

    pub fn push_layout(&mut self, body: Recti, scroll: Vec2i) {
        let layout = Layout { body: rect(body.x - scroll.x, body.y - scroll.y, body.width, body.height), ..Layout::default() };
        self.stack.push(layout);
        self.row(&[SizePolicy::Auto], SizePolicy::Auto);
    }

    fn top(&self) -> &Layout {
        match self.stack.last() {
            Some(layout) => layout,
            None => panic!("{}", FrameError::Underflow(StackKind::Layout)),
        }
    }

    fn top_mut(&mut self) -> &mut Layout {
        match self.stack.last_mut() {
            Some(layout) => layout,
            None => panic!("{}", FrameError::Underflow(StackKind::Layout)),
        }
    }

    pub fn current_body(&self) -> Recti { self.top().body }

    pub fn current_max(&self) -> Option<Vec2i> { self.top().max }

    pub fn pop_scope(&mut self) {
        if self.stack.pop().is_none() {
            panic!("{}", FrameError::Underflow(StackKind::Layout));
        }
    }

    pub fn adjust_indent(&mut self, delta: i32) { self.top_mut().indent += delta; }

    pub fn begin_column(&mut self) {
        let layout_rect = self.next();
        self.push_layout(layout_rect, vec2(0, 0));
    }

    pub fn end_column(&mut self) {
        if self.stack.len() < 2 {
            panic!("{}", FrameError::Underflow(StackKind::Layout));
        }
        let finished = match self.stack.pop() {
            Some(layout) => layout,
            None => return,
        };
        let parent = self.top_mut();

        parent.position.x = max(parent.position.x, finished.position.x + finished.body.x - parent.body.x);
        parent.next_row = max(parent.next_row, finished.next_row + finished.body.y - parent.body.y);

        match (&mut parent.max, finished.max) {
            (_, None) => (),
            (None, Some(m)) => parent.max = Some(m),
            (Some(am), Some(bm)) => {
                parent.max = Some(Vec2i::new(max(am.x, bm.x), max(am.y, bm.y)));
            }
        }
    }

    pub fn row(&mut self, widths: &[SizePolicy], height: SizePolicy) {
        let layout = self.top_mut();
        layout.widths.clear();
        layout.widths.extend_from_slice(widths);
        layout.height = height;
        layout.item_index = 0;
        layout.position = vec2(layout.indent, layout.next_row);
    }

    pub fn snapshot_row(&self) -> RowSnapshot {
        let layout = self.top();
        RowSnapshot { widths: layout.widths.clone(), height: layout.height }
    }

    pub fn restore_row(&mut self, snapshot: RowSnapshot) { self.row(&snapshot.widths, snapshot.height); }

    /// Width used by rows that declare no column widths.
    pub fn set_width(&mut self, width: SizePolicy) { self.top_mut().width = width; }

    /// Height of the cells of the current row.
    pub fn set_height(&mut self, height: SizePolicy) { self.top_mut().height = height; }

    /// Overrides the next cell. Relative rectangles are offset by the scope body (and scroll).
    pub fn set_next(&mut self, r: Recti, relative: bool) { self.top_mut().next = Some(NextCell { rect: r, relative }); }

    pub fn next(&mut self) -> Recti {
        let metrics = self.metrics;
        let layout = self.top_mut();

        let mut res = match layout.next.take() {
            Some(NextCell { rect, relative: false }) => {
                self.last_rect = rect;
                return rect;
            }
            Some(NextCell { rect, relative: true }) => rect,
            None => {
                if layout.item_index == layout.widths.len() {
                    layout.item_index = 0;
                    layout.position = vec2(layout.indent, layout.next_row);
                }
                let width_policy = layout.widths.get(layout.item_index).copied().unwrap_or(layout.width);
                let x = layout.position.x;
                let y = layout.position.y;
                let w = width_policy.resolve(metrics.default_width, layout.body.width.saturating_sub(x));
                let h = layout.height.resolve(metrics.default_height, layout.body.height.saturating_sub(y));
                if layout.item_index < layout.widths.len() {
                    layout.item_index += 1;
                }
                rect(x, y, w, h)
            }
        };

        layout.position.x = layout.position.x.saturating_add(res.width).saturating_add(metrics.spacing);
        layout.next_row = max(layout.next_row, res.y + res.height + metrics.spacing);

        res.x += layout.body.x;
        res.y += layout.body.y;

        layout.max = match layout.max {
            None => Some(Vec2i::new(res.x + res.width, res.y + res.height)),
            Some(am) => Some(Vec2i::new(max(am.x, res.x + res.width), max(am.y, res.y + res.height))),
        };

        self.last_rect = res;
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> LayoutManager {
        let mut lm = LayoutManager::default();
        lm.metrics = CellMetrics { default_width: 80, default_height: 20, spacing: 4 };
        lm.push_layout(rect(10, 10, 200, 100), vec2(0, 0));
        lm
    }

    fn assert_rect_eq(actual: Recti, expected: Recti) {
        assert_eq!(
            (actual.x, actual.y, actual.width, actual.height),
            (expected.x, expected.y, expected.width, expected.height)
        );
    }

    #[test]
    fn default_row_stacks_vertically() {
        let mut lm = manager();
        assert_rect_eq(lm.next(), rect(10, 10, 80, 20));
        assert_rect_eq(lm.next(), rect(10, 34, 80, 20));
        assert_eq!(lm.current_max().map(|m| (m.x, m.y)), Some((90, 54)));
    }

    #[test]
    fn row_wraps_after_last_column() {
        let mut lm = manager();
        lm.row(&[SizePolicy::Fixed(50), SizePolicy::Remainder(0)], SizePolicy::Fixed(16));
        assert_rect_eq(lm.next(), rect(10, 10, 50, 16));
        assert_rect_eq(lm.next(), rect(64, 10, 146, 16));
        assert_rect_eq(lm.next(), rect(10, 30, 50, 16));
    }

    #[test]
    fn remainder_reserves_margin() {
        let mut lm = manager();
        lm.row(&[SizePolicy::Remainder(30)], SizePolicy::Remainder(0));
        assert_rect_eq(lm.next(), rect(10, 10, 170, 100));
    }

    #[test]
    fn scroll_offsets_body() {
        let mut lm = LayoutManager::default();
        lm.metrics = CellMetrics { default_width: 80, default_height: 20, spacing: 4 };
        lm.push_layout(rect(10, 10, 200, 100), vec2(0, 15));
        assert_rect_eq(lm.next(), rect(10, -5, 80, 20));
    }

    #[test]
    fn set_next_absolute_and_relative() {
        let mut lm = manager();
        lm.set_next(rect(1, 2, 3, 4), false);
        assert_rect_eq(lm.next(), rect(1, 2, 3, 4));
        assert!(lm.current_max().is_none());
        lm.set_next(rect(1, 2, 3, 4), true);
        assert_rect_eq(lm.next(), rect(11, 12, 3, 4));
        assert_rect_eq(lm.last_rect, rect(11, 12, 3, 4));
    }

    #[test]
    fn column_reports_extent_to_parent() {
        let mut lm = manager();
        lm.row(&[SizePolicy::Fixed(60), SizePolicy::Fixed(60)], SizePolicy::Fixed(0));
        lm.begin_column();
        lm.row(&[SizePolicy::Remainder(0)], SizePolicy::Fixed(10));
        let a = lm.next();
        let b = lm.next();
        assert_rect_eq(a, rect(10, 10, 60, 10));
        assert_rect_eq(b, rect(10, 24, 60, 10));
        lm.end_column();
        let c = lm.next();
        assert_rect_eq(c, rect(74, 10, 60, 0));
        lm.row(&[SizePolicy::Auto], SizePolicy::Fixed(5));
        assert_eq!(lm.next().y, 38);
    }

    #[test]
    fn indent_shifts_new_rows() {
        let mut lm = manager();
        lm.adjust_indent(24);
        lm.row(&[SizePolicy::Remainder(0)], SizePolicy::Auto);
        assert_rect_eq(lm.next(), rect(34, 10, 176, 20));
    }

    #[test]
    fn width_override_applies_to_rows_without_columns() {
        let mut lm = manager();
        lm.row(&[], SizePolicy::Fixed(12));
        lm.set_width(SizePolicy::Fixed(40));
        assert_rect_eq(lm.next(), rect(10, 10, 40, 12));
        assert_rect_eq(lm.next(), rect(10, 26, 40, 12));
    }
}
