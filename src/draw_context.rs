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

pub(crate) struct DrawCtx<'a> {
    commands: &'a mut CommandList,
    clip: &'a mut ClipStack,
    style: &'a Style,
    metrics: &'a dyn TextMetrics,
}

impl<'a> DrawCtx<'a> {
    pub(crate) fn new(commands: &'a mut CommandList, clip: &'a mut ClipStack, style: &'a Style, metrics: &'a dyn TextMetrics) -> Self {
        Self { commands, clip, style, metrics }
    }

    pub(crate) fn current_clip_rect(&self) -> Recti { self.clip.current() }

    pub(crate) fn push_clip_rect(&mut self, rect: Recti) { self.clip.push(rect); }

    pub(crate) fn pop_clip_rect(&mut self) { self.clip.pop(); }

    pub(crate) fn push_command(&mut self, cmd: Command) -> usize { self.commands.push(cmd) }

    pub(crate) fn set_clip(&mut self, rect: Recti) { self.push_command(Command::Clip { rect }); }

    pub(crate) fn check_clip(&self, r: Recti) -> Clip { self.clip.check(r) }

    pub(crate) fn draw_rect(&mut self, rect: Recti, color: Color) {
        let rect = intersect_rects(rect, self.current_clip_rect());
        if rect.width > 0 && rect.height > 0 {
            self.push_command(Command::Rect { rect, color });
        }
    }

    pub(crate) fn draw_box(&mut self, r: Recti, color: Color) {
        self.draw_rect(rect(r.x + 1, r.y, r.width - 2, 1), color);
        self.draw_rect(rect(r.x + 1, r.y + r.height - 1, r.width - 2, 1), color);
        self.draw_rect(rect(r.x, r.y, 1, r.height), color);
        self.draw_rect(rect(r.x + r.width - 1, r.y, 1, r.height), color);
    }

    // Partially visible primitives are bracketed by clip commands; the trailing
    // reset keeps the scissor from leaking into later commands.
    fn clipped(&mut self, area: Recti, cmd: Command) {
        let clipped = self.check_clip(area);
        match clipped {
            Clip::All => return,
            Clip::Part => {
                let clip = self.current_clip_rect();
                self.set_clip(clip)
            }
            _ => (),
        }
        self.push_command(cmd);
        if clipped != Clip::None {
            self.set_clip(UNCLIPPED_RECT);
        }
    }

    pub(crate) fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color) {
        let area = rect(pos.x, pos.y, self.metrics.text_width(text), self.metrics.line_height());
        self.clipped(area, Command::Text { text: String::from(text), pos, color });
    }

    pub(crate) fn draw_icon(&mut self, id: Icon, rect: Recti, color: Color) { self.clipped(rect, Command::Icon { rect, id, color }); }

    pub(crate) fn draw_custom(&mut self, rect: Recti, callback: CustomDrawFn) {
        let view = intersect_rects(rect, self.current_clip_rect());
        self.clipped(rect, Command::Custom { args: CustomDrawArgs { content_area: rect, view }, callback });
    }

    pub(crate) fn draw_frame(&mut self, rect: Recti, colorid: ControlColor) {
        let color = self.style.color(colorid);
        self.draw_rect(rect, color);
        if colorid == ControlColor::ScrollBase || colorid == ControlColor::ScrollThumb || colorid == ControlColor::TitleBG {
            return;
        }
        let border_color = self.style.color(ControlColor::Border);
        if border_color.a != 0 {
            self.draw_box(expand_rect(rect, 1), border_color);
        }
    }

    pub(crate) fn draw_widget_frame(&mut self, focused: bool, hovered: bool, rect: Recti, mut colorid: ControlColor, opt: WidgetOption) {
        if opt.has_no_frame() {
            return;
        }
        if focused {
            colorid.focus()
        } else if hovered {
            colorid.hover()
        }
        self.draw_frame(rect, colorid);
    }

    pub(crate) fn draw_control_text(&mut self, text: &str, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        let width = self.metrics.text_width(text);
        let padding = self.style.padding;
        let color = self.style.color(colorid);
        let line_height = self.metrics.line_height();

        self.push_clip_rect(rect);
        let y = rect.y + (rect.height - line_height) / 2;
        let x = if opt.is_aligned_center() {
            rect.x + (rect.width - width) / 2
        } else if opt.is_aligned_right() {
            rect.x + rect.width - width - padding
        } else {
            rect.x + padding
        };
        self.draw_text(text, vec2(x, y), color);
        self.pop_clip_rect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &CommandList) -> Vec<&'static str> {
        list.as_slice()
            .iter()
            .map(|cmd| match cmd {
                Command::Jump { .. } => "jump",
                Command::Clip { .. } => "clip",
                Command::Rect { .. } => "rect",
                Command::Text { .. } => "text",
                Command::Icon { .. } => "icon",
                Command::Custom { .. } => "custom",
            })
            .collect()
    }

    #[test]
    fn rects_are_trimmed_to_the_clip() {
        let mut list = CommandList::default();
        let mut clip = ClipStack::default();
        let style = Style::default();
        let font = FixedFont::default();
        let mut dc = DrawCtx::new(&mut list, &mut clip, &style, &font);
        dc.push_clip_rect(rect(0, 0, 50, 50));
        dc.draw_rect(rect(40, 40, 20, 20), Color::default());
        dc.draw_rect(rect(60, 60, 20, 20), Color::default());
        dc.pop_clip_rect();
        match list.get(0) {
            Some(Command::Rect { rect, .. }) => assert_eq!((rect.x, rect.y, rect.width, rect.height), (40, 40, 10, 10)),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn partially_visible_text_is_bracketed_by_clips() {
        let mut list = CommandList::default();
        let mut clip = ClipStack::default();
        let style = Style::default();
        let font = FixedFont { glyph_width: 10, line_height: 10 };
        let mut dc = DrawCtx::new(&mut list, &mut clip, &style, &font);
        dc.push_clip_rect(rect(0, 0, 25, 25));
        dc.draw_text("abc", vec2(0, 0), Color::default());
        dc.draw_text("ab", vec2(0, 0), Color::default());
        dc.draw_text("a", vec2(30, 0), Color::default());
        dc.pop_clip_rect();
        assert_eq!(kinds(&list), vec!["clip", "text", "clip", "text"]);
        match list.get(2) {
            Some(Command::Clip { rect }) => assert_eq!(rect.width, UNCLIPPED_RECT.width),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn scroll_frames_have_no_border() {
        let mut list = CommandList::default();
        let mut clip = ClipStack::default();
        let style = Style::default();
        let font = FixedFont::default();
        let mut dc = DrawCtx::new(&mut list, &mut clip, &style, &font);
        dc.draw_frame(rect(0, 0, 10, 10), ControlColor::ScrollBase);
        assert_eq!(list.len(), 1);
        let mut dc = DrawCtx::new(&mut list, &mut clip, &style, &font);
        dc.draw_frame(rect(0, 0, 10, 10), ControlColor::Button);
        assert_eq!(list.len(), 6);
    }
}
