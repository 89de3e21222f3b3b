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
use std::cmp::min;

use tracing::debug;

use super::format_real;
use crate::*;

impl Context {
    /// Single-line text box editing `buf` in place, with an explicit ID and rectangle.
    ///
    /// Keeps focus while clicked until the user clicks elsewhere or presses Return, which
    /// also reports [`ResourceState::SUBMIT`].
    pub fn textbox_raw(&mut self, buf: &mut String, id: Id, r: Recti, opt: WidgetOption) -> ResourceState {
        let control = self.update_control(Some(id), r, opt | WidgetOption::HOLD_FOCUS);
        let mut res = ResourceState::NONE;

        if control.focused {
            if !self.input.input_text.is_empty() {
                buf.push_str(&self.input.input_text);
                res |= ResourceState::CHANGE;
            }
            if self.input.key_pressed.is_backspace() && buf.pop().is_some() {
                res |= ResourceState::CHANGE;
            }
            if self.input.key_pressed.is_return() {
                self.set_focus(None);
                res |= ResourceState::SUBMIT;
            }
        }

        self.draw_control_frame(id, r, ControlColor::Base, opt);
        if self.focus == Some(id) {
            let color = self.style.color(ControlColor::Text);
            let textw = self.metrics.text_width(buf);
            let texth = self.metrics.line_height();
            // overflowing text scrolls left so the caret stays visible
            let ofx = r.width - self.style.padding - textw - 1;
            let textx = r.x + min(ofx, self.style.padding);
            let texty = r.y + (r.height - texth) / 2;
            self.push_clip_rect(r);
            self.draw_text(buf, vec2(textx, texty), color);
            self.draw_rect(rect(textx + textw, texty, 1, texth), color);
            self.pop_clip_rect();
        } else {
            self.draw_control_text(buf, r, ControlColor::Text, opt);
        }
        res
    }

    /// Text box in the next cell; the ID comes from the address of `buf`.
    pub fn textbox_ex(&mut self, buf: &mut String, opt: WidgetOption) -> ResourceState {
        let id = self.get_id_from_ptr(&*buf);
        let r = self.layout.next();
        self.textbox_raw(buf, id, r, opt)
    }

    /// Text box with default options.
    pub fn textbox(&mut self, buf: &mut String) -> ResourceState { self.textbox_ex(buf, WidgetOption::NONE) }

    /// Shift-click text entry shared by sliders and number fields.
    ///
    /// Returns `true` while the widget is in text-entry mode; `value` is only written when the
    /// edit is committed by Return or by losing focus.
    pub(crate) fn number_textbox(&mut self, value: &mut Real, r: Recti, id: Id, precision: usize) -> bool {
        if self.input.mouse_pressed.is_left() && self.input.key_down.is_shift() && self.hover == Some(id) {
            self.number_edit = Some(id);
            self.number_edit_buf = format_real(*value, precision);
        }
        if self.number_edit != Some(id) {
            return false;
        }

        let mut buf = std::mem::take(&mut self.number_edit_buf);
        let res = self.textbox_raw(&mut buf, id, r, WidgetOption::NONE);
        if res.is_submitted() || self.focus != Some(id) {
            *value = match buf.trim().parse::<Real>() {
                Ok(v) => v,
                Err(err) => {
                    debug!(input = buf.as_str(), %err, "number edit rejected, using 0");
                    0.0
                }
            };
            self.number_edit = None;
            buf.clear();
        }
        self.number_edit_buf = buf;
        true
    }
}
