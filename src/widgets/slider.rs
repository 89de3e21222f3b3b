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
use super::{clamp_real, format_real};
use crate::*;

impl Context {
    /// Horizontal slider over `[low, high]` with two decimals and no stepping.
    pub fn slider(&mut self, value: &mut Real, low: Real, high: Real) -> ResourceState {
        self.slider_ex(value, low, high, 0.0, 2, WidgetOption::ALIGN_CENTER)
    }

    /// Slider with explicit step, display precision, and options.
    ///
    /// While focused and held, the pointer position maps linearly onto the range. A non-zero
    /// `step` snaps to its multiples. Shift-click switches to text entry.
    pub fn slider_ex(&mut self, value: &mut Real, low: Real, high: Real, step: Real, precision: usize, opt: WidgetOption) -> ResourceState {
        let last = *value;
        let mut v = last;
        let id = self.get_id_from_ptr(&*value);
        let base = self.layout.next();

        if self.number_textbox(&mut v, base, id, precision) {
            if v != last {
                *value = clamp_real(v, low, high);
                return ResourceState::CHANGE;
            }
            return ResourceState::NONE;
        }

        let control = self.update_control(Some(id), base, opt);
        if control.focused && (self.input.mouse_down | self.input.mouse_pressed).is_left() && base.width > 0 {
            v = low + (self.input.mouse_pos.x - base.x) as Real * (high - low) / base.width as Real;
            if step != 0.0 {
                v = (v / step).round() * step;
            }
        }
        v = clamp_real(v, low, high);
        *value = v;
        let res = if last != v { ResourceState::CHANGE } else { ResourceState::NONE };

        self.draw_control_frame(id, base, ControlColor::Base, opt);
        let w = self.style.thumb_size;
        let span = high - low;
        let x = if span != 0.0 { ((v - low) * (base.width - w) as Real / span) as i32 } else { 0 };
        let thumb = rect(base.x + x, base.y, w, base.height);
        self.draw_control_frame(id, thumb, ControlColor::Button, opt);
        let text = format_real(v, precision);
        self.draw_control_text(&text, base, ControlColor::Text, opt);
        res
    }

    /// Draggable number field: horizontal pointer motion adds `step` per pixel.
    pub fn number(&mut self, value: &mut Real, step: Real) -> ResourceState { self.number_ex(value, step, 2, WidgetOption::ALIGN_CENTER) }

    /// Number field with explicit precision and options. Shift-click switches to text entry.
    pub fn number_ex(&mut self, value: &mut Real, step: Real, precision: usize, opt: WidgetOption) -> ResourceState {
        let id = self.get_id_from_ptr(&*value);
        let base = self.layout.next();
        let last = *value;

        if self.number_textbox(value, base, id, precision) {
            return if *value != last { ResourceState::CHANGE } else { ResourceState::NONE };
        }

        let control = self.update_control(Some(id), base, opt);
        if control.focused && self.input.mouse_down.is_left() {
            *value += self.input.mouse_delta.x as Real * step;
        }
        let res = if *value != last { ResourceState::CHANGE } else { ResourceState::NONE };

        self.draw_control_frame(id, base, ControlColor::Base, opt);
        let text = format_real(*value, precision);
        self.draw_control_text(&text, base, ControlColor::Text, opt);
        res
    }
}
