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
//! Built-in widgets. Every widget is a method on [`crate::Context`] that allocates the next
//! layout cell, runs the hover/focus state machine, and emits its draw commands.

mod core_widgets;
mod nodes;
mod slider;
mod textbox;

use crate::Real;

/// Clamps without panicking on an inverted range.
pub(crate) fn clamp_real(v: Real, low: Real, high: Real) -> Real {
    if v < low {
        low
    } else if v > high {
        high
    } else {
        v
    }
}

pub(crate) fn format_real(v: Real, precision: usize) -> String { format!("{:.*}", precision, v) }

#[cfg(test)]
pub(crate) mod test_support {
    use crate::*;

    /// Frame with a title-less window covering `(0, 0, 300, 200)`.
    pub fn in_window<F: FnOnce(&mut Context)>(ctx: &mut Context, f: F) {
        ctx.frame(|ctx| ctx.window("test", rect(0, 0, 300, 200), ContainerOption::NO_TITLE, f));
    }

    pub fn texts(ctx: &Context) -> Vec<String> {
        ctx.commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_tolerates_inverted_ranges() {
        assert_eq!(clamp_real(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_real(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_real(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_real(3.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn formats_with_precision() {
        assert_eq!(format_real(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_real(2.0, 0), "2");
    }
}
