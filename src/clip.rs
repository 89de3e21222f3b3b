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
use crate::error::{FrameError, StackKind};
use crate::{rect, Clip, Recti, Vec2i, UNCLIPPED_RECT};

/// Intersection of two rectangles, collapsed to a zero-sized rectangle when they are disjoint.
pub fn intersect_rects(r1: Recti, r2: Recti) -> Recti {
    let x1 = r1.x.max(r2.x);
    let y1 = r1.y.max(r2.y);
    let x2 = (r1.x + r1.width).min(r2.x + r2.width).max(x1);
    let y2 = (r1.y + r1.height).min(r2.y + r2.height).max(y1);
    rect(x1, y1, x2 - x1, y2 - y1)
}

/// Half-open point test: the right and bottom edges are outside.
pub fn rect_contains(r: Recti, p: Vec2i) -> bool {
    p.x >= r.x && p.x < r.x + r.width && p.y >= r.y && p.y < r.y + r.height
}

pub(crate) fn classify(clip: Recti, r: Recti) -> Clip {
    if r.width <= 0
        || r.height <= 0
        || r.x >= clip.x + clip.width
        || r.x + r.width <= clip.x
        || r.y >= clip.y + clip.height
        || r.y + r.height <= clip.y
    {
        return Clip::All;
    }
    if r.x >= clip.x && r.x + r.width <= clip.x + clip.width && r.y >= clip.y && r.y + r.height <= clip.y + clip.height {
        return Clip::None;
    }
    Clip::Part
}

#[derive(Clone, Debug, Default)]
/// Stack of nested clip rectangles; every push is intersected with the current top.
pub struct ClipStack {
    stack: Vec<Recti>,
}

impl ClipStack {
    /// Pushes `r` intersected with the current clip.
    pub fn push(&mut self, r: Recti) {
        let top = intersect_rects(r, self.current());
        self.stack.push(top);
    }

    /// Pushes the unclipped sentinel, resetting clipping for a root container.
    pub fn push_unclipped(&mut self) { self.stack.push(UNCLIPPED_RECT); }

    /// Pops the innermost clip rectangle.
    pub fn pop(&mut self) {
        if self.stack.pop().is_none() {
            panic!("{}", FrameError::Underflow(StackKind::Clip));
        }
    }

    /// Current clip rectangle, unclipped when the stack is empty.
    pub fn current(&self) -> Recti { self.stack.last().copied().unwrap_or(UNCLIPPED_RECT) }

    /// Classifies `r` against the current clip rectangle.
    pub fn check(&self, r: Recti) -> Clip { classify(self.current(), r) }

    /// Depth of the stack.
    pub fn len(&self) -> usize { self.stack.len() }

    /// Returns `true` when nothing is pushed.
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }
}
