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
use std::fmt;
use std::rc::Rc;

use crate::{Color, Icon, Recti, Renderer, Vec2i};

#[derive(Copy, Clone, Debug)]
/// Geometry handed to custom drawing callbacks.
pub struct CustomDrawArgs {
    /// Full rectangle reserved for the drawing.
    pub content_area: Recti,
    /// Visible part of `content_area` after clipping.
    pub view: Recti,
}

/// Opaque drawing callback carried by [`Command::Custom`].
pub type CustomDrawFn = Rc<dyn Fn(&CustomDrawArgs)>;

/// One entry of the per-frame command list.
pub enum Command {
    /// Continue traversal at `dst`.
    Jump {
        /// Target index.
        dst: usize,
    },
    /// Replace the renderer's scissor rectangle.
    Clip {
        /// New clip rectangle.
        rect: Recti,
    },
    /// Fill a rectangle.
    Rect {
        /// Filled area.
        rect: Recti,
        /// Fill color.
        color: Color,
    },
    /// Draw a line of text.
    Text {
        /// Top-left corner of the text.
        pos: Vec2i,
        /// Text color.
        color: Color,
        /// The string itself.
        text: String,
    },
    /// Draw a built-in icon.
    Icon {
        /// Cell the icon is centered in.
        rect: Recti,
        /// Which icon.
        id: Icon,
        /// Icon color.
        color: Color,
    },
    /// Run a caller supplied drawing callback.
    Custom {
        /// Geometry for the callback.
        args: CustomDrawArgs,
        /// The callback.
        callback: CustomDrawFn,
    },
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jump { dst } => f.debug_struct("Jump").field("dst", dst).finish(),
            Self::Clip { rect } => f.debug_struct("Clip").field("rect", rect).finish(),
            Self::Rect { rect, color } => f.debug_struct("Rect").field("rect", rect).field("color", color).finish(),
            Self::Text { pos, color, text } => f.debug_struct("Text").field("pos", pos).field("color", color).field("text", text).finish(),
            Self::Icon { rect, id, color } => f.debug_struct("Icon").field("rect", rect).field("id", id).field("color", color).finish(),
            Self::Custom { args, .. } => f.debug_struct("Custom").field("args", args).finish_non_exhaustive(),
        }
    }
}

#[derive(Default, Debug)]
/// Flat command buffer rebuilt every frame.
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub(crate) fn clear(&mut self) { self.commands.clear(); }

    pub(crate) fn push(&mut self, cmd: Command) -> usize {
        self.commands.push(cmd);
        self.commands.len() - 1
    }

    /// Pushes a jump whose destination is patched later.
    pub(crate) fn push_jump(&mut self) -> usize { self.push(Command::Jump { dst: 0 }) }

    pub(crate) fn set_jump(&mut self, idx: usize, target: usize) {
        if let Some(Command::Jump { dst }) = self.commands.get_mut(idx) {
            *dst = target;
        }
    }

    /// Number of stored commands, jumps included.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Returns `true` when the buffer is empty.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Raw access by index, in storage order.
    pub fn get(&self, idx: usize) -> Option<&Command> { self.commands.get(idx) }

    /// Storage-order view of the buffer.
    pub fn as_slice(&self) -> &[Command] { &self.commands }

    /// Visits the commands in draw order, following jumps.
    pub fn iter(&self) -> Commands<'_> {
        Commands { list: &self.commands, pos: 0, jumps_left: self.commands.len() }
    }

    /// Replays the draw order into `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        for cmd in self.iter() {
            match cmd {
                Command::Clip { rect } => renderer.set_clip_rect(*rect),
                Command::Rect { rect, color } => renderer.draw_rect(*rect, *color),
                Command::Text { pos, color, text } => renderer.draw_text(text, *pos, *color),
                Command::Icon { rect, id, color } => renderer.draw_icon(*id, *rect, *color),
                Command::Custom { args, callback } => renderer.draw_custom(args, &**callback),
                Command::Jump { .. } => {}
            }
        }
    }
}

/// Jump-following iterator over a [`CommandList`]. Never yields [`Command::Jump`].
pub struct Commands<'a> {
    list: &'a [Command],
    pos: usize,
    jumps_left: usize,
}

impl<'a> Iterator for Commands<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cmd = self.list.get(self.pos)?;
            match cmd {
                Command::Jump { dst } => {
                    // a finished list takes each jump at most once
                    if self.jumps_left == 0 {
                        return None;
                    }
                    self.jumps_left -= 1;
                    self.pos = *dst;
                }
                _ => {
                    self.pos += 1;
                    return Some(cmd);
                }
            }
        }
    }
}
