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
#![deny(missing_docs)]
//! `microui-lite` is an immediate-mode GUI core inspired by [rxi/microui](https://github.com/rxi/microui).
//!
//! The host feeds one [`Input`] snapshot per frame, brackets its widget calls with
//! [`Context::begin`] and [`Context::end`], and then walks the resulting command list
//! (see [`Context::commands`] or [`Context::render`]). Root containers are linked through
//! jump commands so the list is visited in z-order even though windows are declared in
//! call order.
//!
//! The context owns `Rc` state and is therefore neither `Send` nor `Sync`: it lives on the
//! thread that drives the UI.

use std::rc::Rc;

mod clip;
mod command;
mod container;
mod context;
mod draw_context;
mod error;
mod idmngr;
mod layout;
mod pool;
mod scrollbar;
mod widgets;
mod window;

pub use clip::{intersect_rects, rect_contains, ClipStack};
pub use command::{Command, CommandList, Commands, CustomDrawArgs, CustomDrawFn};
pub use container::Container;
pub use context::Context;
pub use error::{FrameError, StackKind};
pub use idmngr::{hash_bytes, IdManager, HASH_INITIAL};
pub use layout::SizePolicy;
pub use pool::{Pool, PoolItem, CONTAINER_POOL_SIZE, TREENODE_POOL_SIZE};
pub use rs_math3d::*;
pub use window::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

use bitflags::*;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Widget identifier derived from hashed labels, pointers, or raw bytes.
pub struct Id(u64);

impl Id {
    /// Wraps a raw hash value.
    pub fn new(value: u64) -> Self { Self(value) }

    /// Returns the raw numeric value wrapped by this ID.
    pub fn raw(self) -> u64 { self.0 }
}

/// Command-level rendering backend.
///
/// The context never rasterizes anything itself; it hands every visited command of the
/// finalized list to an implementation of this trait, most recent clip first.
pub trait Renderer {
    /// Replaces the scissor rectangle applied to subsequent draws.
    fn set_clip_rect(&mut self, rect: Recti);
    /// Fills a rectangle.
    fn draw_rect(&mut self, rect: Recti, color: Color);
    /// Draws a single line of text whose top-left corner is `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color);
    /// Draws a built-in icon centered in `rect`.
    fn draw_icon(&mut self, icon: Icon, rect: Recti, color: Color);
    /// Runs a caller supplied drawing callback. The default forwards the call verbatim.
    fn draw_custom(&mut self, args: &CustomDrawArgs, callback: &dyn Fn(&CustomDrawArgs)) { callback(args) }
}

/// Font metrics provider used for text placement and wrapping.
pub trait TextMetrics {
    /// Width in pixels of `text` rendered on a single line.
    fn text_width(&self, text: &str) -> i32;
    /// Height in pixels of one line of text.
    fn line_height(&self) -> i32;
}

#[derive(Copy, Clone, Debug)]
/// Monospaced metrics, handy for tests and bitmap fonts.
pub struct FixedFont {
    /// Advance of every glyph.
    pub glyph_width: i32,
    /// Height of a line.
    pub line_height: i32,
}

impl Default for FixedFont {
    fn default() -> Self { Self { glyph_width: 8, line_height: 12 } }
}

impl TextMetrics for FixedFont {
    fn text_width(&self, text: &str) -> i32 { text.chars().count() as i32 * self.glyph_width }
    fn line_height(&self) -> i32 { self.line_height }
}

/// Shared handle to the metrics provider.
pub type MetricsHandle = Rc<dyn TextMetrics>;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Describes whether a rectangle is clipped by the current clip rectangle.
pub enum Clip {
    /// Rectangle is fully visible.
    None = 0,
    /// Rectangle is partially visible.
    Part = 1,
    /// Rectangle is fully clipped away.
    All = 2,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Built-in icons referenced by [`Command::Icon`].
pub enum Icon {
    /// Window close cross.
    Close = 1,
    /// Checkbox tick.
    Check = 2,
    /// Collapsed tree node arrow.
    Collapsed = 3,
    /// Expanded tree node arrow.
    Expanded = 4,
}

/// Number of entries in [`Style::colors`], one per [`ControlColor`].
pub const COLOR_COUNT: usize = 14;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Identifiers for each of the built-in style colors.
pub enum ControlColor {
    /// Thumb of scrollbars.
    ScrollThumb = 13,
    /// Base frame of scrollbars.
    ScrollBase = 12,
    /// Base color for focused widgets.
    BaseFocus = 11,
    /// Base color while the pointer hovers the widget.
    BaseHover = 10,
    /// Default base color.
    Base = 9,
    /// Button color while the widget is focused.
    ButtonFocus = 8,
    /// Button color while the pointer hovers the widget.
    ButtonHover = 7,
    /// Default button color.
    Button = 6,
    /// Panel background color.
    PanelBG = 5,
    /// Window title text color.
    TitleText = 4,
    /// Window title background color.
    TitleBG = 3,
    /// Window background color.
    WindowBG = 2,
    /// Outline/border color.
    Border = 1,
    /// Default text color.
    Text = 0,
}

impl ControlColor {
    /// Promotes the enum to the hover variant when relevant.
    pub fn hover(&mut self) {
        *self = match self {
            Self::Base => Self::BaseHover,
            Self::Button => Self::ButtonHover,
            _ => *self,
        }
    }

    /// Promotes the enum to the focused variant when relevant.
    pub fn focus(&mut self) {
        *self = match self {
            Self::Base => Self::BaseFocus,
            Self::Button => Self::ButtonFocus,
            Self::BaseHover => Self::BaseFocus,
            Self::ButtonHover => Self::ButtonFocus,
            _ => *self,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// State bits returned by widgets to describe their interaction outcome.
    pub struct ResourceState : u32 {
        /// Indicates that the widget's data changed.
        const CHANGE = 4;
        /// Indicates that the widget was submitted (e.g. button clicked).
        const SUBMIT = 2;
        /// Indicates that the widget is currently active.
        const ACTIVE = 1;
        /// Indicates no interaction.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns `true` if the widget changed its bound value.
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }
    /// Returns `true` if the widget signaled submission.
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }
    /// Returns `true` if the widget is active.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if the state contains no flags.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options that control how a container behaves.
    pub struct ContainerOption : u32 {
        /// Only reachable through an explicit open (popups); never created implicitly.
        const CLOSED = 2048;
        /// Closes on any click outside while not the hover root.
        const POPUP = 1024;
        /// Automatically adapts the container size to its content.
        const AUTO_SIZE = 512;
        /// Hides the title bar.
        const NO_TITLE = 128;
        /// Hides the close button.
        const NO_CLOSE = 64;
        /// Disables scrollbars and wheel scrolling.
        const NO_SCROLL = 32;
        /// Prevents the user from resizing the window.
        const NO_RESIZE = 16;
        /// Hides the outer frame.
        const NO_FRAME = 8;
        /// Title bar and close button ignore the pointer.
        const NO_INTERACT = 4;
        /// No special options.
        const NONE = 0;
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Widget specific options that influence layout and interactivity.
    pub struct WidgetOption : u32 {
        /// Headers and tree nodes start expanded.
        const EXPANDED = 4096;
        /// Keeps keyboard focus while the widget is held.
        const HOLD_FOCUS = 256;
        /// Draws the widget without its frame/background.
        const NO_FRAME = 128;
        /// Disables interaction for the widget.
        const NO_INTERACT = 4;
        /// Aligns the widget to the right side of the cell.
        const ALIGN_RIGHT = 2;
        /// Centers the widget inside the cell.
        const ALIGN_CENTER = 1;
        /// No special options.
        const NONE = 0;
    }
}

impl ContainerOption {
    /// Returns `true` if the option requests automatic sizing.
    pub fn is_auto_sizing(&self) -> bool { self.intersects(Self::AUTO_SIZE) }

    /// Returns `true` if the title bar should be hidden.
    pub fn has_no_title(&self) -> bool { self.intersects(Self::NO_TITLE) }

    /// Returns `true` if the close button should be hidden.
    pub fn has_no_close(&self) -> bool { self.intersects(Self::NO_CLOSE) }

    /// Returns `true` if the container is fixed-size.
    pub fn is_fixed(&self) -> bool { self.intersects(Self::NO_RESIZE) }

    /// Returns `true` if the outer frame is hidden.
    pub fn has_no_frame(&self) -> bool { self.intersects(Self::NO_FRAME) }

    /// Returns `true` if scrolling is disabled.
    pub fn has_no_scroll(&self) -> bool { self.intersects(Self::NO_SCROLL) }

    /// Returns `true` for popup windows.
    pub fn is_popup(&self) -> bool { self.intersects(Self::POPUP) }

    /// Returns `true` if the container must not be created implicitly.
    pub fn is_closed(&self) -> bool { self.intersects(Self::CLOSED) }

    /// Widget options used for the container's own controls (title, close, resize).
    pub fn widget_opt(&self) -> WidgetOption {
        if self.intersects(Self::NO_INTERACT) { WidgetOption::NO_INTERACT } else { WidgetOption::NONE }
    }
}

impl WidgetOption {
    /// Returns `true` if the widget should keep focus while held.
    pub fn is_holding_focus(&self) -> bool { self.intersects(WidgetOption::HOLD_FOCUS) }

    /// Returns `true` if the widget shouldn't draw its frame.
    pub fn has_no_frame(&self) -> bool { self.intersects(WidgetOption::NO_FRAME) }

    /// Returns `true` if the widget is non-interactive.
    pub fn is_not_interactive(&self) -> bool { self.intersects(WidgetOption::NO_INTERACT) }
    /// Returns `true` if the widget prefers right alignment.
    pub fn is_aligned_right(&self) -> bool { self.intersects(WidgetOption::ALIGN_RIGHT) }
    /// Returns `true` if the widget prefers centered alignment.
    pub fn is_aligned_center(&self) -> bool { self.intersects(WidgetOption::ALIGN_CENTER) }
    /// Returns `true` if a node should start expanded.
    pub fn is_expanded(&self) -> bool { self.intersects(WidgetOption::EXPANDED) }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier and editing key state tracked by the input system.
    pub struct KeyMode : u32 {
        /// Return/Enter key held.
        const RETURN = 16;
        /// Backspace key held.
        const BACKSPACE = 8;
        /// Alt key held.
        const ALT = 4;
        /// Control key held.
        const CTRL = 2;
        /// Shift key held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl KeyMode {
    /// Returns `true` if no modifiers are active.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Return/Enter is held.
    pub fn is_return(&self) -> bool { self.intersects(Self::RETURN) }
    /// Returns `true` if Backspace is held.
    pub fn is_backspace(&self) -> bool { self.intersects(Self::BACKSPACE) }
    /// Returns `true` if Alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
}

#[derive(Copy, Clone, Default, Debug)]
/// Interaction state resolved for a widget during the current frame.
/// Produced by [`Context::update_control`].
pub struct ControlState {
    /// Cursor is hovering the widget.
    pub hovered: bool,
    /// Widget currently owns focus.
    pub focused: bool,
    /// Left button was pressed on the focused widget this frame.
    pub clicked: bool,
    /// Left button is held down while the widget is focused.
    pub active: bool,
}

#[derive(Clone, Debug)]
/// Aggregates raw input collected for the current frame.
pub struct Input {
    mouse_pos: Vec2i,
    last_mouse_pos: Vec2i,
    mouse_delta: Vec2i,
    scroll_delta: Vec2i,
    mouse_down: MouseButton,
    mouse_pressed: MouseButton,
    key_down: KeyMode,
    key_pressed: KeyMode,
    input_text: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            last_mouse_pos: Vec2i::default(),
            mouse_delta: Vec2i::default(),
            scroll_delta: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            mouse_pressed: MouseButton::NONE,
            key_down: KeyMode::NONE,
            key_pressed: KeyMode::NONE,
            input_text: String::default(),
        }
    }
}

impl Input {
    /// Returns the current pointer position.
    pub fn mouse_pos(&self) -> Vec2i { self.mouse_pos }

    /// Returns the pointer movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2i { self.mouse_delta }

    /// Returns the accumulated wheel movement of this frame.
    pub fn scroll_delta(&self) -> Vec2i { self.scroll_delta }

    /// Returns the currently held mouse buttons.
    pub fn mouse_down(&self) -> MouseButton { self.mouse_down }

    /// Returns the mouse buttons pressed this frame.
    pub fn mouse_pressed(&self) -> MouseButton { self.mouse_pressed }

    /// Returns the state of all modifier keys.
    pub fn key_state(&self) -> KeyMode { self.key_down }

    /// Returns the keys pressed this frame.
    pub fn key_pressed(&self) -> KeyMode { self.key_pressed }

    /// Returns the accumulated UTF-8 text entered this frame.
    pub fn text_input(&self) -> &str { &self.input_text }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
        self.mouse_pressed |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
    }

    /// Accumulates scroll wheel movement.
    pub fn scroll(&mut self, x: i32, y: i32) {
        self.scroll_delta.x += x;
        self.scroll_delta.y += y;
    }

    /// Records that a key was pressed.
    pub fn keydown(&mut self, key: KeyMode) {
        self.key_pressed |= key;
        self.key_down |= key;
    }

    /// Records that a key was released.
    pub fn keyup(&mut self, key: KeyMode) { self.key_down &= !key; }

    /// Appends UTF-8 text to the input buffer.
    pub fn text(&mut self, text: &str) { self.input_text.push_str(text); }

    pub(crate) fn prelude(&mut self) {
        self.mouse_delta.x = self.mouse_pos.x - self.last_mouse_pos.x;
        self.mouse_delta.y = self.mouse_pos.y - self.last_mouse_pos.y;
    }

    pub(crate) fn epilogue(&mut self) {
        self.key_pressed = KeyMode::NONE;
        self.input_text.clear();
        self.mouse_pressed = MouseButton::NONE;
        self.scroll_delta = vec2(0, 0);
        self.last_mouse_pos = self.mouse_pos;
    }
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

#[derive(Copy, Clone, Debug)]
/// Collection of visual constants that drive widget appearance.
pub struct Style {
    /// Default cell width used by layouts when no size policy overrides it.
    pub default_cell_width: i32,
    /// Minimum default cell height; the line height wins when larger.
    pub default_cell_height: i32,
    /// Inner padding applied to most widgets.
    pub padding: i32,
    /// Spacing between cells in a layout.
    pub spacing: i32,
    /// Indentation applied to nested tree content.
    pub indent: i32,
    /// Height of window title bars.
    pub title_height: i32,
    /// Width of scrollbars.
    pub scrollbar_size: i32,
    /// Size of slider and scrollbar thumbs.
    pub thumb_size: i32,
    /// Palette of [`ControlColor`] entries.
    pub colors: [Color; COLOR_COUNT],
}

impl Style {
    /// Looks up a palette entry.
    pub fn color(&self, id: ControlColor) -> Color { self.colors[id as usize] }
}

/// Floating-point type used by widgets.
pub type Real = f32;

/// Stand-in for "no clipping": a rectangle centred on the origin covering the whole usable plane.
pub const UNCLIPPED_RECT: Recti = Recti {
    x: -0x1000000,
    y: -0x1000000,
    width: 0x2000000,
    height: 0x2000000,
};

impl Default for Style {
    fn default() -> Self {
        Self {
            default_cell_width: 68,
            default_cell_height: 10,
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                Color { r: 230, g: 230, b: 230, a: 255 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 50, g: 50, b: 50, a: 255 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 240, g: 240, b: 240, a: 255 },
                Color { r: 0, g: 0, b: 0, a: 0 },
                Color { r: 75, g: 75, b: 75, a: 255 },
                Color { r: 95, g: 95, b: 95, a: 255 },
                Color { r: 115, g: 115, b: 115, a: 255 },
                Color { r: 30, g: 30, b: 30, a: 255 },
                Color { r: 35, g: 35, b: 35, a: 255 },
                Color { r: 40, g: 40, b: 40, a: 255 },
                Color { r: 43, g: 43, b: 43, a: 255 },
                Color { r: 30, g: 30, b: 30, a: 255 },
            ],
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Expands (or shrinks) a rectangle uniformly on all sides.
pub fn expand_rect(r: Recti, n: i32) -> Recti { rect(r.x - n, r.y - n, r.width + n * 2, r.height + n * 2) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_epilogue_clears_edges_but_keeps_held_state() {
        let mut input = Input::default();
        input.mousedown(10, 20, MouseButton::LEFT);
        input.keydown(KeyMode::SHIFT);
        input.text("ab");
        input.scroll(0, 3);
        input.prelude();
        assert_eq!((input.mouse_delta().x, input.mouse_delta().y), (10, 20));

        input.epilogue();
        assert!(input.mouse_pressed().is_none());
        assert!(input.mouse_down().is_left());
        assert!(input.key_pressed().is_none());
        assert!(input.key_state().is_shift());
        assert!(input.text_input().is_empty());
        assert_eq!(input.scroll_delta().y, 0);

        input.prelude();
        assert_eq!((input.mouse_delta().x, input.mouse_delta().y), (0, 0));
    }

    #[test]
    fn control_color_variants() {
        let mut c = ControlColor::Button;
        c.hover();
        assert_eq!(c, ControlColor::ButtonHover);
        c.focus();
        assert_eq!(c, ControlColor::ButtonFocus);

        let mut text = ControlColor::Text;
        text.focus();
        assert_eq!(text, ControlColor::Text);
    }

    #[test]
    fn palette_covers_every_control_color() {
        let style = Style::default();
        assert_eq!(style.colors.len(), COLOR_COUNT);
        assert_eq!(ControlColor::ScrollThumb as usize, COLOR_COUNT - 1);
        assert_eq!(style.color(ControlColor::ScrollThumb), style.colors[COLOR_COUNT - 1]);
    }

    #[test]
    fn unclipped_rect_is_centred_on_origin() {
        assert_eq!(UNCLIPPED_RECT.x + UNCLIPPED_RECT.width, -UNCLIPPED_RECT.x);
        assert_eq!(UNCLIPPED_RECT.y + UNCLIPPED_RECT.height, -UNCLIPPED_RECT.y);
    }

    #[test]
    fn fixed_font_counts_chars_not_bytes() {
        let font = FixedFont { glyph_width: 5, line_height: 9 };
        assert_eq!(font.text_width("h\u{e9}llo"), 25);
        assert_eq!(font.line_height(), 9);
    }
}
