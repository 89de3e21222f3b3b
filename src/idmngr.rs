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
use crate::Id;

/// FNV-1a 64-bit offset basis used when no ID scope is active.
pub const HASH_INITIAL: u64 = 14695981039346656037;
const HASH_PRIME: u64 = 1099511628211;

/// Folds `bytes` into `seed` with FNV-1a.
pub fn hash_bytes(seed: Id, bytes: &[u8]) -> Id {
    let mut h = seed.raw();
    for b in bytes {
        h = (h ^ *b as u64).wrapping_mul(HASH_PRIME);
    }
    Id::new(h)
}

#[derive(Clone, Debug, Default)]
/// Scoped ID generator.
///
/// Every ID is the hash of its bytes seeded with the top of the scope stack, so equal labels
/// under different parents never collide.
pub struct IdManager {
    last_id: Option<Id>,
    id_stack: Vec<Id>,
}

impl IdManager {
    /// Creates an empty manager.
    pub fn new() -> Self { Self::default() }

    /// Returns the most recently computed ID.
    pub fn last_id(&self) -> Option<Id> { self.last_id }

    /// Number of active scopes.
    pub fn len(&self) -> usize { self.id_stack.len() }

    /// Returns `true` when no scope is active.
    pub fn is_empty(&self) -> bool { self.id_stack.is_empty() }

    fn seed(&self) -> Id {
        match self.id_stack.last() {
            Some(id) => *id,
            None => Id::new(HASH_INITIAL),
        }
    }

    /// Hashes raw bytes under the current scope.
    pub fn get_id_from_bytes(&mut self, bytes: &[u8]) -> Id {
        let res = hash_bytes(self.seed(), bytes);
        self.last_id = Some(res);
        res
    }

    /// Hashes a label under the current scope.
    pub fn get_id_from_str(&mut self, s: &str) -> Id { self.get_id_from_bytes(s.as_bytes()) }

    /// Hashes the address of `orig_id`. Stable as long as the referenced value does not move.
    pub fn get_id_from_ptr<T: ?Sized>(&mut self, orig_id: &T) -> Id {
        let ptr = orig_id as *const T as *const u8 as usize;
        self.get_id_from_bytes(&ptr.to_le_bytes())
    }

    /// Pushes an already computed ID as the new scope.
    pub fn push_id(&mut self, id: Id) { self.id_stack.push(id); }

    /// Hashes `s` and pushes the result as the new scope.
    pub fn push_id_from_str(&mut self, s: &str) -> Id {
        let id = self.get_id_from_str(s);
        self.id_stack.push(id);
        id
    }

    /// Pops the innermost scope.
    pub fn pop_id(&mut self) {
        if self.id_stack.pop().is_none() {
            panic!("{}", FrameError::Underflow(StackKind::Id));
        }
    }
}
