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
use tracing::debug;

use crate::Id;

/// Slots reserved for windows, panels, and popups.
pub const CONTAINER_POOL_SIZE: usize = 48;
/// Slots reserved for expanded headers and tree nodes.
pub const TREENODE_POOL_SIZE: usize = 48;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Occupied slot: the owning ID and the frame it was last touched on.
pub struct PoolItem {
    /// Owner of the slot.
    pub id: Id,
    /// Frame counter value of the last touch.
    pub last_update: usize,
}

#[derive(Clone, Debug)]
/// Fixed-capacity ID to slot map with least-recently-updated eviction.
pub struct Pool<const N: usize> {
    items: [Option<PoolItem>; N],
}

impl<const N: usize> Default for Pool<N> {
    fn default() -> Self { Self { items: [None; N] } }
}

impl<const N: usize> Pool<N> {
    /// Creates an empty pool.
    pub fn new() -> Self { Self::default() }

    /// Total number of slots.
    pub fn capacity(&self) -> usize { N }

    /// Number of occupied slots.
    pub fn len(&self) -> usize { self.items.iter().filter(|it| it.is_some()).count() }

    /// Returns `true` when no slot is occupied.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the slot content at `idx`.
    pub fn item(&self, idx: usize) -> Option<PoolItem> { self.items.get(idx).copied().flatten() }

    /// Finds the slot owned by `id`.
    pub fn get(&self, id: Id) -> Option<usize> {
        self.items.iter().position(|it| matches!(it, Some(item) if item.id == id))
    }

    /// Marks `idx` as touched on `frame`.
    pub fn update(&mut self, idx: usize, frame: usize) {
        if let Some(Some(item)) = self.items.get_mut(idx) {
            item.last_update = frame;
        }
    }

    /// Claims a slot for `id`: the first free one, otherwise the least recently updated.
    /// Ties go to the lowest index. The returned slot is already touched on `frame`.
    pub fn init(&mut self, id: Id, frame: usize) -> usize {
        let idx = match self.items.iter().position(|it| it.is_none()) {
            Some(free) => free,
            None => {
                let mut victim = 0;
                for (i, it) in self.items.iter().enumerate() {
                    if let (Some(item), Some(best)) = (it, &self.items[victim]) {
                        if item.last_update < best.last_update {
                            victim = i;
                        }
                    }
                }
                if let Some(old) = self.items[victim] {
                    debug!(slot = victim, evicted = old.id.raw(), claimed = id.raw(), "pool slot evicted");
                }
                victim
            }
        };
        self.items[idx] = Some(PoolItem { id, last_update: frame });
        idx
    }

    /// Releases the slot at `idx`.
    pub fn remove(&mut self, idx: usize) {
        if let Some(slot) = self.items.get_mut(idx) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_free_slots_in_order() {
        let mut pool = Pool::<4>::new();
        assert_eq!(pool.init(Id::new(10), 1), 0);
        assert_eq!(pool.init(Id::new(11), 1), 1);
        assert_eq!(pool.get(Id::new(11)), Some(1));
        assert_eq!(pool.get(Id::new(12)), None);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn evicts_least_recently_updated() {
        let mut pool = Pool::<3>::new();
        for (i, id) in [1u64, 2, 3].iter().enumerate() {
            pool.init(Id::new(*id), i + 1);
        }
        pool.update(0, 10);
        let idx = pool.init(Id::new(4), 11);
        assert_eq!(idx, 1);
        assert_eq!(pool.get(Id::new(2)), None);
        assert_eq!(pool.item(idx), Some(PoolItem { id: Id::new(4), last_update: 11 }));
    }

    #[test]
    fn ties_evict_lowest_index() {
        let mut pool = Pool::<2>::new();
        pool.init(Id::new(1), 5);
        pool.init(Id::new(2), 5);
        assert_eq!(pool.init(Id::new(3), 6), 0);
    }

    #[test]
    fn removed_slot_is_reused_first() {
        let mut pool = Pool::<3>::new();
        pool.init(Id::new(1), 1);
        pool.init(Id::new(2), 1);
        pool.remove(0);
        assert!(pool.item(0).is_none());
        assert_eq!(pool.init(Id::new(3), 2), 0);
    }
}
