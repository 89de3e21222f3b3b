//! Property-based invariants for the ID hasher, the LRU pool, clipping, and jump linking.

use microui_lite::*;
use proptest::prelude::*;

fn small_rect_strategy() -> impl Strategy<Value = Recti> {
    (0i32..=500, 0i32..=500, 0i32..=500, 0i32..=500).prop_map(|(x, y, w, h)| rect(x, y, w, h))
}

fn tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

fn area(r: Recti) -> i64 { r.width.max(0) as i64 * r.height.max(0) as i64 }

proptest! {
    #[test]
    fn ids_are_deterministic(scope in "[a-z]{0,8}", label in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut a = IdManager::new();
        let mut b = IdManager::new();
        a.push_id_from_str(&scope);
        b.push_id_from_str(&scope);
        let ia = a.get_id_from_bytes(&label);
        prop_assert_eq!(ia, b.get_id_from_bytes(&label));

        let seed = hash_bytes(Id::new(HASH_INITIAL), scope.as_bytes());
        prop_assert_eq!(ia, hash_bytes(seed, &label));
    }

    #[test]
    fn single_byte_change_changes_id(label in proptest::collection::vec(any::<u8>(), 1..32), pos in any::<prop::sample::Index>(), flip in 1u8..=255) {
        let mut ids = IdManager::new();
        let original = ids.get_id_from_bytes(&label);
        let mut changed = label.clone();
        let i = pos.index(changed.len());
        changed[i] ^= flip;
        prop_assert_ne!(original, ids.get_id_from_bytes(&changed));
    }

    #[test]
    fn untouched_first_entry_is_the_one_evicted(start in 0u64..1_000) {
        let mut pool = Pool::<16>::new();
        let first = pool.init(Id::new(start), 1);
        let mut frame = 1;
        for raw in start + 1..start + 16 {
            frame += 1;
            pool.init(Id::new(raw), frame);
        }
        prop_assert_eq!(pool.len(), pool.capacity());
        let slot = pool.init(Id::new(start + 16), frame + 1);
        prop_assert_eq!(slot, first);
        prop_assert!(pool.get(Id::new(start)).is_none());
        for raw in start + 1..=start + 16 {
            prop_assert!(pool.get(Id::new(raw)).is_some());
        }
    }

    #[test]
    fn pool_evicts_least_recently_updated(ops in proptest::collection::vec(0u64..20, 1..120)) {
        let mut pool = Pool::<8>::new();
        for (i, raw) in ops.iter().enumerate() {
            let frame = i + 1;
            let id = Id::new(*raw);
            match pool.get(id) {
                Some(idx) => pool.update(idx, frame),
                None => {
                    let full = pool.len() == pool.capacity();
                    let oldest = (0..pool.capacity()).filter_map(|s| pool.item(s)).map(|it| it.last_update).min();
                    let before: Vec<Option<PoolItem>> = (0..pool.capacity()).map(|s| pool.item(s)).collect();
                    let idx = pool.init(id, frame);
                    if full {
                        prop_assert_eq!(before[idx].map(|it| it.last_update), oldest);
                    } else {
                        prop_assert!(before[idx].is_none());
                    }
                }
            }
            prop_assert!(pool.get(id).is_some());
            prop_assert!(pool.len() <= pool.capacity());
        }
    }

    #[test]
    fn clip_push_pop_restores(a in small_rect_strategy(), b in small_rect_strategy()) {
        let mut clip = ClipStack::default();
        clip.push(a);
        let before = clip.current();
        clip.push(b);
        clip.pop();
        prop_assert_eq!(tuple(clip.current()), tuple(before));
        prop_assert_eq!(tuple(before), tuple(a));
    }

    #[test]
    fn classification_agrees_with_intersection(c in small_rect_strategy(), r in small_rect_strategy()) {
        let mut clip = ClipStack::default();
        clip.push(c);
        let inter = intersect_rects(r, c);
        match clip.check(r) {
            Clip::None => prop_assert_eq!(tuple(inter), tuple(r)),
            Clip::All => prop_assert_eq!(area(inter), 0),
            Clip::Part => {
                prop_assert!(area(inter) > 0);
                prop_assert!(area(inter) < area(r));
            }
        }
    }

    #[test]
    fn jump_links_visit_every_root_once_in_z_order(count in 1usize..6, raises in proptest::collection::vec(0usize..6, 0..6)) {
        let names: Vec<String> = (0..count).map(|i| format!("w{i}")).collect();
        let declare = |ctx: &mut Context| {
            for (i, name) in names.iter().enumerate() {
                ctx.window(name, rect(i as i32 * 10, 0, 60, 60), ContainerOption::NO_TITLE, |ctx| ctx.label(name));
            }
        };

        let mut ctx = Context::default();
        ctx.input_mut().mousemove(1000, 1000);
        ctx.frame(declare);
        ctx.frame(|ctx| {
            for r in &raises {
                ctx.bring_to_front(&names[r % count]);
            }
        });
        ctx.frame(declare);

        let visited: Vec<String> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        let mut expected = names.clone();
        expected.sort_by_key(|name| ctx.get_container(name).zindex);
        prop_assert_eq!(visited, expected);

        let drawn = ctx.command_list().as_slice().iter().filter(|cmd| !matches!(cmd, Command::Jump { .. })).count();
        prop_assert_eq!(ctx.commands().count(), drawn);
    }

    #[test]
    fn focus_belongs_to_a_declared_widget(clicks in proptest::collection::vec((0i32..3, any::<bool>()), 1..20)) {
        let labels = ["a", "b", "c"];
        let mut ctx = Context::default();
        let mut ids = Vec::new();
        for (slot, press) in clicks {
            let (x, y) = (20, 10 + slot * 26);
            if press {
                ctx.input_mut().mousedown(x, y, MouseButton::LEFT);
            } else {
                ctx.input_mut().mouseup(x, y, MouseButton::LEFT);
            }
            ctx.frame(|ctx| {
                ctx.window("buttons", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |ctx| {
                    for label in labels {
                        ctx.button(label);
                        if let Some(id) = ctx.last_id() {
                            if !ids.contains(&id) {
                                ids.push(id);
                            }
                        }
                    }
                });
            });
            if let Some(focus) = ctx.focus() {
                prop_assert!(ids.contains(&focus));
            }
        }
    }
}
