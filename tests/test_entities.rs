use space_invaders::entities::*;

#[test]
fn direction_flips_and_steps() {
    assert_eq!(Direction::default(), Direction::Right);
    assert_eq!(Direction::Right.dx(), 1);
    assert_eq!(Direction::Left.dx(), -1);
    assert_eq!(Direction::Right.reversed(), Direction::Left);
    assert_eq!(Direction::Left.reversed().reversed(), Direction::Left);
}

#[test]
fn snapshot_clone_is_independent() {
    // Renderers may take a copy between ticks; it must not alias the original.
    let original = Shield {
        blocks: vec![ShieldBlock { x: 1, y: 2, health: 3 }],
    };
    let mut cloned = original.clone();
    cloned.blocks[0].health = 0;
    cloned.blocks.push(ShieldBlock { x: 2, y: 2, health: 3 });

    assert_eq!(original.blocks.len(), 1);
    assert_eq!(original.blocks[0].health, 3);
}
