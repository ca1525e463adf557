use space_shooter::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 33, 24);
    assert_eq!(r.right(), 43);
    assert_eq!(r.bottom(), 44);
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn rect_touching_edges_do_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    assert!(!a.overlaps(&Rect::new(-10, -10, 10, 10)));
}

#[test]
fn rect_containment_overlaps() {
    let outer = Rect::new(0, 0, 40, 40);
    let inner = Rect::new(18, 5, 4, 10);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        ship: Ship { rect: Rect::new(180, 500, 40, 40) },
        bullets: Vec::new(),
        enemies: Vec::new(),
        level: 1,
        wave: 2,
        enemy_speed: 3,
        lives: 5,
        hits: 0,
        status: RunState::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.rect.x = 99;
    cloned.hits = 999;
    cloned.enemies.push(Enemy { rect: Rect::new(5, 40, 33, 24) });

    assert_eq!(original.ship.rect.x, 180);
    assert_eq!(original.hits, 0);
    assert!(original.enemies.is_empty());
}
