use overlap::Rect;

fn main() {
    let reference = Rect::new(0, 0, 2, 2);
    let candidates = [
        Rect::new(1, 1, 2, 2),
        Rect::new(2, 0, 2, 2),
        Rect::new(5, 5, 1, 1),
    ];

    for candidate in &candidates {
        println!(
            "{:?} intersects {:?}: {}",
            reference,
            candidate,
            reference.intersects(candidate)
        );
    }
}
