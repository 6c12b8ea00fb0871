//! Scenario 5: vector grow/shrink/CoW at an exact trie-capacity boundary.

use jtree::error::TreeError;
use jtree::Vector;

#[test]
fn grow_shrink_roundtrip_with_small_widths() {
    let is = 3u32;
    let es = 2u32;
    let l2 = 1usize << (2 * is + es);

    let mut v: Vector<i32> = Vector::with_widths(is, es).unwrap();
    for i in 0..l2 {
        v.push(i as i32);
    }
    assert_eq!(v.len(), l2);
    assert_eq!(v.shift(), 2 * is + es);

    for i in 0..l2 {
        let current = *v.get(i).unwrap();
        v.set(i, current + 1).unwrap();
    }

    for i in (0..l2).rev() {
        let popped = v.pop().unwrap();
        assert_eq!(popped, i as i32 + 1);
    }
    assert!(v.is_empty());
    assert!(matches!(
        v.pop(),
        Err(TreeError::IndexOutOfBounds { index: 0, len: 0 })
    ));
}
